use std::any::Any;

use crate::math::{Matrix3, Vector2};
use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// A referenced image spanning the rectangle between two corners.
pub struct TwoPointImage {
    pub start: Vector2,
    pub end: Vector2,
    pub href: String,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl TwoPointImage {
    pub const TAG: TypeTag = TypeTag::new("two-point-image");

    pub fn new(start: Vector2, end: Vector2, href: impl Into<String>) -> Self {
        Self {
            start,
            end,
            href: href.into(),
            selector: StyleSelector::new("image"),
            id: None,
            style: None,
        }
    }

    pub fn with_selector(mut self, selector: impl Into<StyleSelector>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_style(mut self, style: GraphicStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn start_transformed(&self, projection: &Matrix3) -> Vector2 {
        let a = projection.apply(self.start);
        let b = projection.apply(self.end);
        Vector2::new(a.x.min(b.x), a.y.min(b.y))
    }

    pub fn size_transformed(&self, projection: &Matrix3) -> Vector2 {
        let a = projection.apply(self.start);
        let b = projection.apply(self.end);
        Vector2::new((b.x - a.x).abs(), (b.y - a.y).abs())
    }
}

impl GraphicItem for TwoPointImage {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[TwoPointImage::TAG];
        CHAIN
    }

    fn selector(&self) -> StyleSelector {
        self.selector.clone()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn inline_style(&self) -> Option<&GraphicStyle> {
        self.style.as_ref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
