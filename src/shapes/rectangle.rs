use std::any::Any;

use crate::math::{Matrix3, Vector2};
use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// An axis-aligned rectangle defined by two opposite corners.
pub struct TwoPointRectangle {
    pub start: Vector2,
    pub end: Vector2,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl TwoPointRectangle {
    pub const TAG: TypeTag = TypeTag::new("two-point-rectangle");

    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self {
            start,
            end,
            selector: StyleSelector::new("rectangle"),
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

    /// The corner with the smaller coordinates after projection.
    ///
    /// Projections may mirror or flip; normalizing keeps width and height
    /// positive regardless of corner order.
    pub fn start_transformed(&self, projection: &Matrix3) -> Vector2 {
        let a = projection.apply(self.start);
        let b = projection.apply(self.end);
        Vector2::new(a.x.min(b.x), a.y.min(b.y))
    }

    /// Absolute size after projection.
    pub fn size_transformed(&self, projection: &Matrix3) -> Vector2 {
        let a = projection.apply(self.start);
        let b = projection.apply(self.end);
        Vector2::new((b.x - a.x).abs(), (b.y - a.y).abs())
    }
}

impl GraphicItem for TwoPointRectangle {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[TwoPointRectangle::TAG];
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
