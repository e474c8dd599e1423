use std::any::Any;

use crate::math::{Matrix3, Vector2};
use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// A reference to a reusable element, positioned at an anchor point.
pub struct UseElement {
    pub anchor: Vector2,
    /// Reference target, e.g. `#marker`.
    pub href: String,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl UseElement {
    pub const TAG: TypeTag = TypeTag::new("use-element");

    pub fn new(anchor: Vector2, href: impl Into<String>) -> Self {
        Self {
            anchor,
            href: href.into(),
            selector: StyleSelector::new("use"),
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

    pub fn anchor_transformed(&self, projection: &Matrix3) -> Vector2 {
        projection.apply(self.anchor)
    }
}

impl GraphicItem for UseElement {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[UseElement::TAG];
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
