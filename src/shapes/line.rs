use std::any::Any;

use crate::math::{Matrix3, Vector2};
use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// A straight line between two points.
pub struct Line {
    pub start: Vector2,
    pub end: Vector2,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl Line {
    pub const TAG: TypeTag = TypeTag::new("line");

    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self {
            start,
            end,
            selector: StyleSelector::new("line"),
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
        projection.apply(self.start)
    }

    pub fn end_transformed(&self, projection: &Matrix3) -> Vector2 {
        projection.apply(self.end)
    }
}

impl GraphicItem for Line {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[Line::TAG];
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
