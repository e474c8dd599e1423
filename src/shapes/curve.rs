use std::any::Any;

use crate::math::{Matrix3, Vector2};
use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// A chain of quadratic Bézier segments: a start point followed by pairs of
/// control and end points.
///
/// At least three points are required for one segment; the render rule
/// treats fewer as malformed input.
pub struct QuadraticCurve {
    pub points: Vec<Vector2>,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl QuadraticCurve {
    pub const TAG: TypeTag = TypeTag::new("quadratic-curve");

    pub fn new(points: Vec<Vector2>) -> Self {
        Self {
            points,
            selector: StyleSelector::new("curve"),
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

    pub fn points_transformed(&self, projection: &Matrix3) -> Vec<Vector2> {
        self.points.iter().map(|p| projection.apply(*p)).collect()
    }
}

impl GraphicItem for QuadraticCurve {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[QuadraticCurve::TAG];
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
