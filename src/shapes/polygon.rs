use std::any::Any;

use crate::math::{Matrix3, Vector2};
use crate::scene::{GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// A closed polygon through a list of points.
pub struct Polygon {
    pub points: Vec<Vector2>,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl Polygon {
    pub const TAG: TypeTag = TypeTag::new("polygon");

    pub fn new(points: Vec<Vector2>) -> Self {
        Self {
            points,
            selector: StyleSelector::new("polygon"),
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

impl GraphicItem for Polygon {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[Polygon::TAG];
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

/// An open polyline through a list of points.
pub struct Polyline {
    pub points: Vec<Vector2>,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl Polyline {
    pub const TAG: TypeTag = TypeTag::new("polyline");

    pub fn new(points: Vec<Vector2>) -> Self {
        Self {
            points,
            selector: StyleSelector::new("polyline"),
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

impl GraphicItem for Polyline {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[Polyline::TAG];
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
