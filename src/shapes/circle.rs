use std::any::Any;

use crate::math::{Matrix3, Vector2};
use crate::scene::{CircleShape, GraphicItem, TypeTag};
use crate::style::{GraphicStyle, StyleSelector};

/// A circle defined by its center and a point on its circumference, so the
/// radius scales with the projection.
pub struct TwoPointCircle {
    pub center: Vector2,
    pub circumference: Vector2,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl TwoPointCircle {
    pub const TAG: TypeTag = TypeTag::new("two-point-circle");

    pub fn new(center: Vector2, circumference: Vector2) -> Self {
        Self {
            center,
            circumference,
            selector: StyleSelector::new("circle"),
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
}

impl CircleShape for TwoPointCircle {
    fn center_transformed(&self, projection: &Matrix3) -> Vector2 {
        projection.apply(self.center)
    }

    fn radius_transformed(&self, projection: &Matrix3) -> f64 {
        projection
            .apply(self.center)
            .distance_to(projection.apply(self.circumference))
    }
}

impl GraphicItem for TwoPointCircle {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[TwoPointCircle::TAG];
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

    fn as_circle(&self) -> Option<&dyn CircleShape> {
        Some(self)
    }
}

/// A circle whose radius is a fixed length in target units, unaffected by
/// zoom. Used for markers that must keep their screen size.
pub struct FixedRadiusCircle {
    pub center: Vector2,
    pub radius: f64,
    selector: StyleSelector,
    id: Option<String>,
    style: Option<GraphicStyle>,
}

impl FixedRadiusCircle {
    pub const TAG: TypeTag = TypeTag::new("fixed-radius-circle");

    pub fn new(center: Vector2, radius: f64) -> Self {
        Self {
            center,
            radius,
            selector: StyleSelector::new("circle"),
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
}

impl CircleShape for FixedRadiusCircle {
    fn center_transformed(&self, projection: &Matrix3) -> Vector2 {
        projection.apply(self.center)
    }

    fn radius_transformed(&self, _projection: &Matrix3) -> f64 {
        self.radius
    }
}

impl GraphicItem for FixedRadiusCircle {
    fn type_chain(&self) -> &'static [TypeTag] {
        const CHAIN: &[TypeTag] = &[FixedRadiusCircle::TAG];
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

    fn as_circle(&self) -> Option<&dyn CircleShape> {
        Some(self)
    }
}
