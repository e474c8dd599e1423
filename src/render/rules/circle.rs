use crate::math::Matrix3;
use crate::pool::NodeId;
use crate::render::{RenderError, RenderRule, Renderer};
use crate::scene::{GraphicItem, PresentationNode};
use crate::shapes::{FixedRadiusCircle, TwoPointCircle};
use crate::style::SelectorChain;

/// Renders a [`TwoPointCircle`] as a `circle` element; the radius scales
/// with the projection.
pub fn two_point_circle_rule() -> RenderRule {
    RenderRule::new(TwoPointCircle::TAG, render_circle)
}

/// Renders any item carrying the [`FixedRadiusCircle`] tag, including
/// refinements like control points, as a `circle` element with an
/// unprojected radius.
pub fn fixed_radius_circle_rule() -> RenderRule {
    RenderRule::new(FixedRadiusCircle::TAG, render_circle)
}

/// Both circle rules share one body: the geometry comes from the item's
/// circle capability, not from a concrete downcast, so refining types render
/// the same way.
fn render_circle(
    node: &PresentationNode,
    projection: &Matrix3,
    chain: &mut SelectorChain,
    _prior: Option<NodeId>,
    renderer: &mut Renderer,
) -> Result<Option<NodeId>, RenderError> {
    let Some(item) = node.source() else {
        return Ok(None);
    };
    let Some(circle) = item.as_circle() else {
        return Ok(None);
    };
    chain.add_selector(item.selector());

    let center = circle.center_transformed(projection);
    let radius = circle.radius_transformed(projection);
    if !center.is_finite() || !radius.is_finite() {
        return Err(RenderError::NonFiniteGeometry { kind: "circle" });
    }

    let id = renderer.pool_mut().acquire("circle");
    let element = renderer.pool_mut().node_mut(id);
    element.set_attribute("cx", center.x.to_string());
    element.set_attribute("cy", center.y.to_string());
    element.set_attribute("r", radius.to_string());
    Ok(Some(id))
}
