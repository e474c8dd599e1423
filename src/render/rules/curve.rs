use crate::render::{RenderError, RenderRule};
use crate::scene::GraphicItem;
use crate::shapes::QuadraticCurve;

use super::ensure_finite;

/// Renders a [`QuadraticCurve`] as a `path` element.
///
/// The path starts with a move to the first point, then one `Q` command
/// consuming the remaining control/end point pairs.
pub fn quadratic_curve_rule() -> RenderRule {
    RenderRule::new(
        QuadraticCurve::TAG,
        |node, projection, chain, _prior, renderer| {
            let Some(curve) = node.source_as::<QuadraticCurve>() else {
                return Ok(None);
            };
            chain.add_selector(curve.selector());

            let points = curve.points_transformed(projection);
            if points.len() < 3 {
                return Err(RenderError::TooFewCurvePoints {
                    count: points.len(),
                });
            }
            ensure_finite("curve", &points)?;

            let path = points
                .iter()
                .enumerate()
                .map(|(index, p)| {
                    if index == 0 {
                        format!("M {},{} Q", p.x, p.y)
                    } else {
                        format!("{},{}", p.x, p.y)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");

            let id = renderer.pool_mut().acquire("path");
            renderer.pool_mut().node_mut(id).set_attribute("d", path);
            Ok(Some(id))
        },
    )
}
