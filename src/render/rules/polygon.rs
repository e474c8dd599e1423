use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::{Polygon, Polyline};

use super::{ensure_finite, points_attribute};

/// Renders a [`Polygon`] as a `polygon` element with a projected points list.
pub fn polygon_rule() -> RenderRule {
    RenderRule::new(Polygon::TAG, |node, projection, chain, _prior, renderer| {
        let Some(polygon) = node.source_as::<Polygon>() else {
            return Ok(None);
        };
        chain.add_selector(polygon.selector());

        let points = polygon.points_transformed(projection);
        ensure_finite("polygon", &points)?;

        let id = renderer.pool_mut().acquire("polygon");
        renderer
            .pool_mut()
            .node_mut(id)
            .set_attribute("points", points_attribute(&points));
        Ok(Some(id))
    })
}

/// Renders a [`Polyline`] as a `polyline` element.
pub fn polyline_rule() -> RenderRule {
    RenderRule::new(Polyline::TAG, |node, projection, chain, _prior, renderer| {
        let Some(polyline) = node.source_as::<Polyline>() else {
            return Ok(None);
        };
        chain.add_selector(polyline.selector());

        let points = polyline.points_transformed(projection);
        ensure_finite("polyline", &points)?;

        let id = renderer.pool_mut().acquire("polyline");
        renderer
            .pool_mut()
            .node_mut(id)
            .set_attribute("points", points_attribute(&points));
        Ok(Some(id))
    })
}
