use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::Line;

use super::ensure_finite;

/// Renders a [`Line`] as a `line` element with projected endpoints.
pub fn line_rule() -> RenderRule {
    RenderRule::new(Line::TAG, |node, projection, chain, _prior, renderer| {
        let Some(line) = node.source_as::<Line>() else {
            return Ok(None);
        };
        chain.add_selector(line.selector());

        let start = line.start_transformed(projection);
        let end = line.end_transformed(projection);
        ensure_finite("line", &[start, end])?;

        let id = renderer.pool_mut().acquire("line");
        let element = renderer.pool_mut().node_mut(id);
        element.set_attribute("x1", start.x.to_string());
        element.set_attribute("y1", start.y.to_string());
        element.set_attribute("x2", end.x.to_string());
        element.set_attribute("y2", end.y.to_string());
        Ok(Some(id))
    })
}
