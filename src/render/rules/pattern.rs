use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::TwoPointPattern;

use super::{ensure_finite, render_children_into};

/// Renders a [`TwoPointPattern`] as a `pattern` element: projected tile
/// geometry plus the rendered tile content.
pub fn pattern_rule() -> RenderRule {
    RenderRule::new(
        TwoPointPattern::TAG,
        |node, projection, chain, _prior, renderer| {
            let Some(pattern) = node.source_as::<TwoPointPattern>() else {
                return Ok(None);
            };
            chain.add_selector(pattern.selector());

            let start = pattern.start_transformed(projection);
            let size = pattern.size_transformed(projection);
            ensure_finite("pattern", &[start, size])?;

            let id = renderer.pool_mut().acquire("pattern");
            {
                let element = renderer.pool_mut().node_mut(id);
                element.set_attribute("x", start.x.to_string());
                element.set_attribute("y", start.y.to_string());
                element.set_attribute("width", size.x.to_string());
                element.set_attribute("height", size.y.to_string());
            }
            render_children_into(renderer, node, chain, id)?;
            Ok(Some(id))
        },
    )
}
