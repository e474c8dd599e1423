use crate::render::RenderRule;
use crate::scene::View;

use super::render_children_into;

/// Renders the [`View`] root as a `g` element containing the mounted
/// content.
///
/// The view adds no selector of its own; stylesheet rules anchor at the
/// content items below it.
pub fn view_rule() -> RenderRule {
    RenderRule::new(View::TAG, |node, _projection, chain, _prior, renderer| {
        if node.source().is_none() {
            return Ok(None);
        }

        let group = renderer.pool_mut().acquire("g");
        render_children_into(renderer, node, chain, group)?;
        Ok(Some(group))
    })
}
