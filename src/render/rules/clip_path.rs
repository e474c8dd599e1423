use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::ClipPath;

use super::render_children_into;

/// Renders a [`ClipPath`] as a `clipPath` element with its rendered
/// children.
pub fn clip_path_rule() -> RenderRule {
    RenderRule::new(ClipPath::TAG, |node, _projection, chain, _prior, renderer| {
        let Some(clip_path) = node.source_as::<ClipPath>() else {
            return Ok(None);
        };
        chain.add_selector(clip_path.selector());

        let element = renderer.pool_mut().acquire("clipPath");
        render_children_into(renderer, node, chain, element)?;
        Ok(Some(element))
    })
}
