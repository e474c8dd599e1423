use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::Mask;

use super::render_children_into;

/// Renders a [`Mask`] as a `mask` element with its rendered children.
///
/// The engine writes the mandatory id; referencing items point at it through
/// their style's `mask` field.
pub fn mask_rule() -> RenderRule {
    RenderRule::new(Mask::TAG, |node, _projection, chain, _prior, renderer| {
        let Some(mask) = node.source_as::<Mask>() else {
            return Ok(None);
        };
        chain.add_selector(mask.selector());

        let element = renderer.pool_mut().acquire("mask");
        render_children_into(renderer, node, chain, element)?;
        Ok(Some(element))
    })
}
