use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::Group;

use super::render_children_into;

/// Renders any item carrying the group tag (plain groups and the control
/// types refining them) as a `g` element containing its rendered children.
///
/// The item's selector goes onto the shared chain before recursion, so every
/// descendant resolves against it; each child then recurses on its own
/// clone.
pub fn group_rule() -> RenderRule {
    RenderRule::new(Group::TAG, |node, _projection, chain, _prior, renderer| {
        let Some(item) = node.source() else {
            return Ok(None);
        };
        chain.add_selector(item.selector());

        let group = renderer.pool_mut().acquire("g");
        render_children_into(renderer, node, chain, group)?;
        Ok(Some(group))
    })
}
