use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::SymbolElement;

use super::render_children_into;

/// Renders a [`SymbolElement`] as a `symbol` definition with its rendered
/// children.
pub fn symbol_rule() -> RenderRule {
    RenderRule::new(
        SymbolElement::TAG,
        |node, _projection, chain, _prior, renderer| {
            let Some(symbol) = node.source_as::<SymbolElement>() else {
                return Ok(None);
            };
            chain.add_selector(symbol.selector());

            let element = renderer.pool_mut().acquire("symbol");
            render_children_into(renderer, node, chain, element)?;
            Ok(Some(element))
        },
    )
}
