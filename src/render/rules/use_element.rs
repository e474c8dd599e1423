use crate::pool::XLINK_NAMESPACE;
use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::UseElement;

use super::ensure_finite;

/// Renders a [`UseElement`] as a `use` element referencing a definition.
pub fn use_element_rule() -> RenderRule {
    RenderRule::new(
        UseElement::TAG,
        |node, projection, chain, _prior, renderer| {
            let Some(use_element) = node.source_as::<UseElement>() else {
                return Ok(None);
            };
            chain.add_selector(use_element.selector());

            let anchor = use_element.anchor_transformed(projection);
            ensure_finite("use", &[anchor])?;

            let id = renderer.pool_mut().acquire("use");
            let element = renderer.pool_mut().node_mut(id);
            element.set_attribute("x", anchor.x.to_string());
            element.set_attribute("y", anchor.y.to_string());
            element.set_attribute_ns(XLINK_NAMESPACE, "href", use_element.href.clone());
            Ok(Some(id))
        },
    )
}
