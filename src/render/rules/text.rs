use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::{ScalableText, Text};

use super::ensure_finite;

/// Renders a [`Text`] as a `text` element anchored at its projected point.
pub fn text_rule() -> RenderRule {
    RenderRule::new(Text::TAG, |node, projection, chain, _prior, renderer| {
        let Some(text) = node.source_as::<Text>() else {
            return Ok(None);
        };
        chain.add_selector(text.selector());

        let anchor = text.anchor_transformed(projection);
        ensure_finite("text", &[anchor])?;

        let id = renderer.pool_mut().acquire("text");
        let element = renderer.pool_mut().node_mut(id);
        element.set_attribute("x", anchor.x.to_string());
        element.set_attribute("y", anchor.y.to_string());
        element.set_attribute("text-anchor", text.text_anchor.as_str());
        element.set_text(text.content.clone());
        Ok(Some(id))
    })
}

/// Renders a [`ScalableText`]: like [`text_rule`], plus a `font-size`
/// attribute scaled by the projection.
pub fn scalable_text_rule() -> RenderRule {
    RenderRule::new(
        ScalableText::TAG,
        |node, projection, chain, _prior, renderer| {
            let Some(text) = node.source_as::<ScalableText>() else {
                return Ok(None);
            };
            chain.add_selector(text.selector());

            let anchor = text.anchor_transformed(projection);
            ensure_finite("text", &[anchor])?;
            let font_size = text.font_size_transformed(projection);

            let id = renderer.pool_mut().acquire("text");
            let element = renderer.pool_mut().node_mut(id);
            element.set_attribute("x", anchor.x.to_string());
            element.set_attribute("y", anchor.y.to_string());
            element.set_attribute("text-anchor", text.text_anchor.as_str());
            element.set_text(text.content.clone());
            element.set_attribute("font-size", font_size.to_string());
            Ok(Some(id))
        },
    )
}
