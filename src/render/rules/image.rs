use crate::pool::XLINK_NAMESPACE;
use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::TwoPointImage;

use super::ensure_finite;

/// Renders a [`TwoPointImage`] as an `image` element with an `xlink:href`
/// reference.
pub fn image_rule() -> RenderRule {
    RenderRule::new(
        TwoPointImage::TAG,
        |node, projection, chain, _prior, renderer| {
            let Some(image) = node.source_as::<TwoPointImage>() else {
                return Ok(None);
            };
            chain.add_selector(image.selector());

            let start = image.start_transformed(projection);
            let size = image.size_transformed(projection);
            ensure_finite("image", &[start, size])?;

            let id = renderer.pool_mut().acquire("image");
            let element = renderer.pool_mut().node_mut(id);
            element.set_attribute("x", start.x.to_string());
            element.set_attribute("y", start.y.to_string());
            element.set_attribute("width", size.x.to_string());
            element.set_attribute("height", size.y.to_string());
            element.set_attribute_ns(XLINK_NAMESPACE, "href", image.href.clone());
            Ok(Some(id))
        },
    )
}
