use crate::render::RenderRule;
use crate::scene::GraphicItem;
use crate::shapes::TwoPointRectangle;

use super::ensure_finite;

/// Renders a [`TwoPointRectangle`] as a `rect` element.
pub fn rectangle_rule() -> RenderRule {
    RenderRule::new(
        TwoPointRectangle::TAG,
        |node, projection, chain, _prior, renderer| {
            let Some(rectangle) = node.source_as::<TwoPointRectangle>() else {
                return Ok(None);
            };
            chain.add_selector(rectangle.selector());

            let start = rectangle.start_transformed(projection);
            let size = rectangle.size_transformed(projection);
            ensure_finite("rectangle", &[start, size])?;

            let id = renderer.pool_mut().acquire("rect");
            let element = renderer.pool_mut().node_mut(id);
            element.set_attribute("x", start.x.to_string());
            element.set_attribute("y", start.y.to_string());
            element.set_attribute("width", size.x.to_string());
            element.set_attribute("height", size.y.to_string());
            Ok(Some(id))
        },
    )
}
