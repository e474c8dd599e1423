use crate::math::Vector2;
use crate::pool::{write_svg, NodeId, SVG_NAMESPACE, XLINK_NAMESPACE};

use super::Renderer;

/// The root `svg` element a renderer draws into.
///
/// Owns nothing but the node id; the node itself lives in the renderer's
/// pool like every other element.
pub struct SvgContext {
    node: NodeId,
}

impl SvgContext {
    /// Acquire the root element and stamp the document namespaces.
    pub fn new(renderer: &mut Renderer) -> Self {
        let node = renderer.pool_mut().acquire("svg");
        let element = renderer.pool_mut().node_mut(node);
        element.set_attribute("xmlns", SVG_NAMESPACE);
        element.set_attribute("xmlns:xlink", XLINK_NAMESPACE);
        Self { node }
    }

    /// The target node to pass to [`Renderer::render`].
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Set the drawing size and matching view box.
    pub fn set_size(&self, renderer: &mut Renderer, size: Vector2) {
        let element = renderer.pool_mut().node_mut(self.node);
        element.set_attribute("width", size.x.to_string());
        element.set_attribute("height", size.y.to_string());
        element.set_attribute("viewBox", format!("0,0,{},{}", size.x, size.y));
    }

    /// Serialize the current document as SVG text.
    pub fn to_svg(&self, renderer: &Renderer) -> String {
        write_svg(renderer.pool(), self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RenderOptions, RuleSet};
    use crate::style::StyleSheet;

    #[test]
    fn test_context_carries_namespaces_and_size() {
        let mut renderer = Renderer::new(
            RuleSet::new(),
            StyleSheet::new(),
            RenderOptions::default(),
        );
        let context = SvgContext::new(&mut renderer);
        context.set_size(&mut renderer, Vector2::new(640.0, 480.0));

        let element = renderer.pool().node(context.node());
        assert_eq!(element.attribute("xmlns"), Some(SVG_NAMESPACE));
        assert_eq!(element.attribute("viewBox"), Some("0,0,640,480"));
        assert_eq!(element.attribute("width"), Some("640"));
    }
}
