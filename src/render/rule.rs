use crate::math::Matrix3;
use crate::pool::NodeId;
use crate::scene::{GraphicItem, PresentationNode, TypeTag};
use crate::style::SelectorChain;

use super::{RenderError, Renderer};

/// Signature of a rule's render function.
///
/// Arguments: the presentation node, its projection, the selector chain, the
/// output produced by previously matched rules for the same node, and the
/// engine for pool access and child recursion. Returning `None` leaves the
/// running output unchanged; returning a node makes it the new running
/// output.
pub type RenderFn = Box<
    dyn Fn(
        &PresentationNode,
        &Matrix3,
        &mut SelectorChain,
        Option<NodeId>,
        &mut Renderer,
    ) -> Result<Option<NodeId>, RenderError>,
>;

/// A pairing of a source type tag and a render function.
///
/// Immutable once registered. Every rule whose tag appears in an item's type
/// chain runs for that item, so a rule registered for a base tag also sees
/// the refining types.
pub struct RenderRule {
    tag: TypeTag,
    render: RenderFn,
}

impl RenderRule {
    pub fn new(
        tag: TypeTag,
        render: impl Fn(
                &PresentationNode,
                &Matrix3,
                &mut SelectorChain,
                Option<NodeId>,
                &mut Renderer,
            ) -> Result<Option<NodeId>, RenderError>
            + 'static,
    ) -> Self {
        Self {
            tag,
            render: Box::new(render),
        }
    }

    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Whether this rule applies to the given item.
    pub fn matches(&self, item: &dyn GraphicItem) -> bool {
        item.type_chain().contains(&self.tag)
    }

    /// Invoke the render function. Exposed so tests can exercise single
    /// rules outside a full pass.
    pub fn render(
        &self,
        node: &PresentationNode,
        projection: &Matrix3,
        chain: &mut SelectorChain,
        prior: Option<NodeId>,
        renderer: &mut Renderer,
    ) -> Result<Option<NodeId>, RenderError> {
        (self.render)(node, projection, chain, prior, renderer)
    }
}

impl std::fmt::Debug for RenderRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderRule").field("tag", &self.tag).finish()
    }
}

/// An ordered sequence of render rules.
///
/// Registration order is application order and is semantically significant:
/// a rule for a base tag must be registered before the rules refining its
/// subtypes, so the refining rules receive the node the base rule produced.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<RenderRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rule: RenderRule) {
        self.rules.push(rule);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
