use std::rc::Rc;

use crate::pool::{NodeId, NodePool};
use crate::scene::{GraphicItem, PresentationNode, View};
use crate::style::{SelectorChain, StyleSheet};

use super::{RenderError, RenderOptions, RuleSet};

/// The rendering engine.
///
/// Owns the rule set, the stylesheet and the node pool; turns a presentation
/// tree into a pooled SVG node tree. A pass is synchronous and runs to
/// completion; re-entrant calls happen only through composite rules invoking
/// [`Renderer::render_node`] for their children.
pub struct Renderer {
    rules: Rc<RuleSet>,
    style_sheet: StyleSheet,
    options: RenderOptions,
    pool: NodePool,
}

impl Renderer {
    /// Build an engine from a fixed, ordered rule set.
    pub fn new(rules: RuleSet, style_sheet: StyleSheet, options: RenderOptions) -> Self {
        Self {
            rules: Rc::new(rules),
            style_sheet,
            options,
            pool: NodePool::new(),
        }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn style_sheet(&self) -> &StyleSheet {
        &self.style_sheet
    }

    pub fn pool(&self) -> &NodePool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut NodePool {
        &mut self.pool
    }

    /// Render a view into the target node.
    ///
    /// Clears the target's previous output subtree back into the pool,
    /// projects the view, renders it on a fresh selector chain and attaches
    /// the result.
    pub fn render(&mut self, view: &Rc<View>, target: NodeId) -> Result<(), RenderError> {
        self.render_presentation(&View::presentation(view), target)
    }

    /// Render an already-projected presentation root into the target node.
    pub fn render_presentation(
        &mut self,
        root: &PresentationNode,
        target: NodeId,
    ) -> Result<(), RenderError> {
        let released = self.clear_children(target);
        log::debug!("render pass: released {released} nodes back to the pool");

        let mut chain = SelectorChain::new();
        let result = self.render_node(root, &mut chain)?;
        self.attach(target, result);

        log::debug!("render pass: {} nodes live", self.pool.live_count());
        Ok(())
    }

    /// Render one presentation node, recursively.
    ///
    /// Every matching rule runs in registration order; each sees the output
    /// of the previous matching rule and may refine or replace it. A node
    /// without a source item, or whose item matches no rule, renders to
    /// nothing; that is expected, not an error.
    pub fn render_node(
        &mut self,
        node: &PresentationNode,
        chain: &mut SelectorChain,
    ) -> Result<Option<NodeId>, RenderError> {
        let Some(source) = node.source() else {
            return Ok(None);
        };
        let source = Rc::clone(source);

        let native = self.options.contains(RenderOptions::NATIVE_TRANSFORMS);
        let projection = node.projection(native);

        let mut output = None;
        let rules = Rc::clone(&self.rules);
        for rule in rules.iter() {
            if rule.matches(source.as_ref()) {
                if let Some(next) = rule.render(node, &projection, chain, output, self)? {
                    output = Some(next);
                }
            }
        }

        if let Some(id) = output {
            self.apply_style(id, chain, source.as_ref());
            if let Some(identity) = source.id() {
                let identity = identity.to_string();
                self.pool.node_mut(id).set_attribute("id", identity);
            }
            if native {
                let local = node.local_transform();
                if !local.is_identity() {
                    self.pool
                        .node_mut(id)
                        .set_attribute("transform", local.to_svg_transform());
                }
            }
        } else if let Some(tag) = source.type_chain().first() {
            log::trace!("no rule produced output for {tag}");
        }

        Ok(output)
    }

    /// Append a produced child to a parent, flattening redundant wrappers.
    ///
    /// With flattening enabled, a pristine group that has children is not
    /// attached itself: its children move to `parent` directly, in order,
    /// and the wrapper goes back to the pool.
    pub fn attach(&mut self, parent: NodeId, child: Option<NodeId>) {
        let Some(child) = child else {
            return;
        };

        if self.options.contains(RenderOptions::FLATTEN_GROUPS) {
            let node = self.pool.node(child);
            if node.kind() == "g" && node.is_pristine() && !node.children().is_empty() {
                log::trace!("flattening pristine group wrapper");
                for grandchild in self.pool.take_children(child) {
                    self.pool.append_child(parent, grandchild);
                }
                self.pool.release(child);
                return;
            }
        }

        self.pool.append_child(parent, child);
    }

    /// Detach all children of `target` and release their subtrees back to
    /// the pool, children before parents. Returns the number released.
    fn clear_children(&mut self, target: NodeId) -> usize {
        let mut released = 0;
        for child in self.pool.take_children(target) {
            released += self.release_subtree(child);
        }
        released
    }

    fn release_subtree(&mut self, id: NodeId) -> usize {
        let mut released = 1;
        for child in self.pool.take_children(id) {
            released += self.release_subtree(child);
        }
        self.pool.release(id);
        released
    }

    /// Apply the resolved style for the current chain to a node, or just the
    /// item's class in class mode.
    fn apply_style(&mut self, id: NodeId, chain: &SelectorChain, source: &dyn GraphicItem) {
        if self.options.contains(RenderOptions::STYLE_CLASSES) {
            let class = source.selector().name().to_string();
            self.pool.node_mut(id).set_attribute("class", class);
            return;
        }

        let resolved = self.style_sheet.resolve(chain, source.inline_style());
        let pairs = resolved.attribute_pairs();
        if pairs.is_empty() {
            return;
        }
        let node = self.pool.node_mut(id);
        for (name, value) in pairs {
            node.set_attribute(name, value);
        }
    }
}
