use crate::interaction::Handle;

use super::pool::NodeId;
use super::XLINK_NAMESPACE;

/// One SVG output node: an element kind, attributes, optional text content
/// and an ordered child list.
///
/// Nodes live inside a [`super::NodePool`]; child links are [`NodeId`]s and
/// are only modified through the pool so that parent bookkeeping stays
/// consistent.
#[derive(Debug, Default)]
pub struct SvgNode {
    kind: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    pub(super) children: Vec<NodeId>,
    pub(super) parent: Option<NodeId>,
    handles: Vec<Handle>,
    pristine: bool,
}

impl SvgNode {
    pub(super) fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            pristine: true,
            ..Self::default()
        }
    }

    /// Reset to the just-acquired state, keeping allocations.
    pub(super) fn reset(&mut self) {
        self.attributes.clear();
        self.text = None;
        self.children.clear();
        self.parent = None;
        self.handles.clear();
        self.pristine = true;
    }

    /// The element kind, e.g. `g`, `line` or `rect`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Set an attribute, replacing an existing value for the same name.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.pristine = false;
        let value = value.into();
        if let Some(entry) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.attributes.push((name.to_string(), value));
        }
    }

    /// Set a namespaced attribute. Known namespaces map to their prefix;
    /// `xlink:href` is the one the stock rules use.
    pub fn set_attribute_ns(&mut self, namespace: &str, name: &str, value: impl Into<String>) {
        let qualified = match namespace {
            XLINK_NAMESPACE => format!("xlink:{}", name),
            _ => name.to_string(),
        };
        self.set_attribute(&qualified, value);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.pristine = false;
        self.text = Some(text.into());
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Child node ids in attachment order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Register a gesture handle. Several rules may each add one.
    pub fn add_handle(&mut self, handle: Handle) {
        self.pristine = false;
        self.handles.push(handle);
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// True until the first attribute, text or handle mutation after
    /// acquisition. Child attachment keeps a node pristine.
    pub fn is_pristine(&self) -> bool {
        self.pristine
    }
}
