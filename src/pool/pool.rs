use std::collections::HashMap;

use super::node::SvgNode;

/// Unique identifier for a pooled node.
///
/// Uses a generational index design:
/// - `index`: position in the slot array (reusable after release)
/// - `generation`: version counter that increments when a slot is released
///
/// This prevents stale handles from accidentally referring to a node that
/// was acquired in the same slot later.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// One arena slot: the current generation plus the node, which stays in
/// place while pooled so its allocations are reused.
struct Slot {
    generation: u32,
    node: SvgNode,
    live: bool,
}

/// Arena of SVG output nodes with per-kind free lists.
///
/// Only the renderer acquires and releases nodes; handles stay valid for
/// exactly the span between the two. Misuse (releasing twice, using a stale
/// id, releasing an attached or non-empty node) is a programming error and
/// panics.
#[derive(Default)]
pub struct NodePool {
    slots: Vec<Slot>,
    /// Released slot indices, keyed by element kind.
    free: HashMap<String, Vec<u32>>,
    live_count: usize,
}

impl NodePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a node of the given element kind, reusing a released one when
    /// available. The node starts pristine, detached and empty.
    pub fn acquire(&mut self, kind: &str) -> NodeId {
        self.live_count += 1;

        if let Some(index) = self.free.get_mut(kind).and_then(Vec::pop) {
            let slot = &mut self.slots[index as usize];
            slot.node.reset();
            slot.live = true;
            return NodeId::new(index, slot.generation);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: SvgNode::new(kind),
            live: true,
        });
        NodeId::new(index, 0)
    }

    /// Release a node back to the pool.
    ///
    /// The node must be detached and childless; release children first and
    /// detach via [`NodePool::take_children`] on the parent.
    pub fn release(&mut self, id: NodeId) {
        let slot = self.slot_mut(id);
        assert!(
            slot.node.parent.is_none(),
            "cannot release a node that is still attached to a parent"
        );
        assert!(
            slot.node.children.is_empty(),
            "cannot release a node that still has children"
        );

        slot.live = false;
        slot.generation = slot.generation.wrapping_add(1);
        let kind = slot.node.kind().to_string();
        self.free.entry(kind).or_default().push(id.index);
        self.live_count -= 1;
    }

    /// Append `child` to `parent`'s child list. Panics if the child is
    /// already attached somewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        assert_ne!(parent, child, "cannot attach a node to itself");
        {
            let child_slot = self.slot_mut(child);
            assert!(
                child_slot.node.parent.is_none(),
                "node is already attached to a parent"
            );
            child_slot.node.parent = Some(parent);
        }
        self.slot_mut(parent).node.children.push(child);
    }

    /// Detach and return all children of a node, in order.
    pub fn take_children(&mut self, id: NodeId) -> Vec<NodeId> {
        let children = std::mem::take(&mut self.slot_mut(id).node.children);
        for &child in &children {
            self.slot_mut(child).node.parent = None;
        }
        children
    }

    /// Shared access to a live node. Panics on stale ids.
    pub fn node(&self, id: NodeId) -> &SvgNode {
        &self.slot(id).node
    }

    /// Mutable access to a live node. Panics on stale ids.
    pub fn node_mut(&mut self, id: NodeId) -> &mut SvgNode {
        &mut self.slot_mut(id).node
    }

    /// Whether the id refers to a currently live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots
            .get(id.index as usize)
            .map(|slot| slot.live && slot.generation == id.generation)
            .unwrap_or(false)
    }

    /// Number of currently acquired nodes.
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Number of released nodes parked for reuse.
    pub fn pooled_count(&self) -> usize {
        self.free.values().map(Vec::len).sum()
    }

    /// Number of released nodes of one kind parked for reuse.
    pub fn pooled_count_of(&self, kind: &str) -> usize {
        self.free.get(kind).map(Vec::len).unwrap_or(0)
    }

    fn slot(&self, id: NodeId) -> &Slot {
        let slot = self
            .slots
            .get(id.index as usize)
            .expect("node id out of bounds");
        assert!(
            slot.live && slot.generation == id.generation,
            "stale node id: the node was released"
        );
        slot
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut Slot {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .expect("node id out of bounds");
        assert!(
            slot.live && slot.generation == id.generation,
            "stale node id: the node was released"
        );
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_release_reuse() {
        let mut pool = NodePool::new();
        let id1 = pool.acquire("g");
        assert_eq!(pool.live_count(), 1);

        pool.release(id1);
        assert_eq!(pool.live_count(), 0);
        assert_eq!(pool.pooled_count_of("g"), 1);

        // Reacquiring the same kind reuses the slot with a new generation.
        let id2 = pool.acquire("g");
        assert_eq!(pool.pooled_count_of("g"), 0);
        assert!(!pool.contains(id1));
        assert!(pool.contains(id2));
    }

    #[test]
    fn test_free_lists_are_per_kind() {
        let mut pool = NodePool::new();
        let g = pool.acquire("g");
        pool.release(g);

        // A different kind must not reuse the pooled `g` slot.
        let line = pool.acquire("line");
        assert_eq!(pool.node(line).kind(), "line");
        assert_eq!(pool.pooled_count_of("g"), 1);
    }

    #[test]
    fn test_reacquired_node_is_reset() {
        let mut pool = NodePool::new();
        let id = pool.acquire("rect");
        pool.node_mut(id).set_attribute("x", "5");
        pool.release(id);

        let id = pool.acquire("rect");
        assert!(pool.node(id).is_pristine());
        assert_eq!(pool.node(id).attribute("x"), None);
    }

    #[test]
    fn test_append_and_take_children() {
        let mut pool = NodePool::new();
        let parent = pool.acquire("g");
        let a = pool.acquire("line");
        let b = pool.acquire("rect");

        pool.append_child(parent, a);
        pool.append_child(parent, b);
        assert_eq!(pool.node(parent).children(), &[a, b]);
        assert_eq!(pool.node(a).parent(), Some(parent));

        let children = pool.take_children(parent);
        assert_eq!(children, vec![a, b]);
        assert_eq!(pool.node(a).parent(), None);
        assert!(pool.node(parent).children().is_empty());
    }

    #[test]
    #[should_panic(expected = "stale node id")]
    fn test_double_release_panics() {
        let mut pool = NodePool::new();
        let id = pool.acquire("g");
        pool.release(id);
        pool.release(id);
    }

    #[test]
    #[should_panic(expected = "still attached")]
    fn test_release_attached_node_panics() {
        let mut pool = NodePool::new();
        let parent = pool.acquire("g");
        let child = pool.acquire("line");
        pool.append_child(parent, child);
        pool.release(child);
    }

    #[test]
    #[should_panic(expected = "already attached")]
    fn test_double_attach_panics() {
        let mut pool = NodePool::new();
        let a = pool.acquire("g");
        let b = pool.acquire("g");
        let child = pool.acquire("line");
        pool.append_child(a, child);
        pool.append_child(b, child);
    }

    #[test]
    #[should_panic(expected = "stale node id")]
    fn test_stale_access_panics() {
        let mut pool = NodePool::new();
        let id = pool.acquire("g");
        pool.release(id);
        let _ = pool.node(id);
    }
}
