//! Node storage for the list.
//!
//! Nodes live in a slab of slots addressed by [`NodeId`] handles rather
//! than in a chain of owning pointers. Handles are plain indices, so the
//! list can hold a non-owning tail handle and relink nodes freely without
//! any aliasing concerns. Freed slots are recycled through a free list.

/// A handle to a node slot in a [`NodeStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// Shifts this handle by `by` slots, for relocating a chain into
    /// another store whose slots start at that offset.
    pub(crate) fn offset(self, by: usize) -> NodeId {
        NodeId(self.0 + by)
    }
}

/// One element record: a value and a forward link.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodeId>,
}

/// Slab of node slots with a free list.
///
/// Occupied slots hold `Some(Node)`; a freed slot is set to `None` and its
/// id is pushed on the free list for reuse by the next allocation.
#[derive(Debug)]
pub(crate) struct NodeStore<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> NodeStore<T> {
    pub(crate) fn new() -> Self {
        NodeStore {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Places a new node, reusing a freed slot when one is available.
    pub(crate) fn alloc(&mut self, value: T, next: Option<NodeId>) -> NodeId {
        let node = Node { value, next };
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                let id = NodeId(self.slots.len());
                self.slots.push(Some(node));
                id
            }
        }
    }

    /// Takes the node out of its slot and recycles the id.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.0].take().expect("live NodeId points at an occupied slot");
        self.free.push(id);
        node
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.slots[id.0].as_ref().expect("live NodeId points at an occupied slot")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id.0].as_mut().expect("live NodeId points at an occupied slot")
    }

    /// Merges another store's slots into this one and returns the offset
    /// its handles must be shifted by. Runs in one pass over `other`'s
    /// slots; no value is cloned.
    pub(crate) fn absorb(&mut self, other: NodeStore<T>) -> usize {
        let offset = self.slots.len();
        self.slots.reserve(other.slots.len());
        for slot in other.slots {
            self.slots.push(slot.map(|mut node| {
                node.next = node.next.map(|id| id.offset(offset));
                node
            }));
        }
        self.free
            .extend(other.free.into_iter().map(|id| id.offset(offset)));
        offset
    }

    /// Drops every node and forgets the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Total slots, occupied or free. Exposed so tests can observe slot
    /// reuse.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_read() {
        let mut store: NodeStore<i32> = NodeStore::new();
        let a = store.alloc(10, None);
        let b = store.alloc(20, Some(a));

        assert_eq!(store.node(a).value, 10);
        assert_eq!(store.node(a).next, None);
        assert_eq!(store.node(b).next, Some(a));
    }

    #[test]
    fn test_free_slot_is_reused() {
        let mut store: NodeStore<&str> = NodeStore::new();
        let a = store.alloc("a", None);
        let _b = store.alloc("b", None);

        let node = store.free(a);
        assert_eq!(node.value, "a");

        let c = store.alloc("c", None);
        assert_eq!(c, a);
        assert_eq!(store.slot_count(), 2);
    }

    #[test]
    fn test_absorb_offsets_links() {
        let mut left: NodeStore<i32> = NodeStore::new();
        left.alloc(1, None);

        let mut right: NodeStore<i32> = NodeStore::new();
        let r1 = right.alloc(2, None);
        let r2 = right.alloc(3, Some(r1));

        let offset = left.absorb(right);
        assert_eq!(offset, 1);
        assert_eq!(left.node(r2.offset(offset)).next, Some(r1.offset(offset)));
        assert_eq!(left.node(r1.offset(offset)).value, 2);
    }

    #[test]
    fn test_absorb_carries_free_list() {
        let mut left: NodeStore<i32> = NodeStore::new();
        let mut right: NodeStore<i32> = NodeStore::new();
        let r = right.alloc(9, None);
        right.free(r);

        left.absorb(right);
        // The freed slot came along and is the first one reused.
        let id = left.alloc(7, None);
        assert_eq!(id, r.offset(0));
        assert_eq!(left.slot_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut store: NodeStore<i32> = NodeStore::new();
        store.alloc(1, None);
        store.alloc(2, None);
        store.clear();
        assert_eq!(store.slot_count(), 0);
    }
}
