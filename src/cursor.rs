//! Iterators and the mutating cursor.
//!
//! [`Iter`] and [`IntoIter`] are ordinary forward iterators. [`CursorMut`]
//! is the traversal that can also unlink elements: it borrows the list
//! mutably for its whole lifetime, so the borrow checker rules out any
//! other structural modification while it is walking.

use std::iter::FusedIterator;

use crate::error::Error;
use crate::list::SinglyLinkedList;
use crate::store::{NodeId, NodeStore};

/// Borrowed forward iterator over a [`SinglyLinkedList`].
///
/// Created by [`SinglyLinkedList::iter`]. Finite and non-restartable; call
/// `iter()` again to retraverse.
pub struct Iter<'a, T> {
    store: &'a NodeStore<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(store: &'a NodeStore<T>, head: Option<NodeId>, len: usize) -> Self {
        Iter {
            store,
            next: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.next?;
        let node = self.store.node(id);
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// Manual impl so cloning an iterator never requires T: Clone.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            store: self.store,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over a [`SinglyLinkedList`], yielding elements by value
/// in head-to-tail order.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: SinglyLinkedList<T>) -> Self {
        IntoIter { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A forward traversal that can remove the element it most recently
/// yielded.
///
/// Created by [`SinglyLinkedList::cursor_mut`]. The cursor tracks how many
/// elements it has passed; [`remove`](Self::remove) unlinks the last
/// yielded element and keeps both the list's length and the cursor's
/// position consistent, so the traversal continues correctly over the
/// shrunken list.
///
/// Each yield arms exactly one removal: calling `remove` before the first
/// `next`, or twice in a row, fails with [`Error::CursorNotAdvanced`]
/// instead of touching an element that was not the most recent yield.
///
/// # Example
///
/// ```
/// use datakit::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::from([1, 2, 3, 4]);
/// let mut cursor = list.cursor_mut();
///
/// cursor.next();                     // yields 1
/// cursor.next();                     // yields 2
/// assert_eq!(cursor.remove(), Ok(2));
/// assert_eq!(cursor.next(), Some(&3));
/// assert_eq!(cursor.next(), Some(&4));
/// assert_eq!(cursor.next(), None);
///
/// assert_eq!(list.to_string(), "[1, 3, 4]");
/// ```
pub struct CursorMut<'a, T> {
    list: &'a mut SinglyLinkedList<T>,
    /// The node of the most recent yield; `None` before the first yield
    /// and after a head removal.
    curr: Option<NodeId>,
    /// Elements yielded so far, adjusted down on removal.
    passed: usize,
    /// Whether the element at `curr` may still be removed.
    armed: bool,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut SinglyLinkedList<T>) -> Self {
        CursorMut {
            list,
            curr: None,
            passed: 0,
            armed: false,
        }
    }

    /// Returns true if another element remains to be yielded.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.passed < self.list.len()
    }

    /// Advances to the next element and yields it, or returns `None` at
    /// exhaustion.
    #[allow(clippy::should_implement_trait)] // lends a borrow of self, so it cannot be Iterator::next
    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }

        let id = match self.curr {
            None => self.list.head.expect("has_next implies the list is non-empty"),
            Some(curr) => self
                .list
                .store
                .node(curr)
                .next
                .expect("has_next implies a successor"),
        };
        self.curr = Some(id);
        self.passed += 1;
        self.armed = true;
        Some(&self.list.store.node(id).value)
    }

    /// Removes and returns the most recently yielded element.
    ///
    /// Removing the head just relinks it; anywhere else the predecessor is
    /// re-located by walking from the head (nodes carry no backward link),
    /// and if the removed node was the tail the list's tail handle moves to
    /// the predecessor. O(position).
    ///
    /// # Errors
    ///
    /// [`Error::CursorNotAdvanced`] if no element has been yielded since
    /// the last removal (including before the first `next`).
    pub fn remove(&mut self) -> Result<T, Error> {
        if !self.armed {
            return Err(Error::CursorNotAdvanced);
        }
        let id = self.curr.expect("an armed cursor points at a node");
        let next = self.list.store.node(id).next;

        if self.list.head == Some(id) {
            self.list.head = next;
            if next.is_none() {
                self.list.tail = None;
            }
            self.curr = None;
            self.passed = 0;
        } else {
            let mut prev = self
                .list
                .head
                .expect("a non-head node implies a non-empty list");
            while self.list.store.node(prev).next != Some(id) {
                prev = self
                    .list
                    .store
                    .node(prev)
                    .next
                    .expect("the current node is reachable from the head");
            }
            self.list.store.node_mut(prev).next = next;
            if self.list.tail == Some(id) {
                self.list.tail = Some(prev);
            }
            self.curr = Some(prev);
            self.passed -= 1;
        }

        self.armed = false;
        self.list.len -= 1;
        Ok(self.list.store.free(id).value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_walks_head_to_tail() {
        let list = SinglyLinkedList::from([1, 2, 3]);
        let values: Vec<&i32> = list.iter().collect();
        assert_eq!(values, vec![&1, &2, &3]);
    }

    #[test]
    fn test_iter_is_exact_and_fused() {
        let list = SinglyLinkedList::from([1, 2]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
        iter.next();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_clone_is_independent() {
        let list = SinglyLinkedList::from([1, 2, 3]);
        let mut iter = list.iter();
        iter.next();
        let fork = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), vec![&2, &3]);
        assert_eq!(fork.collect::<Vec<_>>(), vec![&2, &3]);
    }

    #[test]
    fn test_into_iter_yields_owned_values() {
        let list = SinglyLinkedList::from([String::from("a"), String::from("b")]);
        let values: Vec<String> = list.into_iter().collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let list = SinglyLinkedList::from([1, 2, 3]);
        let mut sum = 0;
        for value in &list {
            sum += value;
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_cursor_remove_interior_then_continue() {
        let mut list = SinglyLinkedList::from([1, 2, 3, 4]);
        let mut cursor = list.cursor_mut();

        assert_eq!(cursor.next(), Some(&1));
        assert_eq!(cursor.next(), Some(&2));
        assert_eq!(cursor.remove(), Ok(2));
        assert_eq!(cursor.next(), Some(&3));
        assert_eq!(cursor.next(), Some(&4));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);

        assert_eq!(list.to_string(), "[1, 3, 4]");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_cursor_remove_head() {
        let mut list = SinglyLinkedList::from([1, 2, 3]);
        let mut cursor = list.cursor_mut();

        cursor.next();
        assert_eq!(cursor.remove(), Ok(1));
        assert_eq!(cursor.next(), Some(&2));
        assert_eq!(cursor.next(), Some(&3));
        assert_eq!(cursor.next(), None);

        assert_eq!(list.to_string(), "[2, 3]");
    }

    #[test]
    fn test_cursor_remove_tail_updates_tail_handle() {
        let mut list = SinglyLinkedList::from([1, 2, 3]);
        let mut cursor = list.cursor_mut();

        while cursor.next().is_some() {}
        assert_eq!(cursor.remove(), Ok(3));

        assert_eq!(list.back(), Some(&2));
        list.push_back(9);
        assert_eq!(list.to_string(), "[1, 2, 9]");
    }

    #[test]
    fn test_cursor_remove_every_element() {
        let mut list = SinglyLinkedList::from([1, 2, 3, 4]);
        let mut cursor = list.cursor_mut();
        while cursor.next().is_some() {
            cursor.remove().unwrap();
        }
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_cursor_remove_only_element() {
        let mut list = SinglyLinkedList::from([7]);
        let mut cursor = list.cursor_mut();
        cursor.next();
        assert_eq!(cursor.remove(), Ok(7));
        assert_eq!(cursor.next(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_cursor_remove_before_next_fails() {
        let mut list = SinglyLinkedList::from([1, 2]);
        let mut cursor = list.cursor_mut();
        assert_eq!(cursor.remove(), Err(Error::CursorNotAdvanced));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_cursor_double_remove_fails() {
        let mut list = SinglyLinkedList::from([1, 2, 3]);
        let mut cursor = list.cursor_mut();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.remove(), Ok(2));
        assert_eq!(cursor.remove(), Err(Error::CursorNotAdvanced));
        assert_eq!(list.to_string(), "[1, 3]");
    }

    #[test]
    fn test_cursor_remove_after_exhaustion() {
        // The final element stays removable once yielded, even though
        // next() has already returned None.
        let mut list = SinglyLinkedList::from([1, 2]);
        let mut cursor = list.cursor_mut();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.remove(), Ok(2));
        assert_eq!(list.to_string(), "[1]");
    }

    #[test]
    fn test_cursor_filter_evens() {
        let mut list: SinglyLinkedList<i32> = (1..=10).collect();
        let mut cursor = list.cursor_mut();
        while let Some(&value) = cursor.next() {
            if value % 2 == 0 {
                cursor.remove().unwrap();
            }
        }
        assert_eq!(list.to_string(), "[1, 3, 5, 7, 9]");
        assert_eq!(list.len(), 5);
        assert_eq!(list.back(), Some(&9));
    }
}
