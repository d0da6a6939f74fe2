//! The singly linked list container.
//!
//! [`SinglyLinkedList`] keeps its nodes in a slab store and tracks the
//! chain with head and tail handles plus a cached length, giving O(1)
//! pushes at both ends. There are no backward links: indexed access walks
//! forward from the head, and removing at the tail re-derives the new tail
//! the same way.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cursor::{CursorMut, IntoIter, Iter};
use crate::error::Error;
use crate::store::{NodeId, NodeStore};

/// A generic singly linked list.
///
/// Supports insertion and removal at arbitrary indices, O(1) operations at
/// both ends, splicing whole lists in by move, and a cursor that can remove
/// elements mid-traversal.
///
/// ## Cost model
///
/// Anything that must reach an interior node walks forward from the head:
/// `get`/`set`/`insert`/`remove` at index `i` are O(i), and operations that
/// re-derive the tail (`pop_back`, `drop_back`) are O(len). Head and tail
/// pushes, `front`/`back`, `len`, and `is_empty` are O(1).
///
/// ## Example
///
/// ```
/// use datakit::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::from([1, 2, 3]);
/// list.push_front(0);
/// list.push_back(4);
///
/// assert_eq!(list.len(), 5);
/// assert_eq!(list.to_string(), "[0, 1, 2, 3, 4]");
/// ```
pub struct SinglyLinkedList<T> {
    pub(crate) store: NodeStore<T>,
    pub(crate) head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
    pub(crate) len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        SinglyLinkedList {
            store: NodeStore::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Walks forward from the head. Callers guarantee `index < len`.
    fn node_at(&self, index: usize) -> NodeId {
        let mut id = self.head.expect("index is within a non-empty list");
        for _ in 0..index {
            id = self.store.node(id).next.expect("index is within the list");
        }
        id
    }

    // ==========================================================
    // Insertion
    // ==========================================================

    /// Inserts a value at the front of the list. O(1).
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([2, 3]);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let id = self.store.alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Appends a value at the back of the list. O(1).
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.push_back("a");
    /// list.push_back("b");
    /// assert_eq!(list.back(), Some(&"b"));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let id = self.store.alloc(value, None);
        match self.tail {
            Some(tail) => self.store.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Inserts a value so that it ends up at `index`, shifting later
    /// elements toward the tail. `index == len` appends. O(index).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index > len`; the list is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 3]);
    /// list.insert(1, 2)?;
    /// assert_eq!(list.to_string(), "[1, 2, 3]");
    /// # Ok::<(), datakit::Error>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfRange { index, len: self.len });
        }

        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            let prev = self.node_at(index - 1);
            let next = self.store.node(prev).next;
            let id = self.store.alloc(value, next);
            self.store.node_mut(prev).next = Some(id);
            self.len += 1;
        }

        Ok(())
    }

    // ==========================================================
    // Splicing
    // ==========================================================

    // Moves `other`'s nodes into this store and returns its chain as
    // (head, tail, len) with relocated handles, or None if it was empty.
    fn absorb(&mut self, other: Self) -> Option<(NodeId, NodeId, usize)> {
        let SinglyLinkedList { store, head, tail, len } = other;
        let head = head?;
        let tail = tail.expect("a non-empty list has a tail");
        let offset = self.store.absorb(store);
        Some((head.offset(offset), tail.offset(offset), len))
    }

    /// Moves all of `other`'s elements to the front of this list,
    /// preserving their order. The relink itself is constant pointer
    /// surgery; relocating `other`'s node slots costs O(len of other).
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([3, 4]);
    /// list.prepend(SinglyLinkedList::from([1, 2]));
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4]");
    /// ```
    pub fn prepend(&mut self, other: Self) {
        if let Some((head, tail, len)) = self.absorb(other) {
            self.store.node_mut(tail).next = self.head;
            self.head = Some(head);
            if self.tail.is_none() {
                self.tail = Some(tail);
            }
            self.len += len;
        }
    }

    /// Moves all of `other`'s elements to the back of this list,
    /// preserving their order.
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2]);
    /// list.append(SinglyLinkedList::from([3, 4]));
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4]");
    /// ```
    pub fn append(&mut self, other: Self) {
        if let Some((head, tail, len)) = self.absorb(other) {
            match self.tail {
                Some(old) => self.store.node_mut(old).next = Some(head),
                None => self.head = Some(head),
            }
            self.tail = Some(tail);
            self.len += len;
        }
    }

    /// Moves all of `other`'s elements into this list so that they start
    /// at `index`. `index == 0` prepends and `index == len` appends.
    /// Splicing an empty list is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index > len`. `self` is unchanged;
    /// `other` was moved into the call and is dropped along with its
    /// elements.
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 4]);
    /// list.splice(1, SinglyLinkedList::from([2, 3]))?;
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4]");
    /// # Ok::<(), datakit::Error>(())
    /// ```
    pub fn splice(&mut self, index: usize, other: Self) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfRange { index, len: self.len });
        }

        if index == 0 {
            self.prepend(other);
        } else if index == self.len {
            self.append(other);
        } else if let Some((head, tail, len)) = self.absorb(other) {
            let prev = self.node_at(index - 1);
            self.store.node_mut(tail).next = self.store.node(prev).next;
            self.store.node_mut(prev).next = Some(head);
            self.len += len;
        }

        Ok(())
    }

    // ==========================================================
    // Removal
    // ==========================================================

    /// Removes and returns the first element. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyList`] when the list is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2]);
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert!(list.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T, Error> {
        let head = self.head.ok_or(Error::EmptyList)?;
        let node = self.store.free(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes and returns the last element.
    ///
    /// The new tail has to be re-derived by walking from the head, since
    /// nodes carry no backward link. O(len).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyList`] when the list is empty.
    pub fn pop_back(&mut self) -> Result<T, Error> {
        let tail = self.tail.ok_or(Error::EmptyList)?;

        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let prev = self.node_at(self.len - 2);
            self.store.node_mut(prev).next = None;
            self.tail = Some(prev);
        }

        self.len -= 1;
        Ok(self.store.free(tail).value)
    }

    /// Drops the first `n` elements. `n == len` clears the list. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `n > len`; the list is unchanged.
    pub fn drop_front(&mut self, n: usize) -> Result<(), Error> {
        if n > self.len {
            return Err(Error::OutOfRange { index: n, len: self.len });
        }

        for _ in 0..n {
            let head = self.head.expect("n is at most the list length");
            self.head = self.store.free(head).next;
        }
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= n;
        Ok(())
    }

    /// Drops the last `n` elements, walking from the head to find the new
    /// tail. `n == len` clears the list. O(len).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `n > len`; the list is unchanged.
    pub fn drop_back(&mut self, n: usize) -> Result<(), Error> {
        if n > self.len {
            return Err(Error::OutOfRange { index: n, len: self.len });
        }

        if n == 0 {
            return Ok(());
        }
        if n == self.len {
            self.clear();
            return Ok(());
        }

        let new_tail = self.node_at(self.len - n - 1);
        let mut cursor = self.store.node(new_tail).next;
        self.store.node_mut(new_tail).next = None;
        while let Some(id) = cursor {
            cursor = self.store.free(id).next;
        }
        self.tail = Some(new_tail);
        self.len -= n;
        Ok(())
    }

    /// Removes and returns the element at `index`. Delegates to
    /// [`pop_front`](Self::pop_front) / [`pop_back`](Self::pop_back) at the
    /// boundaries. O(index).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`; the list is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2, 3]);
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.to_string(), "[1, 3]");
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange { index, len: self.len });
        }

        if index == 0 {
            return self.pop_front();
        }
        if index == self.len - 1 {
            return self.pop_back();
        }

        let prev = self.node_at(index - 1);
        let id = self.store.node(prev).next.expect("interior node has a successor");
        let node = self.store.free(id);
        self.store.node_mut(prev).next = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes the elements in the half-open range `[start, end)` by
    /// relinking the predecessor of `start` to the node at `end`. O(end).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `start >= len`, `end < start`, or
    /// `end > len`; the list is unchanged. Any call on an empty list
    /// errors, including `remove_range(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([0, 1, 2, 3, 4]);
    /// list.remove_range(1, 3)?;
    /// assert_eq!(list.to_string(), "[0, 3, 4]");
    /// # Ok::<(), datakit::Error>(())
    /// ```
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<(), Error> {
        if start >= self.len {
            return Err(Error::OutOfRange { index: start, len: self.len });
        }
        if end < start || end > self.len {
            return Err(Error::OutOfRange { index: end, len: self.len });
        }

        if start == 0 {
            return self.drop_front(end);
        }
        if end == self.len {
            return self.drop_back(self.len - start);
        }

        let prev = self.node_at(start - 1);
        let mut cursor = self.store.node(prev).next;
        for _ in start..end {
            let id = cursor.expect("range end is within the list");
            cursor = self.store.free(id).next;
        }
        self.store.node_mut(prev).next = cursor;
        self.len -= end - start;
        Ok(())
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.store.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ==========================================================
    // Access
    // ==========================================================

    /// Returns the first element, or `None` if the list is empty. O(1).
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.store.node(id).value)
    }

    /// Returns a mutable handle on the first element. O(1).
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|id| &mut self.store.node_mut(id).value)
    }

    /// Returns the last element, or `None` if the list is empty. O(1).
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.store.node(id).value)
    }

    /// Returns a mutable handle on the last element. O(1).
    #[must_use]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(|id| &mut self.store.node_mut(id).value)
    }

    /// Returns the element at `index`. O(1) at either end, O(index) in
    /// between — there is no random access into a chain.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from(['a', 'b', 'c']);
    /// assert_eq!(list.get(1), Ok(&'b'));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange { index, len: self.len });
        }
        if index == self.len - 1 {
            let tail = self.tail.expect("a non-empty list has a tail");
            return Ok(&self.store.node(tail).value);
        }
        Ok(&self.store.node(self.node_at(index)).value)
    }

    /// Returns a mutable handle on the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange { index, len: self.len });
        }
        let id = if index == self.len - 1 {
            self.tail.expect("a non-empty list has a tail")
        } else {
            self.node_at(index)
        };
        Ok(&mut self.store.node_mut(id).value)
    }

    /// Replaces the element at `index`, dropping the old value.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index >= len`; the list is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), Error> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    // ==========================================================
    // Iteration
    // ==========================================================

    /// Returns a forward iterator over the elements.
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from([1, 2, 3]);
    /// let doubled: Vec<i32> = list.iter().map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.store, self.head, self.len)
    }

    /// Returns a cursor that walks the list and can remove the element it
    /// most recently yielded. The cursor borrows the list mutably, so no
    /// other modification can happen while it lives.
    ///
    /// # Example
    ///
    /// ```
    /// use datakit::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2, 3, 4]);
    /// let mut cursor = list.cursor_mut();
    /// while let Some(&value) = cursor.next() {
    ///     if value % 2 == 0 {
    ///         cursor.remove()?;
    ///     }
    /// }
    /// assert_eq!(list.to_string(), "[1, 3]");
    /// # Ok::<(), datakit::Error>(())
    /// ```
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }
}

// ==============================================================
// Trait impls
// ==============================================================

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

/// Two lists are equal iff they have the same length and pairwise-equal
/// elements in traversal order.
impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

/// Hashes the length and then each element in order, so the hash agrees
/// with equality regardless of how the slots happen to be laid out.
impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

/// Bracketed, comma-separated elements in head-to-tail order.
///
/// ```
/// use datakit::SinglyLinkedList;
///
/// let list = SinglyLinkedList::from([1, 2, 3]);
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for SinglyLinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}
