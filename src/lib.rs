//! # datakit
//!
//! A generic singly linked list with indexed access, splicing, and a
//! mutating cursor.
//!
//! ## Modules
//!
//! - [`list`]: the [`SinglyLinkedList`] container
//! - [`cursor`]: [`Iter`], [`IntoIter`], and the mutating [`CursorMut`]
//! - [`error`]: the [`Error`] enum for fallible operations
//!
//! ## Design principles
//!
//! 1. **Handles, not pointers**: nodes live in a slab arena and link to
//!    each other by index handles, so the chain is plain safe Rust and the
//!    list can keep a non-owning tail handle for O(1) appends.
//! 2. **Validate before mutating**: every fallible operation checks its
//!    arguments first; an `Err` always leaves the list unchanged.
//! 3. **Moves over sharing**: splicing consumes the source list — Rust's
//!    ownership expresses the transfer that a pointer graph would leave
//!    implicit.
//! 4. **Exclusive cursors**: the mutating cursor borrows the list for its
//!    whole lifetime, so structural modification behind its back is a
//!    compile error rather than undefined behavior.
//!
//! ## Example
//!
//! ```
//! use datakit::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::from([1, 2, 3]);
//! list.push_back(4);
//! list.append(SinglyLinkedList::from([5, 6]));
//!
//! let mut cursor = list.cursor_mut();
//! while let Some(&value) = cursor.next() {
//!     if value % 2 == 0 {
//!         cursor.remove()?;
//!     }
//! }
//!
//! assert_eq!(list.to_string(), "[1, 3, 5]");
//! # Ok::<(), datakit::Error>(())
//! ```
//!
//! ## Not covered
//!
//! The list is a plain single-threaded value. It is `Send` and `Sync` when
//! `T` is, but offers no internal synchronization; share it across threads
//! behind a lock or not at all.

pub mod cursor;
pub mod error;
pub mod list;

mod store;

// Re-export the main types for convenience
pub use cursor::{CursorMut, IntoIter, Iter};
pub use error::Error;
pub use list::SinglyLinkedList;
