//! Error type for fallible list operations.
//!
//! Every fallible operation validates its arguments before touching the
//! chain, so an `Err` return always leaves the list unchanged.

/// The ways a list or cursor operation can fail.
///
/// Indices and counts are `usize`, so only upper bounds can be violated.
///
/// # Example
///
/// ```
/// use datakit::{Error, SinglyLinkedList};
///
/// let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
/// assert_eq!(list.get(0), Err(Error::OutOfRange { index: 0, len: 0 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index or count argument fell outside its legal interval.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// The offending index or count.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },

    /// A removal was requested on a list with no elements.
    #[error("cannot remove from an empty list")]
    EmptyList,

    /// A cursor removal was requested before the cursor had yielded an
    /// element, or after that element had already been removed.
    #[error("cursor must yield an element before it can remove one")]
    CursorNotAdvanced,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        let err = Error::OutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 out of range for list of length 3");
        assert_eq!(Error::EmptyList.to_string(), "cannot remove from an empty list");
        assert_eq!(
            Error::CursorNotAdvanced.to_string(),
            "cursor must yield an element before it can remove one"
        );
    }
}
