use std::fmt;

/// Errors reported by [`SegDeque`][crate::SegDeque] and its cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A segment capacity of zero was requested.
    InvalidConfiguration { segment_capacity: usize },
    /// A pop was attempted on an empty deque.
    Underflow,
    /// An element index was not less than the length of the deque.
    IndexOutOfRange { index: usize, len: usize },
    /// A segment index was not less than the number of segments in the chain.
    SegmentOutOfRange { index: usize, count: usize },
    /// A cursor was read before its first `advance` or after it was exhausted.
    InvalidIteratorState,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration { segment_capacity } => write!(
                f,
                "invalid configuration: segment capacity must be non-zero, got {}",
                segment_capacity
            ),
            Error::Underflow => write!(f, "pop from empty deque"),
            Error::IndexOutOfRange { index, len } => write!(
                f,
                "index out of range: index is {}, len is {}",
                index, len
            ),
            Error::SegmentOutOfRange { index, count } => write!(
                f,
                "segment index out of range: index is {}, segment count is {}",
                index, count
            ),
            Error::InvalidIteratorState => write!(f, "cursor is not positioned on an element"),
        }
    }
}

impl std::error::Error for Error {}

/// Shorthand for results carrying a [`segdeque::Error`][crate::Error].
pub type Result<T> = std::result::Result<T, Error>;
