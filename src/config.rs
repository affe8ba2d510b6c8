use crate::{Error, Result};
use num_integer::Integer;
use std::num::NonZeroUsize;

/// Segment capacity used by [`SegDeque::new`][crate::SegDeque::new] and by `Default`.
pub const DEFAULT_SEGMENT_CAPACITY: usize = 16;

/// Configures how many elements each newly allocated segment holds.
///
/// All segments of a [`SegDeque`][crate::SegDeque] are allocated with the same capacity.
/// A small capacity keeps the slack at either end small, at the cost of a longer chain to walk
/// when indexing. A large capacity makes indexing cheaper but wastes up to two partially filled
/// segments worth of memory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    segment_capacity: NonZeroUsize,
}

impl Config {
    /// Create a new [`Config`][crate::Config] with the given segment capacity.
    ///
    /// ```
    /// # use segdeque::{Config, Error};
    /// assert_eq!(Config::new(4).unwrap().segment_capacity(), 4);
    /// assert_eq!(
    ///     Config::new(0),
    ///     Err(Error::InvalidConfiguration { segment_capacity: 0 })
    /// );
    /// ```
    pub fn new(segment_capacity: usize) -> Result<Self> {
        match NonZeroUsize::new(segment_capacity) {
            Some(segment_capacity) => Ok(Config { segment_capacity }),
            None => Err(Error::InvalidConfiguration { segment_capacity }),
        }
    }

    /// The number of elements each new segment is allocated for.
    #[inline]
    pub fn segment_capacity(&self) -> usize {
        self.segment_capacity.get()
    }

    /// Number of full segments needed to hold `len` elements.
    #[inline]
    pub fn segments_for(&self, len: usize) -> usize {
        Integer::div_ceil(&len, &self.segment_capacity.get())
    }
}

impl Default for Config {
    fn default() -> Self {
        match NonZeroUsize::new(DEFAULT_SEGMENT_CAPACITY) {
            Some(segment_capacity) => Config { segment_capacity },
            None => unreachable!("default segment capacity is non-zero"),
        }
    }
}

#[test]
pub fn default_capacity() {
    assert_eq!(Config::default().segment_capacity(), 16);
}

#[test]
pub fn zero_capacity_rejected() {
    assert_eq!(
        Config::new(0),
        Err(Error::InvalidConfiguration {
            segment_capacity: 0
        })
    );
}

#[test]
pub fn segments_for() {
    let lens: &[(usize, usize)] = &[(0, 0), (1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (9, 5)];

    let config = Config::new(2).unwrap();
    for &(len, segments) in lens {
        assert_eq!(config.segments_for(len), segments, "len={}", len)
    }

    let config = Config::new(1).unwrap();
    for len in 0..32 {
        assert_eq!(config.segments_for(len), len)
    }
}
