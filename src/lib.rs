//! This crate provides the [`SegDeque`][crate::SegDeque] data structure.
//!
//! It is a double-ended queue similar to [`VecDeque`][std::collections::VecDeque], but stores its
//! elements in a chain of fixed-capacity buffers, referred to as "segments". This involves a few
//! trade-offs:
//!
//! #### Pros:
//!
//! - Pushing at either end never moves existing elements. When the boundary segment is full, a
//!   new segment is linked in front of or behind it.
//! - Popping at either end releases a segment as soon as it becomes empty, so memory follows the
//!   length of the deque instead of its high-water mark.
//!
//! #### Cons:
//!
//! - Indexing walks the chain of segments, so [`get`][crate::SegDeque::get] costs
//!   `O(len / segment_capacity)` rather than `O(1)`. Sequential access should use
//!   [`iter`][crate::SegDeque::iter] or a [`Cursor`][crate::Cursor].
//! - Direct slicing is unavailable (i.e. no `&[T]` or `&mut [T]`).
//!
//! ## Use Cases
//!
//! 1. A queue or work list that is fed and drained at both ends, with bursts of growth that
//!    should not trigger a full reallocation.
//! 2. A sequence that is built once and then transformed with [`map`][crate::SegDeque::map],
//!    [`filter`][crate::SegDeque::filter] or [`flat_map`][crate::SegDeque::flat_map].

use either::Either;
use std::{
    collections::VecDeque,
    fmt::Debug,
    hash::Hash,
    iter::FromIterator,
    ops::{Index, IndexMut},
};


mod config;
mod cursor;
mod error;
mod external_trait_impls;
mod functional;
mod iter;
mod segment;

pub use config::{Config, DEFAULT_SEGMENT_CAPACITY};
pub use cursor::{Cursor, CursorMut};
pub use error::{Error, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use segment::Segment;

/// Which end of the chain an operation works from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum End {
    Front,
    Back,
}

/// A double-ended queue that grows and shrinks in fixed-size segments at both ends.
///
/// Each segment is allocated for [`segment_capacity`][crate::SegDeque::segment_capacity]
/// elements. Assuming a segment capacity of 2:
/// - An empty `SegDeque` holds a single empty segment.
/// - Pushing 5 elements at the back fills two segments and starts a third.
/// - Pushing an element at the front then links a new segment before the first one, with all of
///   its slots reserved for further pushes at the front.
///
/// Popping an element that leaves a boundary segment empty unlinks that segment, except for the
/// last remaining one. Segments in the interior of the chain are therefore never empty.
pub struct SegDeque<T> {
    config: Config,
    len: usize,
    segments: VecDeque<Segment<T>>,
}

impl<T> SegDeque<T> {
    /// Create a new, empty [`SegDeque`][crate::SegDeque] using the default segment capacity of 16.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let d: SegDeque<i32> = SegDeque::new();
    /// assert_eq!(d.segment_capacity(), 16);
    /// assert_eq!(d.segment_count(), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new, empty [`SegDeque`][crate::SegDeque] whose segments hold `segment_capacity`
    /// elements each.
    ///
    /// ```
    /// # use segdeque::{Error, SegDeque};
    /// let d: SegDeque<i32> = SegDeque::with_segment_capacity(4).unwrap();
    /// assert_eq!(d.segment_capacity(), 4);
    ///
    /// assert_eq!(
    ///     SegDeque::<i32>::with_segment_capacity(0).err(),
    ///     Some(Error::InvalidConfiguration { segment_capacity: 0 })
    /// );
    /// ```
    ///
    /// # Errors
    /// - [`Error::InvalidConfiguration`] if `segment_capacity` is zero
    pub fn with_segment_capacity(segment_capacity: usize) -> Result<Self> {
        Config::new(segment_capacity).map(Self::with_config)
    }

    /// Create a new, empty [`SegDeque`][crate::SegDeque] from an already validated
    /// [`Config`][crate::Config].
    pub fn with_config(config: Config) -> Self {
        let mut segments = VecDeque::with_capacity(1);
        segments.push_back(Segment::for_back(config.segment_capacity()));
        SegDeque {
            config,
            len: 0,
            segments,
        }
    }

    /// The number of elements in the [`SegDeque`][crate::SegDeque].
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut d: SegDeque<i32> = SegDeque::new();
    /// d.push_back(1);
    /// d.push_front(2);
    /// assert_eq!(d.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The capacity every new segment is allocated with.
    #[inline]
    pub fn segment_capacity(&self) -> usize {
        self.config.segment_capacity()
    }

    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// The number of segments in the chain. This is never zero.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut d: SegDeque<i32> = SegDeque::with_segment_capacity(2).unwrap();
    /// assert_eq!(d.segment_count(), 1);
    /// d.extend(0..5);
    /// assert_eq!(d.segment_count(), 3);
    /// ```
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the segment at position `index` in the chain.
    ///
    /// # Errors
    /// - [`Error::SegmentOutOfRange`] if `index` is not less than
    ///   [`segment_count`][crate::SegDeque::segment_count]
    pub fn segment(&self, index: usize) -> Result<&Segment<T>> {
        self.segments.get(index).ok_or(Error::SegmentOutOfRange {
            index,
            count: self.segments.len(),
        })
    }

    /// Returns an iterator over the segments of the chain, from front to back.
    pub fn segments(
        &self,
    ) -> impl ExactSizeIterator<Item = &'_ Segment<T>> + DoubleEndedIterator + '_ {
        self.segments.iter()
    }

    /// Pushes a new value onto the back of the [`SegDeque`][crate::SegDeque].
    ///
    /// If the last segment has no room left, a new segment is linked behind it first.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut d: SegDeque<i32> = SegDeque::new();
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(d[1], 2);
    /// ```
    pub fn push_back(&mut self, val: T) {
        self.reserve_back();
        match self.segments.back_mut() {
            Some(last) => last.push_back(val),
            None => unreachable!("segment chain is never empty"),
        }
        self.len += 1;
    }

    /// Pushes a new value onto the front of the [`SegDeque`][crate::SegDeque].
    ///
    /// If the first segment has no slack before its first element, a new segment is linked in
    /// front of it, with all of its slots reserved for pushes at the front.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut d: SegDeque<i32> = SegDeque::new();
    /// d.push_front(1);
    /// d.push_front(2);
    /// assert_eq!(d[0], 2);
    /// ```
    ///
    /// # Panics
    /// - If the first segment has no writable slot after the capacity check. This means the
    ///   segment chain is corrupted and cannot happen through the public API.
    pub fn push_front(&mut self, val: T) {
        self.reserve_front();
        let pushed = match self.segments.front_mut() {
            Some(first) => first.push_front(val),
            None => unreachable!("segment chain is never empty"),
        };
        if pushed.is_err() {
            capacity_invariant("SegDeque::push_front");
        }
        self.len += 1;
    }

    /// Removes the last value from the [`SegDeque`][crate::SegDeque] and returns it.
    ///
    /// ```
    /// # use segdeque::{Error, SegDeque};
    /// let mut d: SegDeque<i32> = SegDeque::new();
    /// d.push_back(1);
    /// assert_eq!(d.pop_back(), Ok(1));
    /// assert_eq!(d.pop_back(), Err(Error::Underflow));
    /// ```
    ///
    /// # Errors
    /// - [`Error::Underflow`] if the deque is empty
    pub fn pop_back(&mut self) -> Result<T> {
        self.pop(End::Back)
    }

    /// Removes the first value from the [`SegDeque`][crate::SegDeque] and returns it.
    ///
    /// ```
    /// # use segdeque::{Error, SegDeque};
    /// let mut d: SegDeque<i32> = SegDeque::new();
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(d.pop_front(), Ok(1));
    /// assert_eq!(d.len(), 1);
    /// ```
    ///
    /// # Errors
    /// - [`Error::Underflow`] if the deque is empty
    pub fn pop_front(&mut self) -> Result<T> {
        self.pop(End::Front)
    }

    /// Returns a reference to the element at the given index.
    ///
    /// This walks the chain of segments from the front, so it is `O(segment_count)`.
    ///
    /// ```
    /// # use segdeque::{Error, SegDeque};
    /// let mut d: SegDeque<i32> = SegDeque::new();
    /// assert_eq!(d.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    /// d.push_back(1);
    /// assert_eq!(d.get(0), Ok(&1));
    /// ```
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index` is not less than `self.len()`
    pub fn get(&self, index: usize) -> Result<&T> {
        let (seg, offset) = self.segment_and_offset(index)?;
        match self.segments[seg].get(offset) {
            Some(t) => Ok(t),
            None => Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Returns a mutable reference to the element at the given index.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut d: SegDeque<i32> = SegDeque::new();
    /// d.push_back(1);
    /// *d.get_mut(0).unwrap() = 5;
    /// assert_eq!(d[0], 5);
    /// ```
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index` is not less than `self.len()`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        let (seg, offset) = self.segment_and_offset(index)?;
        match self.segments[seg].get_mut(offset) {
            Some(t) => Ok(t),
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Returns the first element, or `None` if the deque is empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0).ok()
    }

    /// Returns the last element, or `None` if the deque is empty.
    pub fn back(&self) -> Option<&T> {
        match self.len {
            0 => None,
            len => self.get(len - 1).ok(),
        }
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len {
            0 => None,
            len => self.get_mut(len - 1).ok(),
        }
    }

    /// Removes all elements, leaving a single empty segment. The segment capacity is kept.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut d: SegDeque<i32> = SegDeque::with_segment_capacity(2).unwrap();
    /// d.extend(0..10);
    /// d.clear();
    /// assert!(d.is_empty());
    /// assert_eq!(d.segment_count(), 1);
    /// assert_eq!(d.segment_capacity(), 2);
    /// ```
    pub fn clear(&mut self) {
        self.segments.clear();
        self.segments
            .push_back(Segment::for_back(self.config.segment_capacity()));
        self.len = 0;
    }

    /// Returns an iterator over immutable references to the elements of the
    /// [`SegDeque`][crate::SegDeque], from front to back.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut d: SegDeque<i32> = SegDeque::new();
    /// d.push_back(2);
    /// d.push_back(3);
    /// d.push_front(1);
    /// let mut i = d.iter();
    /// assert_eq!(*i.next().unwrap(), 1);
    /// assert_eq!(*i.next().unwrap(), 2);
    /// assert_eq!(*i.next().unwrap(), 3);
    /// assert_eq!(i.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.len, self.segments.iter())
    }

    /// Returns an iterator over mutable references to the elements of the
    /// [`SegDeque`][crate::SegDeque], from front to back.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut d: SegDeque<i32> = (1..=3).collect();
    /// d.iter_mut().for_each(|v| *v *= 10);
    /// assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.len, self.segments.iter_mut())
    }

    /// Returns a read-only [`Cursor`][crate::Cursor] positioned before the first element.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Returns a [`CursorMut`][crate::CursorMut] positioned before the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    /// Makes sure the last segment has a slot at `back_size`.
    ///
    /// A saturated last segment gets a new segment linked behind it. If it is saturated and
    /// empty, the deque is empty and the segment is replaced instead, so an empty segment never
    /// ends up at the front of the chain.
    fn reserve_back(&mut self) {
        let capacity = self.config.segment_capacity();
        let replace = match self.segments.back() {
            Some(last) if last.back_size() < capacity => return,
            Some(last) => last.is_empty(),
            None => false,
        };
        if replace {
            self.segments.pop_back();
        }
        self.segments.push_back(Segment::for_back(capacity));
    }

    /// Makes sure the first segment has a slot before `front_offset`, linking a new segment in
    /// front of it or replacing it when it is empty.
    fn reserve_front(&mut self) {
        let capacity = self.config.segment_capacity();
        let replace = match self.segments.front() {
            Some(first) if first.front_offset() > 0 => return,
            Some(first) => first.is_empty(),
            None => false,
        };
        if replace {
            self.segments.pop_front();
        }
        self.segments.push_front(Segment::for_front(capacity));
    }

    fn pop(&mut self, end: End) -> Result<T> {
        if self.len == 0 {
            return Err(Error::Underflow);
        }
        let seg = match self.first_occupied(end) {
            Some(seg) => seg,
            None => unreachable!("non-empty deque without an occupied segment"),
        };
        let segment = &mut self.segments[seg];
        let popped = match end {
            End::Front => segment.pop_front(),
            End::Back => segment.pop_back(),
        };
        let val = match popped {
            Some(val) => val,
            None => unreachable!("occupied segment yielded no element"),
        };
        self.len -= 1;
        self.remove_empty_boundaries();
        Ok(val)
    }

    /// Position of the first non-empty segment when scanning the chain from `end`.
    fn first_occupied(&self, end: End) -> Option<usize> {
        let positions = 0..self.segments.len();
        let mut order = match end {
            End::Front => Either::Left(positions),
            End::Back => Either::Right(positions.rev()),
        };
        order.find(|&i| !self.segments[i].is_empty())
    }

    /// Unlinks empty segments from the front of the chain, then from the back, never
    /// unlinking the last remaining segment.
    fn remove_empty_boundaries(&mut self) {
        while self.segments.len() > 1 && self.segments.front().map_or(false, Segment::is_empty) {
            self.segments.pop_front();
        }
        while self.segments.len() > 1 && self.segments.back().map_or(false, Segment::is_empty) {
            self.segments.pop_back();
        }
    }

    /// Translates a linear index into a `(segment, offset)` pair by walking the chain.
    fn segment_and_offset(&self, index: usize) -> Result<(usize, usize)> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let mut start = 0;
        for (seg, segment) in self.segments.iter().enumerate() {
            let seg_len = segment.len();
            if start + seg_len > index {
                return Ok((seg, index - start));
            }
            start += seg_len;
        }
        Err(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }
}

impl<T> Default for SegDeque<T> {
    fn default() -> Self {
        SegDeque::new()
    }
}

impl<T: Clone> Clone for SegDeque<T> {
    fn clone(&self) -> Self {
        SegDeque {
            config: self.config,
            len: self.len,
            segments: self.segments.clone(),
        }
    }
}

impl<T> Index<usize> for SegDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(t) => t,
            Err(_) => index_oob("SegDeque::index", index, self.len),
        }
    }
}

impl<T> IndexMut<usize> for SegDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let size = self.len;
        match self.get_mut(index) {
            Ok(t) => t,
            Err(_) => index_oob("SegDeque::index_mut", index, size),
        }
    }
}

impl<T: Debug> Debug for SegDeque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for SegDeque<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|i| i.hash(state));
    }
}

impl<T> PartialEq for SegDeque<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for SegDeque<T> where T: Eq {}

impl<T: PartialEq> PartialEq<Vec<T>> for SegDeque<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<SegDeque<T>> for Vec<T> {
    fn eq(&self, other: &SegDeque<T>) -> bool {
        other == self
    }
}

impl<T> Extend<T> for SegDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (min_size, _) = iter.size_hint();
        self.segments.reserve(self.config.segments_for(min_size));
        for i in iter {
            self.push_back(i);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SegDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for SegDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut d = SegDeque::new();
        d.extend(iter);
        d
    }
}

impl<T> IntoIterator for SegDeque<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SegDeque<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SegDeque<T> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cold]
fn capacity_invariant(caller: &str) -> ! {
    panic!(
        "{}: front capacity check failed, first segment has no writable slot",
        caller
    )
}

#[cold]
fn index_oob(caller: &str, idx: usize, len: usize) -> ! {
    panic!(
        "{}: index out of bounds: index is {}, len is {}",
        caller, idx, len
    )
}
