use std::fmt::Debug;
use std::ops::{Index, IndexMut};

mod inner {
    #[cfg(feature = "thin-segments")]
    pub type Buffer<T> = thin_vec::ThinVec<Option<T>>;
    #[cfg(not(feature = "thin-segments"))]
    pub type Buffer<T> = Vec<Option<T>>;
}

/// One window of storage in a [`SegDeque`][crate::SegDeque].
///
/// A segment owns a buffer of slots and two cursors into it. The slots in
/// `front_offset..back_size` hold live elements, every other slot is vacant. Slots before
/// `front_offset` are slack for elements pushed at the front of the deque, slots at or after
/// `back_size` are slack for elements pushed at the back.
pub struct Segment<T> {
    buffer: inner::Buffer<T>,
    front_offset: usize,
    back_size: usize,
}

impl<T> Segment<T> {
    /// A segment grown at the back: no live elements, both cursors at the start.
    pub(crate) fn for_back(capacity: usize) -> Self {
        Segment {
            buffer: inner::Buffer::with_capacity(capacity),
            front_offset: 0,
            back_size: 0,
        }
    }

    /// A segment grown at the front: `capacity` vacant slots, both cursors at the end so the
    /// next front push lands on the last slot.
    pub(crate) fn for_front(capacity: usize) -> Self {
        let mut buffer = inner::Buffer::with_capacity(capacity);
        for _ in 0..capacity {
            buffer.push(None);
        }
        Segment {
            buffer,
            front_offset: capacity,
            back_size: capacity,
        }
    }

    /// Index of the first live slot in the buffer.
    #[inline]
    pub fn front_offset(&self) -> usize {
        self.front_offset
    }

    /// One past the index of the last live slot in the buffer.
    #[inline]
    pub fn back_size(&self) -> usize {
        self.back_size
    }

    /// The number of live elements, `back_size - front_offset`.
    #[inline]
    pub fn len(&self) -> usize {
        self.back_size - self.front_offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_offset >= self.back_size
    }

    /// The number of slots the buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the live element at `index`, counted from `front_offset`.
    ///
    /// Only the buffer bounds are checked: an index past the live window but still inside the
    /// buffer finds a vacant slot and returns `None`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.front_offset
            .checked_add(index)
            .and_then(|offset| self.buffer.get(offset))
            .and_then(Option::as_ref)
    }

    /// Mutable counterpart of [`Segment::get`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let offset = self.front_offset.checked_add(index)?;
        self.buffer.get_mut(offset).and_then(Option::as_mut)
    }

    /// The live slots of this segment. Every slot in the returned slice is `Some`.
    #[inline]
    pub(crate) fn live(&self) -> &[Option<T>] {
        &self.buffer[self.front_offset..self.back_size]
    }

    #[inline]
    pub(crate) fn live_mut(&mut self) -> &mut [Option<T>] {
        &mut self.buffer[self.front_offset..self.back_size]
    }

    /// Writes `val` at `back_size`, extending the buffer when the slot does not exist yet.
    pub(crate) fn push_back(&mut self, val: T) {
        if self.back_size >= self.buffer.len() {
            self.buffer.push(Some(val));
        } else {
            self.buffer[self.back_size] = Some(val);
        }
        self.back_size += 1;
    }

    /// Moves `front_offset` down by one and writes `val` there.
    ///
    /// Returns the value back when there is no slot below `front_offset` inside the buffer,
    /// leaving the segment untouched.
    pub(crate) fn push_front(&mut self, val: T) -> Result<(), T> {
        match self.front_offset.checked_sub(1) {
            Some(offset) if offset < self.buffer.len() => {
                self.buffer[offset] = Some(val);
                self.front_offset = offset;
                Ok(())
            }
            _ => Err(val),
        }
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.back_size -= 1;
        self.buffer[self.back_size].take()
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let val = self.buffer[self.front_offset].take();
        self.front_offset += 1;
        val
    }
}

impl<T: Clone> Clone for Segment<T> {
    fn clone(&self) -> Self {
        Segment {
            buffer: self.buffer.clone(),
            front_offset: self.front_offset,
            back_size: self.back_size,
        }
    }
}

impl<T: Debug> Debug for Segment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segment")
            .field("front_offset", &self.front_offset)
            .field("back_size", &self.back_size)
            .field("live", &self.live().iter().flatten().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Index<usize> for Segment<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(t) => t,
            None => panic!(
                "Segment::index: index out of bounds: index is {}, len is {}",
                index,
                self.len()
            ),
        }
    }
}

impl<T> IndexMut<usize> for Segment<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();
        match self.get_mut(index) {
            Some(t) => t,
            None => panic!(
                "Segment::index_mut: index out of bounds: index is {}, len is {}",
                index, len
            ),
        }
    }
}

#[cfg(test)]
mod test_segment {
    use super::*;

    #[test]
    fn test_back_segment() {
        let mut s = Segment::<i32>::for_back(4);
        assert_eq!(0, s.len());
        assert!(s.is_empty());
        assert!(s.capacity() >= 4);

        s.push_back(1);
        s.push_back(2);
        s.push_back(3);
        s[0] = s[1];
        assert_eq!(3, s.len());
        assert_eq!((s.front_offset(), s.back_size()), (0, 3));

        assert_eq!(s.pop_front(), Some(2));
        assert_eq!(s.pop_back(), Some(3));
        assert_eq!((s.front_offset(), s.back_size()), (1, 2));
        assert_eq!(s[0], 2);
        assert_eq!(s.pop_back(), Some(2));
        assert!(s.pop_back().is_none());
        assert!(s.pop_front().is_none());
        assert!(s.is_empty());
    }

    #[test]
    fn test_back_segment_reuses_vacated_slots() {
        let mut s = Segment::<i32>::for_back(2);
        s.push_back(1);
        s.push_back(2);
        assert_eq!(s.pop_back(), Some(2));
        s.push_back(5);
        assert_eq!(s.live(), &[Some(1), Some(5)]);
    }

    #[test]
    fn test_front_segment() {
        let mut s = Segment::<i32>::for_front(3);
        assert!(s.is_empty());
        assert_eq!((s.front_offset(), s.back_size()), (3, 3));

        assert_eq!(s.push_front(1), Ok(()));
        assert_eq!(s.push_front(2), Ok(()));
        assert_eq!(s.push_front(3), Ok(()));
        assert_eq!(s.push_front(4), Err(4));
        assert_eq!(s.front_offset(), 0);
        assert_eq!(s.live(), &[Some(3), Some(2), Some(1)]);
        assert_eq!(s.get(2), Some(&1));
        assert_eq!(s.get(3), None);
    }

    #[test]
    fn test_get_past_live_window() {
        let mut s = Segment::<i32>::for_front(3);
        s.push_front(7).unwrap();
        // the vacant slots before front_offset are not reachable
        assert_eq!(s.get(0), Some(&7));
        assert_eq!(s.get(1), None);
        if let Some(v) = s.get_mut(0) {
            *v += 1;
        }
        assert_eq!(s[0], 8);
    }

    #[test]
    fn test_get_huge_index() {
        let mut s = Segment::<i32>::for_front(4);
        s.push_front(1).unwrap();
        assert_eq!(s.front_offset(), 3);
        assert_eq!(s.get(usize::MAX), None);
        assert_eq!(s.get_mut(usize::MAX), None);
        assert_eq!(s.get(usize::MAX - 2), None);
        assert_eq!(s.get(0), Some(&1));
    }

    #[test]
    fn test_drops_live_elements_once() {
        use std::rc::Rc;

        let rc = Rc::new(());
        let mut s = Segment::for_back(4);
        s.push_back(Rc::clone(&rc));
        s.push_back(Rc::clone(&rc));
        s.push_back(Rc::clone(&rc));
        drop(s.pop_front());
        assert_eq!(Rc::strong_count(&rc), 3);
        drop(s);
        assert_eq!(Rc::strong_count(&rc), 1);
    }
}
