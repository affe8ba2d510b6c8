use crate::*;
use std::collections::vec_deque;
use std::iter::{Flatten, FusedIterator, Map};

type LiveSlots<'a, T> = fn(&'a Segment<T>) -> &'a [Option<T>];
type LiveSlotsMut<'a, T> = fn(&'a mut Segment<T>) -> &'a mut [Option<T>];

/// Iterator over immutable references to items in a [`SegDeque`][crate::SegDeque].
pub struct Iter<'a, T> {
    size: usize,
    iter: Flatten<Flatten<Map<vec_deque::Iter<'a, Segment<T>>, LiveSlots<'a, T>>>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(size: usize, segments: vec_deque::Iter<'a, Segment<T>>) -> Self {
        let live: LiveSlots<'a, T> = Segment::live;
        Iter {
            size,
            iter: segments.map(live).flatten().flatten(),
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            size: self.size,
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some(i) => {
                self.size -= 1;
                Some(i)
            }
            None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.iter.next_back() {
            Some(i) => {
                self.size -= 1;
                Some(i)
            }
            None => None,
        }
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}
impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Iterator over mutable references to items in a [`SegDeque`][crate::SegDeque].
pub struct IterMut<'a, T> {
    size: usize,
    iter: Flatten<Flatten<Map<vec_deque::IterMut<'a, Segment<T>>, LiveSlotsMut<'a, T>>>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(size: usize, segments: vec_deque::IterMut<'a, Segment<T>>) -> Self {
        let live: LiveSlotsMut<'a, T> = Segment::live_mut;
        IterMut {
            size,
            iter: segments.map(live).flatten().flatten(),
        }
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some(i) => {
                self.size -= 1;
                Some(i)
            }
            None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.iter.next_back() {
            Some(i) => {
                self.size -= 1;
                Some(i)
            }
            None => None,
        }
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}
impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

/// Consuming iterator over items in a [`SegDeque`][crate::SegDeque].
///
/// Segments are released as they are drained, the same way popping releases them.
pub struct IntoIter<T> {
    inner: SegDeque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: SegDeque<T>) -> Self {
        IntoIter { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.inner.len();
        (size, Some(size))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.pop_back().ok()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}
