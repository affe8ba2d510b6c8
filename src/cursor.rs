use crate::*;

/// Where a cursor stands in the chain of segments.
///
/// `segment` and `position` are only meaningful while the cursor is `Positioned`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    NotStarted,
    Positioned { segment: usize, position: usize },
    Exhausted,
}

impl State {
    /// Computes the state following `self` in a chain whose segment lengths are given by `len_of`.
    ///
    /// Empty segments are skipped, wherever they appear in the chain.
    fn advance(self, count: usize, len_of: impl Fn(usize) -> usize) -> State {
        let (mut segment, mut position) = match self {
            State::NotStarted => (0, 0),
            State::Positioned { segment, position } => (segment, position + 1),
            State::Exhausted => return State::Exhausted,
        };
        while segment < count {
            if position < len_of(segment) {
                return State::Positioned { segment, position };
            }
            segment += 1;
            position = 0;
        }
        State::Exhausted
    }
}

/// A read-only cursor over the elements of a [`SegDeque`][crate::SegDeque].
///
/// A new cursor is positioned before the first element. Each call to
/// [`advance`][crate::Cursor::advance] moves it to the next element and reports whether there was
/// one. Once it has run past the last element it stays exhausted.
///
/// ```
/// # use segdeque::{Error, SegDeque};
/// let d: SegDeque<i32> = (1..=3).collect();
/// let mut c = d.cursor();
/// assert_eq!(c.get(), Err(Error::InvalidIteratorState));
///
/// let mut seen = Vec::new();
/// while c.advance() {
///     seen.push(*c.get().unwrap());
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// assert_eq!(c.get(), Err(Error::InvalidIteratorState));
/// ```
pub struct Cursor<'a, T> {
    deque: &'a SegDeque<T>,
    state: State,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(deque: &'a SegDeque<T>) -> Self {
        Cursor {
            deque,
            state: State::NotStarted,
        }
    }

    /// Moves to the next element, returning `false` once there is none.
    pub fn advance(&mut self) -> bool {
        let segments = &self.deque.segments;
        self.state = self
            .state
            .advance(segments.len(), |seg| segments[seg].len());
        self.is_positioned()
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// - [`Error::InvalidIteratorState`] before the first call to `advance` or after the cursor
    ///   is exhausted
    pub fn get(&self) -> Result<&'a T> {
        match self.state {
            State::Positioned { segment, position } => self
                .deque
                .segments
                .get(segment)
                .and_then(|s| s.get(position))
                .ok_or(Error::InvalidIteratorState),
            _ => Err(Error::InvalidIteratorState),
        }
    }

    /// `(segment, position)` of the element under the cursor, if any.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self.state {
            State::Positioned { segment, position } => Some((segment, position)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_positioned(&self) -> bool {
        matches!(self.state, State::Positioned { .. })
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Cursor {
            deque: self.deque,
            state: self.state,
        }
    }
}

/// A cursor over the elements of a [`SegDeque`][crate::SegDeque] that can modify the element
/// under it.
///
/// It moves exactly like a [`Cursor`][crate::Cursor]. The cursor holds the deque's unique
/// borrow, so the chain cannot change shape while it exists, and writing through
/// [`get_mut`][crate::CursorMut::get_mut] never affects where it points.
///
/// ```
/// # use segdeque::SegDeque;
/// let mut d: SegDeque<i32> = (1..=5).collect();
/// let mut c = d.cursor_mut();
/// while c.advance() {
///     *c.get_mut().unwrap() *= 2;
/// }
/// assert_eq!(d, vec![2, 4, 6, 8, 10]);
/// ```
pub struct CursorMut<'a, T> {
    deque: &'a mut SegDeque<T>,
    state: State,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(deque: &'a mut SegDeque<T>) -> Self {
        CursorMut {
            deque,
            state: State::NotStarted,
        }
    }

    /// Moves to the next element, returning `false` once there is none.
    pub fn advance(&mut self) -> bool {
        let segments = &self.deque.segments;
        self.state = self
            .state
            .advance(segments.len(), |seg| segments[seg].len());
        self.is_positioned()
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// - [`Error::InvalidIteratorState`] before the first call to `advance` or after the cursor
    ///   is exhausted
    pub fn get(&self) -> Result<&T> {
        match self.state {
            State::Positioned { segment, position } => self
                .deque
                .segments
                .get(segment)
                .and_then(|s| s.get(position))
                .ok_or(Error::InvalidIteratorState),
            _ => Err(Error::InvalidIteratorState),
        }
    }

    /// Returns a mutable reference to the element under the cursor.
    ///
    /// # Errors
    /// - [`Error::InvalidIteratorState`] before the first call to `advance` or after the cursor
    ///   is exhausted
    pub fn get_mut(&mut self) -> Result<&mut T> {
        match self.state {
            State::Positioned { segment, position } => self
                .deque
                .segments
                .get_mut(segment)
                .and_then(|s| s.get_mut(position))
                .ok_or(Error::InvalidIteratorState),
            _ => Err(Error::InvalidIteratorState),
        }
    }

    pub fn position(&self) -> Option<(usize, usize)> {
        match self.state {
            State::Positioned { segment, position } => Some((segment, position)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_positioned(&self) -> bool {
        matches!(self.state, State::Positioned { .. })
    }
}

#[test]
fn state_skips_empty_segments() {
    let lens = [0usize, 2, 0, 0, 1, 0];
    let len_of = |seg: usize| lens[seg];

    let mut state = State::NotStarted;
    let mut visited = Vec::new();
    loop {
        state = state.advance(lens.len(), len_of);
        match state {
            State::Positioned { segment, position } => visited.push((segment, position)),
            _ => break,
        }
    }
    assert_eq!(visited, vec![(1, 0), (1, 1), (4, 0)]);
    assert_eq!(state, State::Exhausted);
    assert_eq!(state.advance(lens.len(), len_of), State::Exhausted);
}

#[test]
fn state_all_empty() {
    assert_eq!(State::NotStarted.advance(0, |_| 0), State::Exhausted);
    assert_eq!(State::NotStarted.advance(3, |_| 0), State::Exhausted);
}
