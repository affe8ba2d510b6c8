use crate::*;

impl<T> SegDeque<T> {
    /// Builds a new [`SegDeque`][crate::SegDeque] with the same segment capacity, holding `f`
    /// applied to every element in order.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let d: SegDeque<i32> = (1..=5).collect();
    /// let doubled = d.map(|x| x * 2);
    /// assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> SegDeque<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut out = SegDeque::with_config(self.config);
        out.segments.reserve(self.config.segments_for(self.len));
        for val in self.iter() {
            out.push_back(f(val));
        }
        out
    }

    /// Builds a new [`SegDeque`][crate::SegDeque] with the same segment capacity, holding every
    /// element produced by `f`, in the order `f` produces them.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let d: SegDeque<i32> = (1..=3).collect();
    /// let repeated = d.flat_map(|&x| vec![x; x as usize]);
    /// assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
    /// ```
    pub fn flat_map<U, I, F>(&self, mut f: F) -> SegDeque<U>
    where
        F: FnMut(&T) -> I,
        I: IntoIterator<Item = U>,
    {
        let mut out = SegDeque::with_config(self.config);
        for val in self.iter() {
            out.extend(f(val));
        }
        out
    }

    /// Folds every element into an accumulator, from front to back.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let d: SegDeque<i32> = (1..=5).collect();
    /// assert_eq!(d.reduce(0, |acc, x| acc + x), 15);
    /// assert_eq!(d.reduce(String::new(), |acc, x| acc + &x.to_string()), "12345");
    /// ```
    pub fn reduce<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(init, f)
    }

    /// Builds a new [`SegDeque`][crate::SegDeque] with the same segment capacity, holding a clone
    /// of every element for which `predicate` returns `true`, in their original order.
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let d: SegDeque<i32> = (1..=5).collect();
    /// let evens = d.filter(|x| x % 2 == 0);
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> SegDeque<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut out = SegDeque::with_config(self.config);
        for val in self.iter().filter(|val| predicate(val)) {
            out.push_back(val.clone());
        }
        out
    }
}

#[cfg(test)]
mod test_functional {
    use super::*;

    #[test]
    fn map_keeps_segment_capacity() {
        let d = {
            let mut d = SegDeque::<i32>::with_segment_capacity(3).unwrap();
            d.extend(0..10);
            d
        };
        let m = d.map(|x| x.to_string());
        assert_eq!(m.segment_capacity(), 3);
        assert_eq!(m.len(), 10);
        assert_eq!(m[9], "9");
    }

    #[test]
    fn map_identity_round_trip() {
        let mut d = SegDeque::with_segment_capacity(2).unwrap();
        for i in 0..7 {
            if i % 2 == 0 {
                d.push_back(i);
            } else {
                d.push_front(i);
            }
        }
        let m = d.map(|&x| x);
        assert_eq!(m, d);
    }

    #[test]
    fn map_over_strings() {
        let mut d = SegDeque::new();
        d.push_back(String::from("Hello"));
        d.push_back(String::from("World"));
        d.push_front(String::from("Hi"));
        let upper = d.map(|s| s.to_uppercase());
        assert_eq!(upper.len(), 3);
        assert_eq!(upper[0], "HI");
        assert_eq!(upper[1], "HELLO");
        assert_eq!(upper[2], "WORLD");
    }

    #[test]
    fn flat_map_empty_outputs() {
        let d: SegDeque<i32> = (0..6).collect();
        let out = d.flat_map(|&x| if x % 3 == 0 { vec![] } else { vec![x, -x] });
        assert_eq!(out, vec![1, -1, 2, -2, 4, -4, 5, -5]);
        assert_eq!(out.segment_capacity(), d.segment_capacity());
    }

    #[test]
    fn flat_map_option() {
        let d: SegDeque<i32> = (0..6).collect();
        let out = d.flat_map(|&x| if x > 3 { Some(x) } else { None });
        assert_eq!(out, vec![4, 5]);
    }

    #[test]
    fn flat_map_loose_upper_bound() {
        let d: SegDeque<usize> = (0..4).collect();
        let out = d.flat_map(|&x| (x..usize::MAX).take_while(move |y| *y == x));
        assert_eq!(out, vec![0, 1, 2, 3]);
        assert_eq!(out.segment_count(), 1);
    }

    #[test]
    fn filter_preserves_order() {
        let mut d = SegDeque::with_segment_capacity(2).unwrap();
        for i in 0..20 {
            d.push_front(i);
        }
        let odd = d.filter(|x| x % 2 == 1);
        assert_eq!(odd.len(), 10);
        assert_eq!(odd, (0..20).rev().filter(|x| x % 2 == 1).collect::<Vec<_>>());
        assert_eq!(d.len(), 20);
    }

    #[test]
    fn filter_nothing_matches() {
        let d: SegDeque<i32> = (0..5).collect();
        let none = d.filter(|_| false);
        assert!(none.is_empty());
        assert_eq!(none.segment_count(), 1);
    }

    #[test]
    fn reduce_is_left_fold() {
        let d: SegDeque<i32> = (1..=4).collect();
        // (((0 - 1) - 2) - 3) - 4
        assert_eq!(d.reduce(0, |acc, x| acc - x), -10);
        let empty: SegDeque<i32> = SegDeque::new();
        assert_eq!(empty.reduce(42, |acc, x| acc + x), 42);
    }
}
