// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};

use crate::{Element, Error, GapBuffer, Result};

impl<T: Element> GapBuffer<T> {
    /// Returns `true` if `other` yields exactly this buffer's elements, in order.
    ///
    /// An iterator without an upper bound on its length is never equal to a buffer and is not
    /// consumed. An iterator whose exact length is known and differs from the buffer's is
    /// rejected without being consumed.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let buffer = GapBuffer::from([0, 1, 2]);
    ///
    /// assert!(buffer.equals([0, 1, 2]));
    /// assert!(buffer.equals(0..3));
    /// assert!(!buffer.equals([0, 1]));
    /// assert!(!buffer.equals(std::iter::repeat(0)));
    /// ```
    pub fn equals<I>(&self, other: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let other = other.into_iter();
        match other.size_hint() {
            (_, None) => return false,
            (lower, Some(upper)) if lower == upper && lower != self.len() => return false,
            _ => {}
        }

        self.iter().zip_longest(other).all(|pair| match pair {
            EitherOrBoth::Both(left, right) => *left == right,
            _ => false,
        })
    }

    /// Compares this buffer lexicographically against `other`.
    ///
    /// The first pair of elements that differ decides the order. If one side runs out first it
    /// is the lesser. Elements without an order between them, such as `NaN`, are passed over as
    /// if equal. When `other` has no upper bound on its length the buffer is always
    /// [Ordering::Greater] and `other` is not consumed.
    ///
    /// ### Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let abc = GapBuffer::<char>::from("abc");
    ///
    /// assert_eq!(abc.compare("acd".chars()), Ordering::Less);
    /// assert_eq!(abc.compare("ab".chars()), Ordering::Greater);
    /// assert_eq!(abc.compare("abc".chars()), Ordering::Equal);
    /// assert_eq!(abc.compare(std::iter::repeat('z')), Ordering::Greater);
    /// ```
    pub fn compare<I>(&self, other: I) -> Ordering
    where
        I: IntoIterator<Item = T>,
    {
        let other = other.into_iter();
        if other.size_hint().1.is_none() {
            return Ordering::Greater;
        }

        for pair in self.iter().zip_longest(other) {
            match pair {
                EitherOrBoth::Both(left, right) => match left.partial_cmp(&right) {
                    Some(Ordering::Equal) | None => continue,
                    Some(ordering) => return ordering,
                },
                EitherOrBoth::Left(_) => return Ordering::Greater,
                EitherOrBoth::Right(_) => return Ordering::Less,
            }
        }

        Ordering::Equal
    }

    /// Returns the smallest element, the first one if several compare equal.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{Error, GapBuffer};
    ///
    /// assert_eq!(GapBuffer::from([3, 1, 2]).min(), Ok(1));
    /// assert_eq!(GapBuffer::<i32>::new().min(), Err(Error::Empty { operation: "min" }));
    /// ```
    pub fn min(&self) -> Result<T> {
        self.iter()
            .copied()
            .reduce(|smallest, item| if item < smallest { item } else { smallest })
            .ok_or(Error::Empty { operation: "min" })
    }

    /// Returns the largest element, the first one if several compare equal.
    pub fn max(&self) -> Result<T> {
        self.iter()
            .copied()
            .reduce(|largest, item| if item > largest { item } else { largest })
            .ok_or(Error::Empty { operation: "max" })
    }
}

impl<T: Element> PartialEq for GapBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other.iter().copied())
    }
}

impl<T: Element> PartialEq<[T]> for GapBuffer<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.equals(other.iter().copied())
    }
}

impl<T: Element> PartialEq<&[T]> for GapBuffer<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.equals(other.iter().copied())
    }
}

impl<T: Element> PartialEq<Vec<T>> for GapBuffer<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.equals(other.iter().copied())
    }
}

impl<T: Element, const N: usize> PartialEq<[T; N]> for GapBuffer<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.equals(other.iter().copied())
    }
}

impl<T: Element> PartialOrd for GapBuffer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare(other.iter().copied()) {
            // Unordered elements were skipped over
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}
