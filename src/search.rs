// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::fmt::Write;

use regex::bytes::RegexBuilder;
use tracing::debug;

use crate::{Element, Error, GapBuffer, Result, Slice};

/// Compiled size allowed for a needle's pattern before the window search takes over.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

impl<T: Element> GapBuffer<T> {
    /// Returns `true` if some element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }

    /// Returns the number of elements equal to `item`.
    pub fn count(&self, item: &T) -> usize {
        self.iter().filter(|element| *element == item).count()
    }

    /// Returns `true` if `run` occurs in the buffer.
    ///
    /// For character buffers this is a substring test: runs longer than one character are
    /// searched for over the gap-free content, and the empty run is always found. Other buffers
    /// hold single values only, so a run matches only if it is one element long and that element
    /// is present.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{GapBuffer, Slice};
    ///
    /// let mut text = GapBuffer::<char>::from("hello, world!");
    /// assert!(text.contains_run(&['w', 'o', 'r', 'l', 'd']));
    ///
    /// text.delete_range(Slice::from(5..)).unwrap();
    /// assert!(!text.contains_run(&['w', 'o', 'r', 'l', 'd']));
    /// assert!(text.contains_run(&[]));
    ///
    /// let mut numbers = GapBuffer::from([0, 1, 2]);
    /// assert!(numbers.contains_run(&[1]));
    /// assert!(!numbers.contains_run(&[0, 1]));
    /// ```
    pub fn contains_run(&mut self, run: &[T]) -> bool {
        match run {
            [] => T::KIND.is_text(),
            [item] => self.contains(item),
            _ if T::KIND.is_text() => self.text_matches(run, MatchMode::First) > 0,
            _ => false,
        }
    }

    /// Returns the number of non-overlapping occurrences of `run` in the buffer.
    ///
    /// Character buffers count substrings, with the empty run counted once before every element
    /// and once at the end. Other buffers count `run` only when it is one element long.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let mut text = GapBuffer::<char>::from("hello, hello, helo");
    /// let hello: Vec<char> = "hello".chars().collect();
    ///
    /// assert_eq!(text.count_run(&hello), 2);
    /// assert_eq!(text.count_run(&['h']), 3);
    /// assert_eq!(text.count_run(&[]), 19);
    /// ```
    pub fn count_run(&mut self, run: &[T]) -> usize {
        match run {
            [] if T::KIND.is_text() => self.len() + 1,
            [] => 0,
            [item] => self.count(item),
            _ if T::KIND.is_text() => self.text_matches(run, MatchMode::All),
            _ => 0,
        }
    }

    /// Returns the logical index of the first element equal to `item` within `start..end`.
    ///
    /// Both bounds are optional, may be negative to count from the end, and are clamped to the
    /// buffer. Fails with [Error::Empty] on an empty buffer and [Error::NotFound] when no
    /// element in range matches.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{Error, GapBuffer};
    ///
    /// let buffer = GapBuffer::from([0, 1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(buffer.index_of(&3, None, None), Ok(3));
    /// assert_eq!(buffer.index_of(&3, Some(-3), None), Ok(3));
    /// assert_eq!(buffer.index_of(&3, Some(-2), None), Err(Error::NotFound));
    /// assert_eq!(buffer.index_of(&3, Some(2), Some(-2)), Ok(3));
    /// assert_eq!(
    ///     GapBuffer::<i32>::new().index_of(&0, None, None),
    ///     Err(Error::Empty { operation: "index" })
    /// );
    /// ```
    pub fn index_of(&self, item: &T, start: Option<isize>, end: Option<isize>) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::Empty { operation: "index" });
        }

        Slice::new(start, end, None)
            .indices(self.len())?
            .iter()
            .find(|i| self.storage.slot(self.physical_offset(*i)) == item)
            .ok_or(Error::NotFound)
    }

    /// Runs a substring search for `run` over the contiguous content.
    ///
    /// The needle is compiled into a fresh literal pattern on every call. A needle whose pattern
    /// exceeds `PATTERN_SIZE_LIMIT` fails to compile and is counted by a plain window scan
    /// instead, which gives the same non-overlapping result.
    fn text_matches(&mut self, run: &[T], mode: MatchMode) -> usize {
        let mut needle = vec![];
        T::encode_text(run, &mut needle);

        let mut haystack = vec![];
        self.with_raw(|content| T::encode_text(content, &mut haystack));

        match RegexBuilder::new(&byte_pattern(&needle))
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
        {
            Ok(regex) => match mode {
                MatchMode::First => usize::from(regex.is_match(&haystack)),
                MatchMode::All => regex.find_iter(&haystack).count(),
            },
            Err(e) => {
                debug!(error = %e, "falling back to window search");
                window_matches(&haystack, &needle, mode)
            }
        }
    }
}

#[derive(Clone, Copy)]
enum MatchMode {
    First,
    All,
}

/// Builds a byte-level pattern that matches `needle` literally.
fn byte_pattern(needle: &[u8]) -> String {
    let mut pattern = String::from("(?-u)");
    for byte in needle {
        if byte.is_ascii() {
            pattern.push_str(&regex::escape(&char::from(*byte).to_string()));
        } else {
            let _ = write!(pattern, "\\x{:02X}", byte);
        }
    }
    pattern
}

fn window_matches(haystack: &[u8], needle: &[u8], mode: MatchMode) -> usize {
    let mut count = 0;
    let mut position = 0;
    while position + needle.len() <= haystack.len() {
        if haystack[position..].starts_with(needle) {
            count += 1;
            if let MatchMode::First = mode {
                break;
            }
            position += needle.len();
        } else {
            position += 1;
        }
    }
    count
}
