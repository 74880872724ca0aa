// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{iter, ops::Index, slice};

use tracing::{debug, trace};

use crate::{storage::Storage, ByteChar, Element, ElementKind, Error, GapConfig, Result, Value};

/// Iterator over the elements of a [GapBuffer] in logical order.
pub type Iter<'a, T> = iter::Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

/// A contiguous, growable gap buffer holding elements of one primitive type `T`.
///
/// The buffer's storage is split into the content before the gap, the gap itself and the
/// content after the gap. Edits move the gap to where they happen, so a run of edits at the same
/// place costs only as much as the distance the gap travels to get there.
///
/// # Examples
/// ```
/// use bad_gap_seq::{GapBuffer, Slice};
///
/// let mut gap_buffer = GapBuffer::from([0, 1, 2, 3]);
///
/// gap_buffer.insert(2, 9);
/// gap_buffer.insert(3, 8);
/// gap_buffer.delete(0).unwrap();
///
/// let collected: Vec<_> = gap_buffer.iter().collect();
/// assert_eq!(
///     collected,
///     [&1, &9, &8, &2, &3]
/// );
///
/// gap_buffer.delete_range(Slice::from(..2)).unwrap();
/// assert_eq!(gap_buffer, [8, 2, 3]);
/// ```
///
/// # Layout
///
/// Physically the storage is laid out as:
/// ```text
///  0          gap_start      gap_end       content_end     capacity
///  |  content   |     gap      |   content    |   reserve     |
/// ```
///
/// A logical index `i` lives at physical offset `i` when it is before the gap and at
/// `i + gap_len` otherwise. Reads translate indices straight to offsets and never move the gap.
///
/// # Indexing
///
/// [get](GapBuffer::get) and friends take `isize` indices where negative values count from the
/// end of the buffer. `GapBuffer` also implements [Index] for `usize` indices, which panics when
/// out of bounds.
///
/// ### Examples
/// ```
/// use bad_gap_seq::GapBuffer;
///
/// let mut gap_buffer = GapBuffer::from([0, 1, 2, 3]);
/// assert_eq!(gap_buffer[0], 0);
/// gap_buffer.insert(0, 5);
/// assert_eq!(gap_buffer[0], 5);
/// assert_eq!(gap_buffer.get(-1), Ok(3));
/// ```
#[derive(Clone)]
pub struct GapBuffer<T> {
    pub(crate) storage: Storage<T>,
    pub(crate) gap_start: usize,
    pub(crate) gap_end: usize,
    pub(crate) content_end: usize,
    pub(crate) config: GapConfig,
    relocation_copies: usize,
}

impl<T: Element> GapBuffer<T> {
    /// Creates a new empty GapBuffer with the default [GapConfig].
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let buffer = GapBuffer::<i32>::new();
    ///
    /// assert_eq!(buffer.len(), 0);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(GapConfig::default())
    }

    /// Creates a new empty GapBuffer using `config`.
    pub fn with_config(config: GapConfig) -> Self {
        Self::from_vec_with_config(vec![], config)
    }

    /// Creates a new empty GapBuffer whose gap is restored to at least `min_gap_size` elements
    /// after every resize.
    pub fn with_min_gap_size(min_gap_size: usize) -> Self {
        Self::with_config(GapConfig::default().with_min_gap_size(min_gap_size))
    }

    /// Creates a GapBuffer holding `content`, with the gap placed before it.
    pub fn from_vec_with_config(content: Vec<T>, config: GapConfig) -> Self {
        let gap_size = config.min_gap_size;
        let content_end = gap_size + content.len();

        let mut slots = Vec::with_capacity(content_end);
        slots.resize(gap_size, T::default());
        slots.extend(content);

        Self {
            storage: Storage::from_slots(slots),
            gap_start: 0,
            gap_end: gap_size,
            content_end,
            config,
            relocation_copies: 0,
        }
    }

    /// Creates a GapBuffer from dynamically typed values, checking each against `T`.
    ///
    /// Fails with [Error::TypeMismatch] on the first value that is not an instance of `T`, in
    /// which case no buffer is built.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{Error, ElementKind, GapBuffer, GapConfig, Value};
    ///
    /// let buffer = GapBuffer::<u8>::try_from_values(
    ///     [Value::Int(1), Value::Int(2)],
    ///     GapConfig::default(),
    /// ).unwrap();
    /// assert_eq!(buffer, [1, 2]);
    ///
    /// let result = GapBuffer::<u8>::try_from_values(
    ///     [Value::Int(1), Value::Float(2.0)],
    ///     GapConfig::default(),
    /// );
    /// assert_eq!(
    ///     result.unwrap_err(),
    ///     Error::TypeMismatch { expected: ElementKind::U8 }
    /// );
    /// ```
    pub fn try_from_values<I>(values: I, config: GapConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let content = values
            .into_iter()
            .map(Self::check_value)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_vec_with_config(content, config))
    }

    /// Converts a dynamic value into `T` or reports which type was expected.
    pub(crate) fn check_value(value: Value) -> Result<T> {
        T::from_value(value).ok_or(Error::TypeMismatch { expected: T::KIND })
    }

    /// Returns the number of elements currently stored in the gap buffer.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let buffer = GapBuffer::from([0, 1, 2, 3]);
    ///
    /// assert_eq!(
    ///     buffer.len(),
    ///     4
    /// );
    /// ```
    pub fn len(&self) -> usize {
        self.content_end - self.gap_len()
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element layout this buffer was declared with.
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// The sizing configuration this buffer was built with.
    pub fn config(&self) -> GapConfig {
        self.config
    }

    /// Number of element slots currently allocated, including the gap and unused reserve.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Total number of element copies performed by gap relocation over the buffer's lifetime.
    ///
    /// Moving an empty gap is a pointer update and never adds to this count.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::<i32>::with_min_gap_size(4);
    /// buffer.extend([0, 1, 2, 3, 4]);
    /// let before = buffer.relocation_copies();
    ///
    /// // The gap trails the content after extend, so reaching index 2 passes over 3 elements.
    /// buffer.insert(2, 9);
    /// assert_eq!(buffer.relocation_copies() - before, 3);
    /// ```
    pub fn relocation_copies(&self) -> usize {
        self.relocation_copies
    }

    /// Returns an iterator over the buffer in logical order, skipping over the gap.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// buffer.insert(1, 5);
    ///
    /// let mut iter = buffer.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&5));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        self.pregap_iter().chain(self.postgap_iter())
    }

    fn pregap_iter(&self) -> slice::Iter<'_, T> {
        self.storage.range(0..self.gap_start).iter()
    }

    fn postgap_iter(&self) -> slice::Iter<'_, T> {
        self.storage.range(self.gap_end..self.content_end).iter()
    }

    /// Returns a reference to the element at logical `index`, or `None` if out of bounds.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3]);
    /// buffer.insert(2, 7);
    ///
    /// assert_eq!(buffer.get_ref(3), Some(&2));
    /// assert_eq!(buffer.get_ref(5), None);
    /// ```
    pub fn get_ref(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            None
        } else {
            Some(self.storage.slot(self.physical_offset(index)))
        }
    }
}

impl<T: Element> GapBuffer<T> {
    pub(crate) fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Translates a logical index (already known to be in bounds) into a storage offset.
    pub(crate) fn physical_offset(&self, index: usize) -> usize {
        if index < self.gap_start {
            index
        } else {
            index + self.gap_len()
        }
    }

    /// Slides the gap so that it starts at logical `target`.
    ///
    /// An empty gap is moved by updating its bounds only. A non-empty gap carries the elements it
    /// passes over to its other side, one copy per element.
    pub(crate) fn move_gap(&mut self, target: usize) {
        if self.is_empty() {
            return;
        }

        debug_assert!(
            target <= self.len(),
            "Expected gap target ({}) to be within the bounds of GapBuffer (len: {})",
            target,
            self.len()
        );

        if self.gap_len() == 0 {
            self.gap_start = target;
            self.gap_end = target;
            return;
        }

        if target < self.gap_start {
            // Move gap towards the start of the buffer
            let distance = self.gap_start - target;
            self.storage
                .copy_within(target..self.gap_start, self.gap_end - distance);
            self.gap_start -= distance;
            self.gap_end -= distance;
            self.relocation_copies += distance;
            trace!(target, distance, "moved gap left");
        } else if target > self.gap_start {
            // Move gap towards the end of buffer
            let distance = target - self.gap_start;
            self.storage
                .copy_within(self.gap_end..self.gap_end + distance, self.gap_start);
            self.gap_start += distance;
            self.gap_end += distance;
            self.relocation_copies += distance;
            trace!(target, distance, "moved gap right");
        }
    }

    /// Makes sure the gap can absorb at least `min_required` elements, leaving an extra
    /// `min_gap_size` on top when it has to grow.
    pub(crate) fn resize_gap(&mut self, min_required: usize) {
        let gap_len = self.gap_len();
        if gap_len >= min_required {
            return;
        }

        let delta = min_required + self.config.min_gap_size - gap_len;
        self.storage
            .grow_to(self.storage.capacity() + delta, self.config.growth_factor);

        self.storage
            .copy_within(self.gap_end..self.content_end, self.gap_end + delta);
        self.gap_end += delta;
        self.content_end += delta;

        debug!(
            min_required,
            delta,
            gap_len = self.gap_len(),
            capacity = self.storage.capacity(),
            "resized gap"
        );
    }

    /// Folds `count` elements following the gap into it.
    pub(crate) fn absorb_after_gap(&mut self, count: usize) {
        self.gap_end += count;
    }

    /// Writes `value` into the first slot of the gap, shrinking the gap by one.
    pub(crate) fn fill_gap_front(&mut self, value: T) {
        self.storage.write(self.gap_start, value);
        self.gap_start += 1;
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(self.gap_start <= self.gap_end);
        assert!(self.gap_end <= self.content_end);
        assert!(self.content_end <= self.storage.capacity());
    }
}

impl<T: Element> Default for GapBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Index<usize> for GapBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get_ref(index)
            .expect("Out of bounds index provided to GapBuffer")
    }
}

impl<T: Element> From<Vec<T>> for GapBuffer<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_vec_with_config(value, GapConfig::default())
    }
}

impl<T: Element> From<&[T]> for GapBuffer<T> {
    fn from(value: &[T]) -> Self {
        Self::from(Vec::from(value))
    }
}

impl<T: Element, const N: usize> From<[T; N]> for GapBuffer<T> {
    fn from(value: [T; N]) -> Self {
        Self::from(Vec::from(value))
    }
}

impl From<&str> for GapBuffer<char> {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl From<&str> for GapBuffer<ByteChar> {
    fn from(value: &str) -> Self {
        value.bytes().map(ByteChar).collect()
    }
}

impl<T: Element> FromIterator<T> for GapBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Element> Extend<T> for GapBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        GapBuffer::extend(self, iter);
    }
}

impl<'a, T: Element> IntoIterator for &'a GapBuffer<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> IntoIterator for GapBuffer<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Gap at len() leaves all content in front of it, in order
        let len = self.len();
        self.move_gap(len);

        let mut slots = self.storage.into_slots();
        slots.truncate(len);
        slots.into_iter()
    }
}
