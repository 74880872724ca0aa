// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use crate::{Element, Error, GapBuffer, Result, Slice, SliceIndices, Value};

impl<T: Element> GapBuffer<T> {
    /// Resolves a possibly negative index into a logical index within `0..len`.
    fn resolve_index(&self, index: isize) -> Result<usize> {
        let len = self.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };

        if resolved < 0 || resolved >= len as isize {
            Err(Error::IndexOutOfRange { index, len })
        } else {
            Ok(resolved as usize)
        }
    }

    /// Returns the element at `index`. Negative indices count from the end.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{Error, GapBuffer};
    ///
    /// let buffer = GapBuffer::from([0, 1, 2]);
    ///
    /// assert_eq!(buffer.get(0), Ok(0));
    /// assert_eq!(buffer.get(-1), Ok(2));
    /// assert_eq!(
    ///     buffer.get(3),
    ///     Err(Error::IndexOutOfRange { index: 3, len: 3 })
    /// );
    /// ```
    pub fn get(&self, index: isize) -> Result<T> {
        let index = self.resolve_index(index)?;
        Ok(self.storage.read(self.physical_offset(index)))
    }

    /// Replaces the element at `index`. Negative indices count from the end.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// buffer.set(-1, 5).unwrap();
    ///
    /// assert_eq!(buffer, [0, 1, 5]);
    /// assert!(buffer.set(-4, 5).is_err());
    /// ```
    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        let index = self.resolve_index(index)?;
        let offset = self.physical_offset(index);
        self.storage.write(offset, value);

        Ok(())
    }

    /// Type checked version of [set](GapBuffer::set).
    pub fn set_value(&mut self, index: isize, value: Value) -> Result<()> {
        let value = Self::check_value(value)?;
        self.set(index, value)
    }

    /// Removes the element at `index`. Negative indices count from the end.
    pub fn delete(&mut self, index: isize) -> Result<()> {
        let index = self.resolve_index(index)?;
        self.move_gap(index);
        self.absorb_after_gap(1);

        Ok(())
    }

    /// Returns a new buffer holding the elements selected by `slice`, with this buffer's
    /// configuration.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{GapBuffer, Slice};
    ///
    /// let buffer = GapBuffer::from([0, 1, 2, 3, 4]);
    ///
    /// assert_eq!(buffer.get_range(Slice::from(1..3)).unwrap(), [1, 2]);
    /// assert_eq!(buffer.get_range(Slice::full().with_step(2)).unwrap(), [0, 2, 4]);
    /// assert_eq!(buffer.get_range(Slice::full().with_step(-1)).unwrap(), [4, 3, 2, 1, 0]);
    /// ```
    pub fn get_range(&self, slice: impl Into<Slice>) -> Result<GapBuffer<T>> {
        let indices = slice.into().indices(self.len())?;
        let content = indices
            .iter()
            .map(|i| self.storage.read(self.physical_offset(i)))
            .collect();

        Ok(GapBuffer::from_vec_with_config(content, self.config))
    }

    /// Replaces the elements selected by `slice` with `values`.
    ///
    /// A slice with step 1 may be replaced by any number of values: the gap is moved to the
    /// slice, grown to fit the new values, and the old elements are folded into it. Any other
    /// step requires exactly one value per selected index and fails with
    /// [Error::LengthMismatch] otherwise, leaving the buffer unchanged.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{Error, GapBuffer, Slice};
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3, 4]);
    /// buffer.set_range(Slice::from(1..3), [9, 9, 9, 9]).unwrap();
    /// assert_eq!(buffer, [0, 9, 9, 9, 9, 3, 4]);
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3, 4]);
    /// buffer.set_range(Slice::full().with_step(2), [9, 9, 9]).unwrap();
    /// assert_eq!(buffer, [9, 1, 9, 3, 9]);
    ///
    /// assert_eq!(
    ///     buffer.set_range(Slice::full().with_step(2), [7]),
    ///     Err(Error::LengthMismatch { expected: 3, found: 1 })
    /// );
    /// assert_eq!(buffer, [9, 1, 9, 3, 9]);
    /// ```
    pub fn set_range<I>(&mut self, slice: impl Into<Slice>, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let indices = slice.into().indices(self.len())?;
        let values: Vec<T> = values.into_iter().collect();

        if indices.is_contiguous() {
            let (start, stop) = Self::contiguous_bounds(&indices);
            self.replace_run(start, stop, values);
            return Ok(());
        }

        if values.len() != indices.len {
            return Err(Error::LengthMismatch {
                expected: indices.len,
                found: values.len(),
            });
        }

        for (index, value) in indices.iter().zip(values) {
            let offset = self.physical_offset(index);
            self.storage.write(offset, value);
        }

        Ok(())
    }

    /// Type checked version of [set_range](GapBuffer::set_range). Every value is checked before
    /// any element is replaced.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{Error, ElementKind, GapBuffer, Value};
    ///
    /// let mut buffer = GapBuffer::<u16>::from([0, 1, 2]);
    /// buffer.set_range_values(1.., [Value::Int(7), Value::Int(8), Value::Int(9)]).unwrap();
    /// assert_eq!(buffer, [0, 7, 8, 9]);
    ///
    /// assert_eq!(
    ///     buffer.set_range_values(.., [Value::Int(1), Value::Int(-1)]),
    ///     Err(Error::TypeMismatch { expected: ElementKind::U16 })
    /// );
    /// assert_eq!(buffer, [0, 7, 8, 9]);
    /// ```
    pub fn set_range_values<I>(&mut self, slice: impl Into<Slice>, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Value>,
    {
        let values = values
            .into_iter()
            .map(Self::check_value)
            .collect::<Result<Vec<_>>>()?;

        self.set_range(slice, values)
    }

    /// Removes the elements selected by `slice`.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{GapBuffer, Slice};
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2, 3, 4, 5]);
    /// buffer.delete_range(Slice::from(1..3)).unwrap();
    /// assert_eq!(buffer, [0, 3, 4, 5]);
    ///
    /// buffer.delete_range(Slice::full().with_step(-2)).unwrap();
    /// assert_eq!(buffer, [0, 4]);
    /// ```
    pub fn delete_range(&mut self, slice: impl Into<Slice>) -> Result<()> {
        let indices = slice.into().indices(self.len())?;

        if indices.is_contiguous() {
            let (start, stop) = Self::contiguous_bounds(&indices);
            if stop > start {
                self.move_gap(start);
                self.absorb_after_gap(stop - start);
            }
            return Ok(());
        }

        let mut targets: Vec<usize> = indices.iter().collect();
        targets.sort_unstable();

        // Each deletion shifts every later index down by one
        for (removed, index) in targets.into_iter().enumerate() {
            self.move_gap(index - removed);
            self.absorb_after_gap(1);
        }

        Ok(())
    }

    fn contiguous_bounds(indices: &SliceIndices) -> (usize, usize) {
        let start = indices.start as usize;
        let stop = (indices.stop as usize).max(start);
        (start, stop)
    }

    /// Replaces the logical run `start..stop` with `values` through the gap.
    fn replace_run(&mut self, start: usize, stop: usize, values: Vec<T>) {
        self.move_gap(start);
        self.resize_gap(values.len());
        self.absorb_after_gap(stop - start);

        for value in values {
            self.fill_gap_front(value);
        }
    }

    /// Inserts `item` before `index`. Negative indices count from the end and indices beyond
    /// either end are clamped to it.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// buffer.insert(0, 9);
    /// buffer.insert(-1, 8);
    /// buffer.insert(100, 7);
    ///
    /// assert_eq!(buffer, [9, 0, 1, 8, 2, 7]);
    /// ```
    pub fn insert(&mut self, index: isize, item: T) {
        let len = self.len() as isize;
        let clamped = if index < 0 {
            (index + len).max(0)
        } else {
            index.min(len)
        };

        let index = clamped as usize;
        self.replace_run(index, index, vec![item]);
    }

    /// Type checked version of [insert](GapBuffer::insert).
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{Error, ElementKind, GapBuffer, Value};
    ///
    /// let mut buffer = GapBuffer::<i32>::new();
    /// buffer.insert_value(0, Value::Int(4)).unwrap();
    ///
    /// assert_eq!(
    ///     buffer.insert_value(0, Value::Char('a')),
    ///     Err(Error::TypeMismatch { expected: ElementKind::I32 })
    /// );
    /// assert_eq!(buffer, [4]);
    /// ```
    pub fn insert_value(&mut self, index: isize, value: Value) -> Result<()> {
        let value = Self::check_value(value)?;
        self.insert(index, value);

        Ok(())
    }

    /// Adds `item` to the end of the buffer.
    pub fn append(&mut self, item: T) {
        self.insert(self.len() as isize, item);
    }

    /// Type checked version of [append](GapBuffer::append).
    pub fn append_value(&mut self, value: Value) -> Result<()> {
        let value = Self::check_value(value)?;
        self.append(value);

        Ok(())
    }

    /// Adds every item of `values` to the end of the buffer.
    ///
    /// The content is collapsed into one contiguous run, the items are appended to it directly
    /// and a fresh gap is left after them.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1]);
    /// buffer.extend([2, 3]);
    /// buffer.extend(std::iter::empty());
    ///
    /// assert_eq!(buffer, [0, 1, 2, 3]);
    /// ```
    pub fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.raw().extend(values);
    }

    /// Type checked version of [extend](GapBuffer::extend). Nothing is added unless every value
    /// matches the buffer's element type.
    pub fn extend_values<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Value>,
    {
        let values = values
            .into_iter()
            .map(Self::check_value)
            .collect::<Result<Vec<_>>>()?;
        self.extend(values);

        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{Error, GapBuffer};
    ///
    /// let mut buffer = GapBuffer::from([0, 1]);
    ///
    /// assert_eq!(buffer.pop(), Ok(1));
    /// assert_eq!(buffer.pop(), Ok(0));
    /// assert_eq!(buffer.pop(), Err(Error::Empty { operation: "pop" }));
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        self.pop_at(-1)
    }

    /// Removes and returns the element at `index`. Negative indices count from the end.
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty { operation: "pop" });
        }

        let item = self.get(index)?;
        self.delete(index)?;

        Ok(item)
    }

    /// Removes the first element equal to `item`.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::{Error, GapBuffer};
    ///
    /// let mut buffer = GapBuffer::from([0, 3, 1, 3]);
    /// buffer.remove(&3).unwrap();
    ///
    /// assert_eq!(buffer, [0, 1, 3]);
    /// assert_eq!(buffer.remove(&9), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<()> {
        if self.is_empty() {
            return Err(Error::Empty { operation: "remove" });
        }

        let index = self.index_of(item, None, None)?;
        self.delete(index as isize)
    }

    /// Reverses the buffer in place.
    pub fn reverse(&mut self) {
        let len = self.len();
        for i in 0..len / 2 {
            let left = self.physical_offset(i);
            let right = self.physical_offset(len - 1 - i);

            let left_item = self.storage.read(left);
            let right_item = self.storage.read(right);
            self.storage.write(left, right_item);
            self.storage.write(right, left_item);
        }
    }

    /// Removes every element, keeping the buffer's configuration.
    pub fn clear(&mut self) {
        *self = Self::with_config(self.config);
    }

    /// Returns a new buffer holding this buffer's elements followed by `other`'s.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let buffer = GapBuffer::from([0, 1]);
    /// let joined = buffer.concat(buffer.iter().copied());
    ///
    /// assert_eq!(joined, [0, 1, 0, 1]);
    /// assert_eq!(buffer, [0, 1]);
    /// ```
    pub fn concat<I>(&self, other: I) -> GapBuffer<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut joined =
            GapBuffer::from_vec_with_config(self.iter().copied().collect(), self.config);
        joined.extend(other);
        joined
    }

    /// Appends `other`'s elements to this buffer.
    pub fn concat_in_place<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(other);
    }

    /// Returns a new buffer holding this buffer's elements `count` times over.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let buffer = GapBuffer::from([1, 2]);
    ///
    /// assert_eq!(buffer.repeat(3), [1, 2, 1, 2, 1, 2]);
    /// assert!(buffer.repeat(0).is_empty());
    /// ```
    pub fn repeat(&self, count: usize) -> GapBuffer<T> {
        let mut repeated = GapBuffer::with_config(self.config);
        for _ in 0..count {
            repeated.extend(self.iter().copied());
        }
        repeated
    }

    /// Repeats this buffer's elements `count` times over in place. A count of zero clears it.
    pub fn repeat_in_place(&mut self, count: usize) {
        if count == 0 {
            self.clear();
            return;
        }

        self.with_raw(|content| {
            let len = content.len();
            content.reserve(len * (count - 1));
            for _ in 1..count {
                content.extend_from_within(..len);
            }
        });
    }
}
