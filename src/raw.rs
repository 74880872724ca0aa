// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::{Element, GapBuffer};

/// Scoped access to a [GapBuffer]'s content as one contiguous, gap-free `Vec`.
///
/// Created by [GapBuffer::raw]. While the guard is alive the vector holds exactly the buffer's
/// elements in logical order and may be read or changed freely. When the guard is dropped, on
/// every exit path including unwinding, a fresh gap of `min_gap_size` elements is appended and
/// the buffer takes the vector's content as its own.
pub struct RawContent<'a, T: Element> {
    buffer: &'a mut GapBuffer<T>,
}

impl<T: Element> GapBuffer<T> {
    /// Collapses the gap to the end of the content and exposes the content as a contiguous
    /// `Vec`.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::from([0, 1, 2]);
    /// buffer.insert(1, 7);
    ///
    /// {
    ///     let mut raw = buffer.raw();
    ///     assert_eq!(raw.as_slice(), &[0, 7, 1, 2]);
    ///     raw.push(3);
    ///     raw.remove(0);
    /// }
    ///
    /// assert_eq!(buffer, [7, 1, 2, 3]);
    /// ```
    pub fn raw(&mut self) -> RawContent<'_, T> {
        let len = self.len();
        self.move_gap(len);
        self.storage.slots_mut().truncate(len);

        debug!(len, "collapsed gap for raw access");

        RawContent { buffer: self }
    }

    /// Runs `f` against the buffer's content as a contiguous `Vec`, restoring the gap afterwards.
    ///
    /// ### Examples
    /// ```
    /// use bad_gap_seq::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::<char>::from("hello");
    /// let upper = buffer.with_raw(|content| {
    ///     content.iter().map(|c| c.to_ascii_uppercase()).collect::<String>()
    /// });
    ///
    /// assert_eq!(upper, "HELLO");
    /// assert_eq!(buffer.len(), 5);
    /// ```
    pub fn with_raw<R>(&mut self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut raw = self.raw();
        f(&mut raw)
    }
}

impl<T: Element> Deref for RawContent<'_, T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        self.buffer.storage.slots()
    }
}

impl<T: Element> DerefMut for RawContent<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.buffer.storage.slots_mut()
    }
}

impl<T: Element> Drop for RawContent<'_, T> {
    fn drop(&mut self) {
        let gap_size = self.buffer.config.min_gap_size;
        let slots = self.buffer.storage.slots_mut();
        let len = slots.len();
        slots.resize(len + gap_size, T::default());

        self.buffer.gap_start = len;
        self.buffer.gap_end = len + gap_size;
        self.buffer.content_end = len + gap_size;

        debug!(len, gap_size, "restored gap after raw access");
    }
}
