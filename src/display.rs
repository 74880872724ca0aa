// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::fmt::{self, Debug, Display, Write};

use crate::{Element, GapBuffer, Value};

impl<T: Element> GapBuffer<T> {
    fn text(&self) -> String {
        self.iter()
            .filter_map(|item| match item.into_value() {
                Value::Char(c) => Some(c),
                Value::ByteChar(byte) => Some(char::from(byte)),
                _ => None,
            })
            .collect()
    }
}

/// Character buffers display as their text, every other buffer as a list of its elements.
///
/// ### Examples
/// ```
/// use bad_gap_seq::GapBuffer;
///
/// let mut text = GapBuffer::<char>::from("hllo");
/// text.insert(1, 'e');
/// assert_eq!(text.to_string(), "hello");
///
/// let numbers = GapBuffer::from([1, 2, 3]);
/// assert_eq!(numbers.to_string(), "[1, 2, 3]");
/// ```
impl<T: Element> Display for GapBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if T::KIND.is_text() {
            f.write_str(&self.text())
        } else {
            f.debug_list().entries(self.iter()).finish()
        }
    }
}

/// Shows the element typecode followed by the content, if any.
///
/// ### Examples
/// ```
/// use bad_gap_seq::GapBuffer;
///
/// assert_eq!(format!("{:?}", GapBuffer::from([0i32, 1])), "GapBuffer('i', [0, 1])");
/// assert_eq!(format!("{:?}", GapBuffer::<char>::from("hi")), "GapBuffer('u', \"hi\")");
/// assert_eq!(format!("{:?}", GapBuffer::<f64>::new()), "GapBuffer('d')");
/// ```
impl<T: Element> Debug for GapBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GapBuffer({:?}", T::KIND.typecode())?;
        if !self.is_empty() {
            f.write_str(", ")?;
            if T::KIND.is_text() {
                write!(f, "{:?}", self.text())?;
            } else {
                f.debug_list().entries(self.iter()).finish()?;
            }
        }
        f.write_char(')')
    }
}
