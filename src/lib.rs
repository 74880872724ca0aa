// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

//! A typed gap buffer sequence for the BadRed text editor.
//!
//! [GapBuffer] stores a sequence of one primitive element type in a single contiguous
//! allocation split around a movable gap. Edits clustered around the same position only pay
//! for the distance the gap travels, not for the length of the whole sequence, which makes the
//! buffer a good fit for text editing and incremental parsing.
//!
//! Every public operation works on logical indices. Negative indices count from the end of the
//! sequence and slices follow the usual `start:stop:step` rules, see [Slice].
//!
//! ```
//! use bad_gap_seq::{GapBuffer, Slice};
//!
//! let mut buffer = GapBuffer::from([0, 1, 2, 3, 4]);
//! buffer.insert(0, -1);
//! buffer.set_range(Slice::from(-2..), [9, 9, 9]).unwrap();
//!
//! assert_eq!(buffer, [-1, 0, 1, 2, 9, 9, 9]);
//! assert_eq!(buffer.get(-1), Ok(9));
//! ```

#![warn(missing_docs)]

pub use config::*;
pub use element::*;
pub use error::*;
pub use gap_buffer::*;
pub use raw::*;
pub use slice::*;

mod compare;
mod config;
mod display;
mod element;
mod error;
mod gap_buffer;
mod raw;
mod search;
mod sequence;
mod slice;
mod storage;
