// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use crate::ElementKind;

/// Result type returned by every fallible [GapBuffer](crate::GapBuffer) operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure outcomes of [GapBuffer](crate::GapBuffer) operations.
///
/// Every error is reported before the buffer is mutated, so a failed operation always leaves
/// the buffer exactly as it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value was not an instance of the buffer's element type.
    #[error("GapBuffer items must be of type {expected}")]
    TypeMismatch {
        /// The element type declared by the buffer.
        expected: ElementKind,
    },

    /// An index fell outside of `-len..len`.
    #[error("GapBuffer index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index as given by the caller.
        index: isize,
        /// Length of the buffer at the time of the call.
        len: usize,
    },

    /// An extended slice was assigned a sequence of the wrong length.
    #[error("attempt to assign sequence of size {found} to extended slice of size {expected}")]
    LengthMismatch {
        /// Number of indices addressed by the slice.
        expected: usize,
        /// Number of values provided.
        found: usize,
    },

    /// The operation needs at least one element.
    #[error("{operation} from empty GapBuffer")]
    Empty {
        /// Name of the failed operation.
        operation: &'static str,
    },

    /// The requested value is not in the buffer.
    #[error("value not found in GapBuffer")]
    NotFound,

    /// A slice was given a step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
}
