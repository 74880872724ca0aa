// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::{Error, Result};

/// A `start:stop:step` selection of logical indices.
///
/// Missing bounds default to the whole sequence in the direction of `step`, negative bounds
/// count from the end, and bounds beyond either end are clamped. `step` defaults to 1 and may be
/// negative, but never zero.
///
/// ### Examples
/// ```
/// use bad_gap_seq::Slice;
///
/// let every_other = Slice::full().with_step(2);
/// let indices: Vec<_> = every_other.indices(5).unwrap().iter().collect();
/// assert_eq!(indices, [0, 2, 4]);
///
/// let tail = Slice::from(-2..);
/// let indices: Vec<_> = tail.indices(5).unwrap().iter().collect();
/// assert_eq!(indices, [3, 4]);
///
/// let backwards = Slice::new(None, None, Some(-1));
/// let indices: Vec<_> = backwards.indices(3).unwrap().iter().collect();
/// assert_eq!(indices, [2, 1, 0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slice {
    /// First index, inclusive.
    pub start: Option<isize>,
    /// Last index, exclusive.
    pub stop: Option<isize>,
    /// Distance between selected indices.
    pub step: Option<isize>,
}

/// A [Slice] resolved against a concrete length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceIndices {
    /// First selected index. May be `-1` for an empty backwards selection.
    pub start: isize,
    /// Clamped stop bound.
    pub stop: isize,
    /// Non-zero step.
    pub step: isize,
    /// Number of selected indices.
    pub len: usize,
}

impl Slice {
    /// Creates a slice from optional bounds and step.
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Selects every index.
    pub fn full() -> Self {
        Self::default()
    }

    /// Returns a copy of this slice with a different step.
    pub fn with_step(&self, step: isize) -> Self {
        let mut new = *self;
        new.step = Some(step);
        new
    }

    /// Resolves the slice against a sequence of `len` elements.
    ///
    /// Fails with [Error::ZeroStep] if the step is zero.
    pub fn indices(&self, len: usize) -> Result<SliceIndices> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(Error::ZeroStep);
        }

        let len = len as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self
            .start
            .map(clamp)
            .unwrap_or(if step < 0 { upper } else { lower });
        let stop = self
            .stop
            .map(clamp)
            .unwrap_or(if step < 0 { lower } else { upper });

        let span = if step < 0 { start - stop } else { stop - start };
        let selected = if span > 0 {
            (span - 1) as usize / step.unsigned_abs() + 1
        } else {
            0
        };

        Ok(SliceIndices {
            start,
            stop,
            step,
            len: selected,
        })
    }
}

impl SliceIndices {
    /// Whether the selection is a plain forward run that can be edited as one block.
    pub fn is_contiguous(&self) -> bool {
        self.step == 1
    }

    /// The selected indices, in slice order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator {
        let Self { start, step, .. } = *self;
        (0..self.len).map(move |i| (start + i as isize * step) as usize)
    }
}

impl From<Range<isize>> for Slice {
    fn from(value: Range<isize>) -> Self {
        Self::new(Some(value.start), Some(value.end), None)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(value: RangeFrom<isize>) -> Self {
        Self::new(Some(value.start), None, None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(value: RangeTo<isize>) -> Self {
        Self::new(None, Some(value.end), None)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}
