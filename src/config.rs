// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

/// Sizing configuration for a [GapBuffer](crate::GapBuffer).
///
/// ### Examples
/// ```
/// use bad_gap_seq::{GapBuffer, GapConfig};
///
/// let config = GapConfig::default().with_min_gap_size(3);
/// let buffer = GapBuffer::<i32>::with_config(config);
///
/// assert_eq!(buffer.config().min_gap_size, 3);
/// assert_eq!(buffer.config().growth_factor, 1.0 / 16.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GapConfig {
    /// Gap capacity restored after every gap resize and every scoped raw access.
    pub min_gap_size: usize,
    /// Fraction of the current capacity added on each step of backing storage growth.
    pub growth_factor: f64,
}

impl GapConfig {
    /// Minimum gap size used when none is given.
    pub const DEFAULT_MIN_GAP_SIZE: usize = 10;
    /// Storage growth factor used when none is given.
    pub const DEFAULT_GROWTH_FACTOR: f64 = 1.0 / 16.0;

    /// Returns a copy of this configuration with a different minimum gap size.
    pub fn with_min_gap_size(&self, min_gap_size: usize) -> Self {
        let mut new = *self;
        new.min_gap_size = min_gap_size;
        new
    }

    /// Returns a copy of this configuration with a different growth factor.
    ///
    /// Non-positive or non-finite factors fall back to the default, since storage must always
    /// make progress when it grows.
    pub fn with_growth_factor(&self, growth_factor: f64) -> Self {
        let mut new = *self;
        new.growth_factor = if growth_factor.is_finite() && growth_factor > 0.0 {
            growth_factor
        } else {
            Self::DEFAULT_GROWTH_FACTOR
        };
        new
    }
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            min_gap_size: Self::DEFAULT_MIN_GAP_SIZE,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}
