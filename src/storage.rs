// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::ops::Range;

use tracing::debug;

use crate::Element;

/// Exclusively owned, contiguous slots of a single element type.
///
/// Every slot is initialized, so the store's length is its capacity. Offsets are physical and
/// are not bounds checked beyond what slice indexing does; keeping them valid is the gap
/// tracker's job.
#[derive(Clone)]
pub(crate) struct Storage<T> {
    slots: Vec<T>,
}

impl<T: Element> Storage<T> {
    pub(crate) fn from_slots(slots: Vec<T>) -> Self {
        Self { slots }
    }

    pub(crate) fn into_slots(self) -> Vec<T> {
        self.slots
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn read(&self, offset: usize) -> T {
        self.slots[offset]
    }

    pub(crate) fn slot(&self, offset: usize) -> &T {
        &self.slots[offset]
    }

    pub(crate) fn write(&mut self, offset: usize, value: T) {
        self.slots[offset] = value;
    }

    /// Contiguous view of a physical range. Callers never pass a range spanning the gap.
    pub(crate) fn range(&self, range: Range<usize>) -> &[T] {
        &self.slots[range]
    }

    /// Moves `src` so it starts at `dest`. Overlapping ranges are handled.
    pub(crate) fn copy_within(&mut self, src: Range<usize>, dest: usize) {
        self.slots.copy_within(src, dest);
    }

    /// Grows capacity by `growth_factor` of its current size (at least one slot) per step
    /// until it reaches `target_capacity`. A step that would overflow lands on
    /// `target_capacity` instead.
    pub(crate) fn grow_to(&mut self, target_capacity: usize, growth_factor: f64) {
        let old_capacity = self.capacity();
        let mut capacity = old_capacity;
        while capacity < target_capacity {
            let increment = (capacity as f64 * growth_factor) as usize;
            capacity = capacity
                .checked_add(increment.max(1))
                .unwrap_or(target_capacity);
        }

        if capacity != old_capacity {
            debug!(old_capacity, capacity, target_capacity, "growing gap buffer storage");
            self.slots.resize(capacity, T::default());
        }
    }

    /// The underlying slots, for scoped raw access.
    pub(crate) fn slots(&self) -> &Vec<T> {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut Vec<T> {
        &mut self.slots
    }
}
