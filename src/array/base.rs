use std::{iter, mem};

use crate::DynArray;

// offset arithmetic, the only place allowed to reason about physical layout
impl<T> DynArray<T> {
    /// Number of allocated slots, used or not
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub(crate) const fn index_to_offset(&self, index: usize) -> usize {
        index + self.origin
    }

    #[inline]
    pub(crate) const fn offset_to_index(&self, offset: usize) -> usize {
        offset - self.origin
    }

    #[inline]
    pub(crate) fn out_of_buffer(&self, offset: usize) -> bool {
        offset >= self.capacity()
    }

    /// The elements as a contiguous slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[self.origin..self.end]
    }

    /// The elements as a contiguous mutable slice.
    ///
    /// The slice cannot change the size of the array, use
    /// [`DynArray::set`] or the push methods for that.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer[self.origin..self.end]
    }
}

// growth and re-centering
impl<T: Default> DynArray<T> {
    pub(crate) fn default_buffer(capacity: usize) -> Vec<T> {
        iter::repeat_with(T::default).take(capacity).collect()
    }

    /// Double the capacity and move the content to the middle of the new
    /// buffer, slightly left of center.
    pub(crate) fn extend_buffer(&mut self) {
        let capacity = self.capacity();
        let new_capacity = capacity
            .checked_mul(2)
            .unwrap_or_else(|| capacity_overflow());
        let size = self.size();
        let new_origin = capacity - size / 2;
        let new_end = new_origin + size;
        log::trace!(
            "growing buffer {{capacity: {capacity}, new_capacity: {new_capacity}, size: {size}, new_origin: {new_origin}}}"
        );

        let mut buffer = Self::default_buffer(new_capacity);
        for i in 0..size {
            let old_offset = self.index_to_offset(i);
            buffer[new_origin + i] = mem::take(&mut self.buffer[old_offset]);
        }

        self.buffer = buffer;
        self.origin = new_origin;
        self.end = new_end;

        // post-condition: content is strictly inside the buffer on the left
        debug_assert!(self.origin > 0);
        debug_assert!(self.end <= self.capacity());
    }

    /// Grow until the element at `index` has a slot in the buffer, and
    /// return the offset of that slot.
    ///
    /// Panics with "capacity overflow" if the offset does not fit in `usize`.
    pub(crate) fn reserve_index(&mut self, index: usize) -> usize {
        loop {
            // origin moves on every growth
            let offset = index
                .checked_add(self.origin)
                .unwrap_or_else(|| capacity_overflow());
            if !self.out_of_buffer(offset) {
                return offset;
            }
            self.extend_buffer();
        }
    }

    /// Grow until there is at least one free slot before the first element.
    pub(crate) fn reserve_front(&mut self) {
        while self.origin == 0 {
            self.extend_buffer();
        }
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
