use std::fmt::{self, Debug, Display};

use itertools::Itertools;

use crate::RealScalar;

mod base;
mod conversions;
mod deque;
mod functional;
mod impl_ops;
mod indexing;
mod stats;

/// Number of slots allocated by [`DynArray::new`]
pub const INITIAL_CAPACITY: usize = 10;

/// A growable, double-ended array.
///
/// Elements live in a single buffer with free slots on both sides of the
/// content, so [`DynArray::push_front`] and [`DynArray::push_back`] are both
/// amortized O(1). When either side runs out of room, the buffer doubles and
/// the content is re-centered (it never wraps around).
///
/// Reading past the end yields `T::default()`, and writing past the end
/// fills the gap with `T::default()`:
///
/// ```
/// use rust_dynarray::DynArray;
///
/// let mut a = DynArray::new();
/// a.set(5, 1.5);
/// assert_eq!(a.size(), 6);
/// assert_eq!(a.get(2), 0.0);
/// assert_eq!(a.get(100), 0.0);
/// assert_eq!(a.size(), 6);
/// ```
#[derive(Clone)]
pub struct DynArray<T> {
    /// all slots, including the unused head and tail regions
    buffer: Vec<T>,
    /// offset of logical index 0
    origin: usize,
    /// offset one past the last element
    end: usize,
}

/// Snapshot of the internal layout of a [`DynArray`], for debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// allocated slots
    pub capacity: usize,
    /// offset of the first element
    pub origin: usize,
    /// offset one past the last element
    pub end: usize,
    /// number of elements
    pub size: usize,
}

impl<T: Default> DynArray<T> {
    /// Create an empty array with [`INITIAL_CAPACITY`] slots, centered so
    /// both ends have room to grow.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty array with a custom number of slots (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let origin = capacity / 2;
        Self {
            buffer: Self::default_buffer(capacity),
            origin,
            end: origin,
        }
    }
}

impl<T> DynArray<T> {
    /// Current position of the content in the buffer
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout {
            capacity: self.capacity(),
            origin: self.origin,
            end: self.end,
            size: self.size(),
        }
    }
}

impl<T: Default> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    /// Arrays are equal when their elements are, regardless of layout
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Five decimals, except zero which is written as a bare `0`
fn element_fmt<T: RealScalar>(x: &T) -> String {
    if x.is_zero() {
        "0".to_string()
    } else {
        format!("{x:.5}")
    }
}

impl<T: RealScalar> Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().map(element_fmt).join(","))
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capacity: {}\norigin: {}\nend: {}\nsize: {}",
            self.capacity, self.origin, self.end, self.size
        )
    }
}
