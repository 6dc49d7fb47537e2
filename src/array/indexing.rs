use std::ops::{Index, IndexMut};

use crate::{
    util::doc_macros::{errors_empty, note_growth},
    DynArray, Error, Result,
};

impl<T> DynArray<T> {
    /// Number of elements
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.offset_to_index(self.end)
    }

    /// Same as [`DynArray::size`]
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T: Clone + Default> DynArray<T> {
    /// Read the element at `index`, or `T::default()` if the index is past
    /// the end.
    ///
    /// This never modifies the array, reading past the end does not extend it.
    ///
    /// ```
    /// use rust_dynarray::dynarray;
    ///
    /// let a = dynarray![1, 2];
    /// assert_eq!(a.get(1), 2);
    /// assert_eq!(a.get(2), 0);
    /// assert_eq!(a.size(), 2);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> T {
        if index >= self.size() {
            return T::default();
        }
        self.buffer[self.index_to_offset(index)].clone()
    }

    /// Write `value` at `index`.
    ///
    /// Writing past the end extends the array, every slot between the old
    /// end and `index` becomes part of it with value `T::default()`.
    ///
    /// ```
    /// use rust_dynarray::DynArray;
    ///
    /// let mut a = DynArray::new();
    /// a.set(3, 1.0);
    /// assert_eq!(a.to_vec(), vec![0.0, 0.0, 0.0, 1.0]);
    /// ```
    ///
    /// # Performance
    #[doc = note_growth!()]
    ///
    /// # Panics
    /// With "capacity overflow" if `index` is too large for its slot to be
    /// addressable, as [`Vec`] does.
    pub fn set(&mut self, index: usize, value: T) {
        let offset = self.reserve_index(index);
        self.buffer[offset] = value;
        if index >= self.size() {
            self.end = offset + 1;
        }

        // post-condition: written slot is part of the array
        debug_assert!(self.end > offset);
    }

    /// Like [`DynArray::get`], but for a signed index.
    ///
    /// # Errors
    /// - `NegativeIndex`: `index` is negative.
    pub fn try_get(&self, index: isize) -> Result<T> {
        let index = usize::try_from(index).map_err(|_| Error::NegativeIndex(index))?;
        Ok(self.get(index))
    }

    /// Like [`DynArray::set`], but for a signed index.
    ///
    /// # Errors
    /// - `NegativeIndex`: `index` is negative, the array is left untouched.
    pub fn try_set(&mut self, index: isize, value: T) -> Result<()> {
        let index = usize::try_from(index).map_err(|_| Error::NegativeIndex(index))?;
        self.set(index, value);
        Ok(())
    }

    /// The first element
    ///
    /// # Errors
    #[doc = errors_empty!()]
    pub fn first(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::empty("take the first element of"));
        }
        Ok(self.get(0))
    }

    /// The last element
    ///
    /// # Errors
    #[doc = errors_empty!()]
    pub fn last(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::empty("take the last element of"));
        }
        Ok(self.get(self.size() - 1))
    }
}

// unlike `get`, these panic when out of bounds, like slices
impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
