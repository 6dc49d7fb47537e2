use std::mem;

use crate::{
    util::doc_macros::{errors_empty, note_growth},
    DynArray, Error, Result,
};

impl<T: Clone + Default> DynArray<T> {
    /// Append an element after the last one.
    ///
    /// # Performance
    #[doc = note_growth!()]
    pub fn push_back(&mut self, value: T) {
        self.set(self.size(), value);
    }

    /// Insert an element before the first one, shifting every index by one.
    ///
    /// ```
    /// use rust_dynarray::DynArray;
    ///
    /// let mut a = DynArray::new();
    /// a.push_front(1);
    /// a.push_front(2);
    /// assert_eq!(a.to_vec(), vec![2, 1]);
    /// ```
    ///
    /// # Performance
    #[doc = note_growth!()]
    pub fn push_front(&mut self, value: T) {
        self.reserve_front();
        self.origin -= 1;
        self.set(0, value);
    }

    /// Remove and return the last element. Its slot is reset to `T::default()`.
    ///
    /// # Errors
    #[doc = errors_empty!()]
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::empty("pop from"));
        }
        let offset = self.index_to_offset(self.size() - 1);
        let value = mem::take(&mut self.buffer[offset]);
        self.end -= 1;
        Ok(value)
    }

    /// Remove and return the first element.
    ///
    /// # Errors
    #[doc = errors_empty!()]
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::empty("pop from"));
        }
        // the slot is now before `origin` and can only be reached again
        // through `push_front`, which overwrites it
        let value = self.get(0);
        self.origin += 1;
        Ok(value)
    }
}
