use itertools::Itertools;

use crate::{DynArray, ElementEq, Error, RealScalar, Result};

impl<T: Clone + Default> DynArray<T> {
    /// A fresh, compactly laid out copy.
    ///
    /// Unlike [`Clone::clone`], this does not preserve the capacity and
    /// position of the content in the buffer.
    #[must_use]
    pub fn copy(&self) -> Self {
        let mut res = Self::new();
        for i in 0..self.size() {
            res.push_back(self.get(i));
        }
        res
    }

    /// Apply `f` to every element, in order.
    ///
    /// ```
    /// use rust_dynarray::dynarray;
    ///
    /// let a = dynarray![1.0, 4.0, 9.0];
    /// assert_eq!(a.map(f64::sqrt), dynarray![1.0, 2.0, 3.0]);
    /// assert_eq!(a.map(|x| x > 2.0), dynarray![false, true, true]);
    /// ```
    pub fn map<U: Clone + Default>(&self, mut f: impl FnMut(T) -> U) -> DynArray<U> {
        let mut res = DynArray::new();
        for i in 0..self.size() {
            res.push_back(f(self.get(i)));
        }
        res
    }

    /// Keep the elements for which `predicate` holds, in order.
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        let mut res = Self::new();
        for i in 0..self.size() {
            let value = self.get(i);
            if predicate(&value) {
                res.push_back(value);
            }
        }
        res
    }

    /// All elements of `self`, followed by all elements of `other`. Also
    /// available as the `+` operator.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut res = Self::new();
        for i in 0..self.size() {
            res.push_back(self.get(i));
        }
        for i in 0..other.size() {
            res.push_back(other.get(i));
        }
        res
    }

    /// `n` elements from the start (`n > 0`) or the end (`n < 0`) of the
    /// array.
    ///
    /// If the array is too short, the result is padded with `T::default()`
    /// on the right *in both cases*, so that it always has `|n|` elements.
    ///
    /// ```
    /// use rust_dynarray::dynarray;
    ///
    /// let a = dynarray![1, 2, 3];
    /// assert_eq!(a.take(2), dynarray![1, 2]);
    /// assert_eq!(a.take(-2), dynarray![2, 3]);
    /// assert_eq!(a.take(5), dynarray![1, 2, 3, 0, 0]);
    /// assert_eq!(a.take(-5), dynarray![1, 2, 3, 0, 0]);
    /// assert!(a.take(0).is_empty());
    /// ```
    #[must_use]
    pub fn take(&self, n: isize) -> Self {
        let mut res = Self::new();
        let count = n.unsigned_abs();
        if n > 0 {
            // reads past the end are the padding
            for i in 0..count {
                res.push_back(self.get(i));
            }
        } else if n < 0 {
            let start = self.size().saturating_sub(count);
            for i in start..self.size() {
                res.push_back(self.get(i));
            }
            while res.size() < count {
                res.push_back(T::default());
            }
        }
        res
    }

    /// Elements at indices `start..end`. Indices past the end read as
    /// `T::default()`.
    ///
    /// # Errors
    /// - `InvalidRange`: `end < start`.
    pub fn subarray(&self, start: usize, end: usize) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        let mut res = Self::new();
        for i in start..end {
            res.push_back(self.get(i));
        }
        Ok(res)
    }

    /// Split into at most `num_chunks` consecutive chunks of
    /// `ceil(size / num_chunks)` elements, the last one possibly shorter.
    ///
    /// Fewer chunks than requested are returned when the elements run out
    /// early, and none at all for an empty array or `num_chunks == 0`.
    ///
    /// ```
    /// use rust_dynarray::dynarray;
    ///
    /// let a = dynarray![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    /// let sizes: Vec<usize> = a.split(3).iter().map(|c| c.size()).collect();
    /// assert_eq!(sizes, vec![4, 4, 2]);
    ///
    /// // chunks of 2, so the elements run out after 3 chunks
    /// assert_eq!(dynarray![1, 2, 3, 4, 5].split(4).len(), 3);
    /// ```
    #[must_use]
    pub fn split(&self, num_chunks: usize) -> Vec<Self> {
        if num_chunks == 0 || self.is_empty() {
            return vec![];
        }
        let chunk_size = self.size().div_ceil(num_chunks);
        let chunks = self.iter().cloned().chunks(chunk_size);
        let res = chunks
            .into_iter()
            .map(|chunk| chunk.collect::<Self>())
            .collect_vec();
        if res.len() < num_chunks {
            log::debug!(
                "split ran out of elements {{requested: {num_chunks}, created: {}}}",
                res.len()
            );
        }
        res
    }

    /// Reverse the order of the elements in-place.
    ///
    /// Returns `self` to allow chaining.
    pub fn reverse(&mut self) -> &mut Self {
        self.as_mut_slice().reverse();
        self
    }
}

impl<T: Clone + Default + ElementEq> DynArray<T> {
    /// Remove duplicates, keeping the first occurrence of each value.
    ///
    /// Values are compared with [`ElementEq`], which is approximate for
    /// floating point elements.
    ///
    /// ```
    /// use rust_dynarray::dynarray;
    ///
    /// assert_eq!(dynarray![1, 2, 2, 3, 1].unique(), dynarray![1, 2, 3]);
    /// assert_eq!(dynarray![0.5, 0.500001, 0.6].unique(), dynarray![0.5, 0.6]);
    /// ```
    #[must_use]
    pub fn unique(&self) -> Self {
        let mut res = Self::new();
        for i in 0..self.size() {
            let value = self.get(i);
            if !res.iter().any(|seen| seen.same_as(&value)) {
                res.push_back(value);
            }
        }
        res
    }
}

impl<T: RealScalar> DynArray<T> {
    /// `start`, `start + step`, `start + 2 * step`, ... up to `stop`.
    ///
    /// `stop` is included when the accumulated value lands within
    /// [`crate::EPSILON`] of it, so rounding errors do not drop the last
    /// element. A `start` past `stop` gives an empty array.
    ///
    /// ```
    /// use rust_dynarray::DynArray64;
    ///
    /// let a = DynArray64::range(0.0, 1.0, 0.2).unwrap();
    /// assert_eq!(a.size(), 6);
    /// assert!((a.last().unwrap() - 1.0).abs() < 1E-9);
    /// ```
    ///
    /// # Errors
    /// - `InvalidStep`: the range is not empty and would never end, because
    ///   `step` is not strictly positive, `stop` is infinite, or the step is
    ///   too small to change the value.
    pub fn range(start: T, stop: T, step: T) -> Result<Self> {
        let reaches = |x: T| x < stop || x.approx_eq(&stop);
        if !reaches(start) {
            return Ok(Self::new());
        }
        if !(step > T::zero() && step.is_finite() && stop.is_finite()) {
            return Err(Error::InvalidStep);
        }
        let mut res = Self::new();
        let mut curr = start;
        while reaches(curr) {
            res.push_back(curr);
            let next = curr + step;
            if next == curr {
                return Err(Error::InvalidStep);
            }
            curr = next;
        }
        Ok(res)
    }
}
