use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    util::{casting::usize_to_real, doc_macros::errors_empty},
    DynArray, Error, RealScalar, Result,
};

impl<T: RealScalar> DynArray<T> {
    /// Smallest element, the first one wins ties.
    ///
    /// # Errors
    #[doc = errors_empty!()]
    pub fn min(&self) -> Result<T> {
        let mut iter = self.iter().copied();
        let first = iter.next().ok_or(Error::empty("take the minimum of"))?;
        Ok(iter.fold(first, |min, x| if x < min { x } else { min }))
    }

    /// Largest element, the first one wins ties.
    ///
    /// # Errors
    #[doc = errors_empty!()]
    pub fn max(&self) -> Result<T> {
        let mut iter = self.iter().copied();
        let first = iter.next().ok_or(Error::empty("take the maximum of"))?;
        Ok(iter.fold(first, |max, x| if x > max { x } else { max }))
    }

    /// Sum of the elements, accumulated from first to last. Zero for an
    /// empty array.
    #[must_use]
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Arithmetic mean
    ///
    /// # Errors
    #[doc = errors_empty!()]
    pub fn mean(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::empty("take the mean of"));
        }
        Ok(self.sum() / usize_to_real(self.size()))
    }

    /// Middle element of the sorted elements, or the mean of the two middle
    /// elements for an even number of elements.
    ///
    /// ```
    /// use rust_dynarray::dynarray;
    ///
    /// assert_eq!(dynarray![1.0, 5.0, 2.0, 4.0, 3.0].median().unwrap(), 3.0);
    /// assert_eq!(dynarray![4.0, 1.0, 3.0, 2.0].median().unwrap(), 2.5);
    /// ```
    ///
    /// # Errors
    #[doc = errors_empty!()]
    pub fn median(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::empty("take the median of"));
        }
        // NaN sorts as equal to anything, like the rest of the comparisons here
        let sorted = self
            .iter()
            .copied()
            .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .collect_vec();
        let n = sorted.len();
        if n % 2 == 0 {
            let two = T::one() + T::one();
            Ok((sorted[n / 2 - 1] + sorted[n / 2]) / two)
        } else {
            Ok(sorted[n / 2])
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{dynarray, DynArray32, DynArray64, Error};

    const EPSILON: f64 = 1E-4;

    #[test]
    fn math_operations() {
        let a: DynArray64 = dynarray![1.0, 5.0, 2.0, 4.0, 3.0];
        assert!((a.min().unwrap() - 1.0).abs() < EPSILON);
        assert!((a.max().unwrap() - 5.0).abs() < EPSILON);
        assert!((a.mean().unwrap() - 3.0).abs() < EPSILON);
        assert!((a.median().unwrap() - 3.0).abs() < EPSILON);
        assert!((a.sum() - 15.0).abs() < EPSILON);
    }

    #[test]
    fn median_even() {
        let a = dynarray![10.0, -1.0, 3.0, 7.0];
        assert_eq!(a.median(), Ok(5.0));
    }

    #[test]
    fn median_does_not_sort_in_place() {
        let a = dynarray![3.0, 1.0, 2.0];
        let _ = a.median();
        assert_eq!(a, dynarray![3.0, 1.0, 2.0]);
    }

    #[test]
    fn single_element() {
        let a = dynarray![-2.5];
        assert_eq!(a.min(), Ok(-2.5));
        assert_eq!(a.max(), Ok(-2.5));
        assert_eq!(a.mean(), Ok(-2.5));
        assert_eq!(a.median(), Ok(-2.5));
    }

    #[test]
    fn empty() {
        let a = DynArray64::new();
        assert!(matches!(a.min(), Err(Error::Empty { .. })));
        assert!(matches!(a.max(), Err(Error::Empty { .. })));
        assert!(matches!(a.mean(), Err(Error::Empty { .. })));
        assert!(matches!(a.median(), Err(Error::Empty { .. })));
        assert_eq!(a.sum(), 0.0);
    }

    #[test]
    fn f32() {
        let a: DynArray32 = dynarray![1.0, 2.0, 6.0];
        assert_eq!(a.sum(), 9.0);
        assert_eq!(a.mean(), Ok(3.0));
        assert_eq!(a.to_string(), "[1.00000,2.00000,6.00000]");
    }
}
