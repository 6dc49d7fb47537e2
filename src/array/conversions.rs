use std::{slice, vec};

use crate::DynArray;

impl<T> DynArray<T> {
    /// Iterate over the elements, first to last
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Consume the array, keeping only its elements.
    #[must_use]
    pub fn into_vec(mut self) -> Vec<T> {
        self.buffer.truncate(self.end);
        self.buffer.drain(..self.origin);
        self.buffer
    }
}

impl<T: Clone> DynArray<T> {
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T: Clone + Default> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<T: Clone + Default> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Clone + Default> From<Vec<T>> for DynArray<T> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone + Default> From<&[T]> for DynArray<T> {
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T> From<DynArray<T>> for Vec<T> {
    fn from(value: DynArray<T>) -> Self {
        value.into_vec()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

#[cfg(test)]
mod test {
    use crate::{dynarray, DynArray};

    #[test]
    fn collect() {
        let a: DynArray<i32> = (1..=4).collect();
        assert_eq!(a.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn extend() {
        let mut a = dynarray![1];
        a.extend([2, 3]);
        assert_eq!(a.size(), 3);
    }

    #[test]
    fn from_slice() {
        let a = DynArray::from(&[1.5, 2.5][..]);
        assert_eq!(a, dynarray![1.5, 2.5]);
    }

    #[test]
    fn into_vec_after_pop_front() {
        let mut a = dynarray![1, 2, 3];
        a.push_front(0);
        a.pop_front().unwrap();
        a.pop_front().unwrap();
        assert_eq!(Vec::from(a), vec![2, 3]);
    }

    #[test]
    fn iterate() {
        let a = dynarray![1, 2, 3];
        let mut total = 0;
        for x in &a {
            total += x;
        }
        assert_eq!(total, 6);
        assert_eq!(a.into_iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
