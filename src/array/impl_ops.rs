#![allow(clippy::op_ref)]

// Operators, `+` concatenates

use std::ops::Add;

use crate::DynArray;

impl<T: Clone + Default> Add<Self> for DynArray<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.concat(&rhs)
    }
}

impl<T: Clone + Default> Add<&Self> for DynArray<T> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        self.concat(rhs)
    }
}

impl<T: Clone + Default> Add<DynArray<T>> for &DynArray<T> {
    type Output = DynArray<T>;

    fn add(self, rhs: DynArray<T>) -> Self::Output {
        self.concat(&rhs)
    }
}

impl<T: Clone + Default> Add<&DynArray<T>> for &DynArray<T> {
    type Output = DynArray<T>;

    fn add(self, rhs: &DynArray<T>) -> Self::Output {
        self.concat(rhs)
    }
}

#[cfg(test)]
mod test {
    use crate::dynarray;

    #[test]
    fn plus_operator() {
        let a = dynarray![0, 1];
        let b = &a + &a + &a;
        assert_eq!(b, dynarray![0, 1, 0, 1, 0, 1]);
        assert_eq!(a.size(), 2);
    }

    #[test]
    fn plus_owned() {
        let a = dynarray![1.0, 2.0];
        let b = dynarray![3.0];
        assert_eq!(a + b, dynarray![1.0, 2.0, 3.0]);
    }
}
