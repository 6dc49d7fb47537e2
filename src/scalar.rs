use std::fmt::{Debug, Display};

use duplicate::duplicate_item;
use num::{Complex, Float, FromPrimitive};

/// Tolerance used wherever floating point values are compared for equality
pub const EPSILON: f64 = 1E-4;

/// The notion of equality used by [`crate::DynArray::unique`].
///
/// Exact for integers, text and other discrete types. Floating point and
/// complex values are considered the same when they are closer than
/// [`EPSILON`].
///
/// Implement this for your own element types to de-duplicate arrays of them.
/// For anything with a sensible [`PartialEq`], `a == b` is all it takes.
pub trait ElementEq {
    fn same_as(&self, other: &Self) -> bool;
}

#[duplicate_item(
    exact_type;
    [ i8 ];
    [ i16 ];
    [ i32 ];
    [ i64 ];
    [ i128 ];
    [ isize ];
    [ u8 ];
    [ u16 ];
    [ u32 ];
    [ u64 ];
    [ u128 ];
    [ usize ];
    [ bool ];
    [ char ];
    [ String ];
)]
impl ElementEq for exact_type {
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

#[duplicate_item(
    float_type;
    [ f32 ];
    [ f64 ];
)]
impl ElementEq for float_type {
    #[allow(clippy::cast_possible_truncation)]
    fn same_as(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON as float_type
    }
}

impl<T: Float> ElementEq for Complex<T> {
    fn same_as(&self, other: &Self) -> bool {
        let tolerance: T = num::cast(EPSILON).unwrap_or_else(T::epsilon);
        (*self - *other).norm() < tolerance
    }
}

/// Real floating point element types, which unlock the statistical
/// operations, range construction and the textual rendering.
pub trait RealScalar: Float + FromPrimitive + Default + Display + Debug + ElementEq {
    /// [`EPSILON`] converted to this type
    #[must_use]
    fn tolerance() -> Self {
        Self::from_f64(EPSILON).unwrap_or_else(Self::epsilon)
    }

    /// Equal to within [`EPSILON`]
    fn approx_eq(&self, other: &Self) -> bool {
        (*self - *other).abs() < Self::tolerance()
    }
}

impl RealScalar for f32 {}

impl RealScalar for f64 {}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use super::*;

    #[test]
    fn floats_within_tolerance() {
        assert!(1.0_f64.same_as(&1.000_01));
        assert!(!1.0_f64.same_as(&1.001));
        assert!(2.5_f32.same_as(&2.500_05));
        assert!(0.3_f64.approx_eq(&(0.1 + 0.2)));
    }

    #[test]
    fn exact_types() {
        assert!(3_i32.same_as(&3));
        assert!(!3_u8.same_as(&4));
        assert!("a".to_string().same_as(&"a".to_string()));
    }

    #[test]
    fn complex_within_tolerance() {
        let a = Complex64::new(1.0, 1.0);
        assert!(a.same_as(&Complex64::new(1.0, 1.000_01)));
        assert!(!a.same_as(&Complex64::new(1.0, -1.0)));
    }
}
