use num::{Float, FromPrimitive};

/// Convert an element count into the element type, explicitly saturating at
/// infinity instead of panicking (also shuts up clippy 📎)
pub(crate) fn usize_to_real<T: FromPrimitive + Float>(x: usize) -> T {
    T::from_usize(x).unwrap_or_else(T::infinity)
}
