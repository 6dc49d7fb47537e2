//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;

use crate::DynArray;

/// Endless stream of uniformly distributed `f64` in `[min, max)`
pub struct RandStreamF64 {
    state: Rng,
    min: f64,
    max: f64,
}

impl RandStreamF64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            state: Rng::with_seed(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64().mul_add(self.max - self.min, self.min))
    }
}

/// A single mutation of a deque, used to drive model-based tests
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DequeOp {
    PushBack(f64),
    PushFront(f64),
    PopBack,
    PopFront,
    Set(usize, f64),
}

/// Endless stream of random [`DequeOp`]s.
///
/// Pushes are twice as likely as pops, so arrays tend to grow and exercise
/// re-centering in both directions.
pub struct RandStreamDequeOps {
    state: Rng,
    values: RandStreamF64,
    max_index: usize,
}

impl RandStreamDequeOps {
    #[must_use]
    pub fn new(seed: u64, max_index: usize) -> Self {
        let mut state = Rng::with_seed(seed);
        let values = RandStreamF64::new(state.u64(..), -100.0, 100.0);
        Self {
            state,
            values,
            max_index,
        }
    }
}

impl Iterator for RandStreamDequeOps {
    type Item = DequeOp;

    fn next(&mut self) -> Option<Self::Item> {
        let op = match self.state.u8(0..7) {
            0 | 1 => DequeOp::PushBack(self.values.next()?),
            2 | 3 => DequeOp::PushFront(self.values.next()?),
            4 => DequeOp::PopBack,
            5 => DequeOp::PopFront,
            _ => DequeOp::Set(self.state.usize(0..=self.max_index), self.values.next()?),
        };
        Some(op)
    }
}

/// An array of `len` random values in `[min, max)`
#[must_use]
pub fn random_array(seed: u64, len: usize, min: f64, max: f64) -> DynArray<f64> {
    RandStreamF64::new(seed, min, max).take(len).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stream_in_bounds() {
        assert!(RandStreamF64::new(1, -2.0, 3.0)
            .take(1000)
            .all(|x| (-2.0..3.0).contains(&x)));
    }

    #[test]
    fn seeded_is_reproducible() {
        assert_eq!(random_array(7, 20, 0.0, 1.0), random_array(7, 20, 0.0, 1.0));
    }
}
