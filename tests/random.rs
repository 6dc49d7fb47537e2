//! Exploratory tests which use randomized test cases

use std::collections::VecDeque;

use fastrand::Rng;
use rust_dynarray::{
    DynArray64,
    __testing::{random_array, DequeOp, RandStreamDequeOps},
};

#[test]
fn test_deque_ops_match_model() {
    let case = |seed, max_index| {
        let mut array = DynArray64::new();
        let mut model = VecDeque::new();
        for (i, op) in RandStreamDequeOps::new(seed, max_index)
            .take(2000)
            .enumerate()
        {
            match op {
                DequeOp::PushBack(x) => {
                    array.push_back(x);
                    model.push_back(x);
                }
                DequeOp::PushFront(x) => {
                    array.push_front(x);
                    model.push_front(x);
                }
                DequeOp::PopBack => {
                    assert_eq!(array.pop_back().ok(), model.pop_back(), "@ iter = {i}");
                }
                DequeOp::PopFront => {
                    assert_eq!(array.pop_front().ok(), model.pop_front(), "@ iter = {i}");
                }
                DequeOp::Set(index, x) => {
                    array.set(index, x);
                    if index >= model.len() {
                        model.resize(index + 1, 0.0);
                    }
                    model[index] = x;
                }
            }
            let layout = array.layout();
            assert!(layout.origin <= layout.end && layout.end <= layout.capacity);
            assert_eq!(array.size(), model.len(), "@ iter = {i}");
        }
        assert!(array.iter().eq(model.iter()));
    };

    case(1, 0);
    case(2, 16);
    case(3, 200);
    case(4, 5000);
}

#[test]
fn test_take_lengths() {
    let mut rng = Rng::with_seed(42);
    for _ in 0..500 {
        let len = rng.usize(0..40);
        let a = random_array(rng.u64(..), len, -10.0, 10.0);
        let n = rng.isize(-60..60);
        let taken = a.take(n);
        assert_eq!(taken.size(), n.unsigned_abs());
        let copied = len.min(n.unsigned_abs());
        if n > 0 {
            assert_eq!(&taken.as_slice()[..copied], &a.as_slice()[..copied]);
        } else {
            assert_eq!(&taken.as_slice()[..copied], &a.as_slice()[len - copied..]);
        }
        assert!(taken.as_slice()[copied..].iter().all(|x| *x == 0.0));
    }
}

#[test]
fn test_split_reassembles() {
    let mut rng = Rng::with_seed(7);
    for _ in 0..500 {
        let len = rng.usize(0..50);
        let a = random_array(rng.u64(..), len, -1.0, 1.0);
        let num_chunks = rng.usize(0..12);
        let chunks = a.split(num_chunks);
        assert!(chunks.len() <= num_chunks);
        if num_chunks > 0 {
            let rejoined = chunks
                .iter()
                .fold(DynArray64::new(), |acc, chunk| acc + chunk);
            assert_eq!(rejoined, a);
        }
    }
}

#[test]
fn test_median_between_min_and_max() {
    let mut rng = Rng::with_seed(3);
    for _ in 0..500 {
        let len = rng.usize(1..30);
        let a = random_array(rng.u64(..), len, -100.0, 100.0);
        let median = a.median().unwrap();
        let mean = a.mean().unwrap();
        let (min, max) = (a.min().unwrap(), a.max().unwrap());
        assert!(min <= median && median <= max);
        assert!(min <= mean && mean <= max);
    }
}
