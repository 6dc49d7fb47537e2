#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

//! Growable, double-ended arrays backed by a single contiguous buffer.
//!
//! The buffer is over-allocated at both ends, so pushing to either end is
//! amortized O(1). It never wraps around like a ring buffer: when one side
//! runs out of room the buffer doubles in size and the content is moved back
//! towards the center.
//!
//! ```
//! use rust_dynarray::{dynarray, DynArray64};
//!
//! let mut a: DynArray64 = dynarray![1.0, 5.0, 2.0];
//! a.push_back(4.0);
//! a.push_front(3.0);
//! assert_eq!(a.to_string(), "[3.00000,1.00000,5.00000,2.00000,4.00000]");
//! assert_eq!(a.median().unwrap(), 3.0);
//! ```

pub use num;

mod array;
pub use array::{DynArray, Layout, INITIAL_CAPACITY};

mod error;
pub use error::{Error, Result};

mod scalar;
pub use scalar::{ElementEq, RealScalar, EPSILON};

mod util;

// re-exported by crate root
#[doc(hidden)]
pub use util::__testing;

pub type DynArray32 = DynArray<f32>;
pub type DynArray64 = DynArray<f64>;

/// Build a [`DynArray`] from a list of elements, like [`vec!`].
///
/// ```
/// use rust_dynarray::{dynarray, DynArray};
///
/// let a = dynarray![1, 2, 3];
/// assert_eq!(a.size(), 3);
///
/// let zeros = dynarray![0.0; 4];
/// assert_eq!(zeros.to_vec(), vec![0.0; 4]);
///
/// let empty: DynArray<u8> = dynarray![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynArray::from(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynArray::from(::std::vec![$($x),+])
    };
}
