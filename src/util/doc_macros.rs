//! Macros for reducing doc comment boilerplate.

/// Documents [`crate::Error::Empty`] errors.
macro_rules! errors_empty {
    () => {
        r"- `Empty`: the array has no elements.\n"
    };
}
pub(crate) use errors_empty;

/// Documents growth on writes past the end of the buffer
macro_rules! note_growth {
    () => {
        r"May reallocate the buffer (doubling its capacity and re-centering the content). This is O(n), but amortized O(1) over a sequence of pushes.\n\n"
    };
}
pub(crate) use note_growth;
