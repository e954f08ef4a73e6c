//! Errors reported by the pointer collections.
//!
//! Only positional inserts can fail in a way the caller needs to tell apart.
//! Lookups and removals that miss are ordinary outcomes and are reported
//! through `bool` / `Option` instead.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PointerListError {
    /// An insert targeted a position outside `0..=len`.
    ///
    #[error("index out of range [{index}] with length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, PointerListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = PointerListError::IndexOutOfRange { index: 2, len: 2 };
        assert_eq!(err.to_string(), "index out of range [2] with length 2");
    }
}
