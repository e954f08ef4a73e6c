//! Pointer lists compared by identity, with optional mutex guarding and a
//! tag-partitioned layer on top.
//!
//! ```text
//! PointerList<T>          GuardedPointerList<T>     (PointerCollection)
//! TagList<T>              GuardedTagList<T>         (TagCollection)
//! ```

pub mod common_tests;
pub mod data_structures;
pub mod error;
pub mod guard;

pub use data_structures::{
    GuardedPointerList, GuardedTagList, PointerCollection, PointerList, RemoveCurrent,
    TagCollection, TagList,
};
pub use error::{PointerListError, Result};
pub use guard::Locker;
