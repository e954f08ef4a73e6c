//! Identity-based pointer collections.
//!
//! # Organization
//!
//! - [`list`] - Ordered lists of `Arc<T>` (plain and mutex-guarded)
//! - [`tag`] - Lists partitioned by string tag (plain and mutex-guarded)
//! - [`pointer_collection`] - The contract shared by the ordered lists

pub mod list;
pub mod pointer_collection;
pub mod tag;

pub use list::{GuardedPointerList, PointerList};
pub use pointer_collection::PointerCollection;
pub use tag::{GuardedTagList, RemoveCurrent, TagCollection, TagList};
