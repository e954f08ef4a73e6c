//! Pointer lists partitioned by string tag.

pub mod guarded_tag_list;
pub mod tag_collection;
pub mod tag_list;

pub use guarded_tag_list::GuardedTagList;
pub use tag_collection::{RemoveCurrent, TagCollection};
pub use tag_list::TagList;
