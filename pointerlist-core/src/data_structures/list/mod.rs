//! Ordered pointer lists.

pub mod guarded_pointer_list;
pub mod pointer_list;

pub use guarded_pointer_list::GuardedPointerList;
pub use pointer_list::PointerList;
