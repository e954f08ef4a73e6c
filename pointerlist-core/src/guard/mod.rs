//! Locking strategy for the guarded collections.
//!
//! Collections come in two flavours that share one set of algorithms:
//!
//! ```text
//! PointerList<T>            (plain, &mut self, caller synchronizes)
//!     │
//!     └── GuardedPointerList<T> = Locker<PointerList<T>> + &self API
//!
//! TagList<T>                (plain, &mut self, caller synchronizes)
//!     │
//!     └── GuardedTagList<T>     = Locker<TagList<T>> + &self API
//! ```
//!
//! The plain collections carry no lock at all. The guarded ones compose a
//! [`Locker`] and bracket every public call with acquire/release, so a single
//! call is atomic with respect to other calls on the same instance. There is
//! no cross-call atomicity: `len()` followed by `get(i)` is two critical
//! sections.

mod locker;

pub use locker::Locker;
