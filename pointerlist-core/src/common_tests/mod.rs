//! Test suites shared by every collection variant.
//!
//! The core suites are generic over [`PointerCollection`] or
//! [`TagCollection`] and are driven from `tests/` once per variant. The
//! stress suites exercise the `&self` API of the guarded variants.
//!
//! [`PointerCollection`]: crate::data_structures::PointerCollection
//! [`TagCollection`]: crate::data_structures::TagCollection

pub mod tag_collection_core_tests;
