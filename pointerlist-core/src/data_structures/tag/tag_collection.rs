use std::collections::HashMap;
use std::sync::Arc;

use crate::data_structures::PointerList;
use crate::error::Result;

/// Handed to [`TagCollection::for_each`] visitors to delete the element
/// being visited.
///
/// The removal is applied after the visitor returns, at the element's live
/// position, and the traversal continues with the element that followed it.
///
#[derive(Debug, Default)]
pub struct RemoveCurrent {
    requested: bool,
}

impl RemoveCurrent {
    pub(crate) fn new() -> Self {
        RemoveCurrent { requested: false }
    }

    /// Marks the current element for removal.
    pub fn remove(&mut self) {
        self.requested = true;
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }
}

/// Common API of the tag-partitioned collections.
///
/// A tag collection maps string tags to independent [`PointerList`]s. The
/// list for a tag is created on the first `add` or `insert` for that tag.
/// Tag iteration order is unspecified for every method that walks more than
/// one tag.
///
/// # Tag lifecycle
///
/// ```text
/// absent ──add/insert──▶ populated ──clear_list──▶ emptied (key kept, len 0)
///    ▲                        ▲                          │
///    │                        └──────────add─────────────┘
///    └──────────── clear (all tags) ◀──────────────────────
/// ```
///
pub trait TagCollection<T> {
    /// Appends `item` to the list of `tag`, creating the list if needed.
    ///
    fn add(&mut self, tag: &str, item: Arc<T>);

    /// Copy of the list for `tag` sharing its elements, or `None` if the tag
    /// was never written.
    ///
    /// Writes to the returned list do not reach the collection. Use
    /// [`TagList::list_mut`](crate::TagList::list_mut) or
    /// [`GuardedTagList::with_list`](crate::GuardedTagList::with_list) to
    /// mutate a tag's live list.
    ///
    fn get(&self, tag: &str) -> Option<PointerList<T>>;

    /// Dispenses the next element of `tag`'s round-robin cursor.
    ///
    fn get_next(&mut self, tag: &str) -> Option<Arc<T>>;

    /// Inserts `item` at `index` in the list of `tag`, creating the list if
    /// needed. Valid indexes are `0..=len`.
    ///
    fn insert(&mut self, index: usize, tag: &str, item: Arc<T>) -> Result<()>;

    /// Removes the first occurrence of `item` (by identity) from `tag`.
    ///
    fn remove(&mut self, tag: &str, item: &Arc<T>) -> bool;

    /// Removes the element at `index` from `tag`.
    ///
    fn remove_at(&mut self, tag: &str, index: usize) -> bool;

    /// Forgets every tag.
    ///
    fn clear(&mut self);

    /// Empties the list of `tag` but keeps the tag itself.
    ///
    fn clear_list(&mut self, tag: &str);

    /// Determines whether `item` (by identity) is in the list of `tag`.
    ///
    fn contains(&self, tag: &str, item: &Arc<T>) -> bool;

    /// Number of tags, including emptied ones.
    ///
    fn tag_count(&self) -> usize;

    /// Number of elements across all tags.
    ///
    fn total_count(&self) -> usize;

    /// Number of elements per tag.
    ///
    fn map_count(&self) -> HashMap<String, usize>;

    /// Number of elements per tag for which `f(tag, index, element)` holds.
    ///
    fn map_count_select<F>(&self, f: F) -> HashMap<String, usize>
    where
        F: FnMut(&str, usize, &Arc<T>) -> bool;

    /// Number of elements across all tags for which `f(tag, index, element)`
    /// holds.
    ///
    fn count_select<F>(&self, f: F) -> usize
    where
        F: FnMut(&str, usize, &Arc<T>) -> bool;

    /// Returns some element, from any tag, for which `f` holds.
    ///
    fn find<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(&Arc<T>) -> bool;

    /// Visits every element of every tag, in index order within a tag.
    ///
    /// The visitor receives `(tag, index, element, remove)`. `index` is the
    /// element's position when the traversal of its tag started. Calling
    /// `remove.remove()` deletes the visited element without skipping or
    /// revisiting any other. Returning false stops the whole traversal.
    ///
    fn for_each<F>(&mut self, f: F)
    where
        F: FnMut(&str, usize, &Arc<T>, &mut RemoveCurrent) -> bool;

    /// Copies every list, keyed by tag.
    ///
    fn to_map(&self) -> HashMap<String, PointerList<T>>;
}
