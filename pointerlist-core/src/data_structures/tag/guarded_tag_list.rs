use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::data_structures::PointerList;
use crate::data_structures::tag::{RemoveCurrent, TagCollection, TagList};
use crate::error::Result;
use crate::guard::Locker;

/// A [`TagList`] protected by one partition-wide mutex.
///
/// Every method takes `&self` and holds the lock for its whole duration.
/// Calls on different tags are serialized against each other as well.
///
/// Callbacks run under the lock and must not call back into the same
/// partition. The `remove` handle given to [`for_each`](Self::for_each)
/// visitors is the supported way to delete while iterating.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use pointerlist_core::GuardedTagList;
///
/// let tags = GuardedTagList::new();
/// for i in 0..6 {
///     tags.add(if i % 2 == 0 { "even" } else { "odd" }, Arc::new(i));
/// }
///
/// // Drop every multiple of three while walking the partition.
/// tags.for_each(|_, _, item, remove| {
///     if **item % 3 == 0 {
///         remove.remove();
///     }
///     true
/// });
///
/// assert_eq!(tags.total_count(), 4);
/// ```
///
pub struct GuardedTagList<T> {
    locker: Locker<TagList<T>>,
}

impl<T> GuardedTagList<T> {
    pub fn new() -> Self {
        GuardedTagList {
            locker: Locker::new(TagList::new()),
        }
    }

    /// Runs `f` against the whole partition inside one critical section.
    ///
    pub fn apply<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut TagList<T>) -> R,
    {
        self.locker.apply(f)
    }

    /// Runs `f` against the live list of `tag` under the partition lock.
    ///
    /// Returns `None` without calling `f` if the tag is unknown.
    ///
    pub fn with_list<F, R>(&self, tag: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut PointerList<T>) -> R,
    {
        self.apply(|tags| tags.list_mut(tag).map(f))
    }

    pub fn into_inner(self) -> TagList<T> {
        self.locker.into_inner()
    }

    pub fn add(&self, tag: &str, item: Arc<T>) {
        self.apply(|tags| tags.add(tag, item))
    }

    pub fn get(&self, tag: &str) -> Option<PointerList<T>> {
        self.apply(|tags| tags.get(tag))
    }

    pub fn get_next(&self, tag: &str) -> Option<Arc<T>> {
        self.apply(|tags| tags.get_next(tag))
    }

    pub fn insert(&self, index: usize, tag: &str, item: Arc<T>) -> Result<()> {
        self.apply(|tags| tags.insert(index, tag, item))
    }

    pub fn remove(&self, tag: &str, item: &Arc<T>) -> bool {
        self.apply(|tags| tags.remove(tag, item))
    }

    pub fn remove_at(&self, tag: &str, index: usize) -> bool {
        self.apply(|tags| tags.remove_at(tag, index))
    }

    pub fn clear(&self) {
        self.apply(|tags| tags.clear())
    }

    pub fn clear_list(&self, tag: &str) {
        self.apply(|tags| tags.clear_list(tag))
    }

    pub fn contains(&self, tag: &str, item: &Arc<T>) -> bool {
        self.apply(|tags| tags.contains(tag, item))
    }

    pub fn tag_count(&self) -> usize {
        self.apply(|tags| tags.tag_count())
    }

    pub fn total_count(&self) -> usize {
        self.apply(|tags| tags.total_count())
    }

    pub fn map_count(&self) -> HashMap<String, usize> {
        self.apply(|tags| tags.map_count())
    }

    pub fn map_count_select<F>(&self, f: F) -> HashMap<String, usize>
    where
        F: FnMut(&str, usize, &Arc<T>) -> bool,
    {
        self.apply(|tags| tags.map_count_select(f))
    }

    pub fn count_select<F>(&self, f: F) -> usize
    where
        F: FnMut(&str, usize, &Arc<T>) -> bool,
    {
        self.apply(|tags| tags.count_select(f))
    }

    pub fn find<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(&Arc<T>) -> bool,
    {
        self.apply(|tags| tags.find(f))
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&str, usize, &Arc<T>, &mut RemoveCurrent) -> bool,
    {
        self.apply(|tags| tags.for_each(f))
    }

    pub fn to_map(&self) -> HashMap<String, PointerList<T>> {
        self.apply(|tags| tags.to_map())
    }
}

impl<T> TagCollection<T> for GuardedTagList<T> {
    fn add(&mut self, tag: &str, item: Arc<T>) {
        GuardedTagList::add(self, tag, item)
    }

    fn get(&self, tag: &str) -> Option<PointerList<T>> {
        GuardedTagList::get(self, tag)
    }

    fn get_next(&mut self, tag: &str) -> Option<Arc<T>> {
        GuardedTagList::get_next(self, tag)
    }

    fn insert(&mut self, index: usize, tag: &str, item: Arc<T>) -> Result<()> {
        GuardedTagList::insert(self, index, tag, item)
    }

    fn remove(&mut self, tag: &str, item: &Arc<T>) -> bool {
        GuardedTagList::remove(self, tag, item)
    }

    fn remove_at(&mut self, tag: &str, index: usize) -> bool {
        GuardedTagList::remove_at(self, tag, index)
    }

    fn clear(&mut self) {
        GuardedTagList::clear(self)
    }

    fn clear_list(&mut self, tag: &str) {
        GuardedTagList::clear_list(self, tag)
    }

    fn contains(&self, tag: &str, item: &Arc<T>) -> bool {
        GuardedTagList::contains(self, tag, item)
    }

    fn tag_count(&self) -> usize {
        GuardedTagList::tag_count(self)
    }

    fn total_count(&self) -> usize {
        GuardedTagList::total_count(self)
    }

    fn map_count(&self) -> HashMap<String, usize> {
        GuardedTagList::map_count(self)
    }

    fn map_count_select<F>(&self, f: F) -> HashMap<String, usize>
    where
        F: FnMut(&str, usize, &Arc<T>) -> bool,
    {
        GuardedTagList::map_count_select(self, f)
    }

    fn count_select<F>(&self, f: F) -> usize
    where
        F: FnMut(&str, usize, &Arc<T>) -> bool,
    {
        GuardedTagList::count_select(self, f)
    }

    fn find<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(&Arc<T>) -> bool,
    {
        GuardedTagList::find(self, f)
    }

    fn for_each<F>(&mut self, f: F)
    where
        F: FnMut(&str, usize, &Arc<T>, &mut RemoveCurrent) -> bool,
    {
        GuardedTagList::for_each(self, f)
    }

    fn to_map(&self) -> HashMap<String, PointerList<T>> {
        GuardedTagList::to_map(self)
    }
}

impl<T> Default for GuardedTagList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<TagList<T>> for GuardedTagList<T> {
    fn from(tags: TagList<T>) -> Self {
        GuardedTagList {
            locker: Locker::new(tags),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GuardedTagList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedTagList")
            .field("tags", &self.locker)
            .finish()
    }
}
