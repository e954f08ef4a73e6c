use std::fmt;
use std::sync::Arc;

use crate::data_structures::{PointerCollection, PointerList};
use crate::error::Result;
use crate::guard::Locker;

/// A [`PointerList`] protected by a mutex.
///
/// Every method takes `&self` and runs as one critical section, so an
/// `Arc<GuardedPointerList<T>>` can be shared freely between threads. The
/// round-robin cursor is read and advanced under the same lock as the
/// element it dispenses.
///
/// Atomicity is per call only. Use combined operations such as
/// [`find_and_remove`](Self::find_and_remove) instead of `find` followed by
/// `remove` when the pair must not race.
///
/// # Callbacks
///
/// Predicates and visitors run while the lock is held. They must not call
/// back into the same list; doing so deadlocks.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use pointerlist_core::GuardedPointerList;
///
/// let list = Arc::new(GuardedPointerList::new());
///
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let list = Arc::clone(&list);
///         thread::spawn(move || list.add(Arc::new(i)))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(list.len(), 4);
/// ```
///
pub struct GuardedPointerList<T> {
    locker: Locker<PointerList<T>>,
}

impl<T> GuardedPointerList<T> {
    pub fn new() -> Self {
        GuardedPointerList {
            locker: Locker::new(PointerList::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        GuardedPointerList {
            locker: Locker::new(PointerList::with_capacity(capacity)),
        }
    }

    /// Runs `f` against the underlying list inside one critical section.
    ///
    /// Use this for compound operations that must be atomic as a whole.
    ///
    pub fn apply<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PointerList<T>) -> R,
    {
        self.locker.apply(f)
    }

    /// Copy of the current list sharing the same elements.
    ///
    pub fn snapshot(&self) -> PointerList<T> {
        self.apply(|list| list.clone())
    }

    pub fn into_inner(self) -> PointerList<T> {
        self.locker.into_inner()
    }

    pub fn len(&self) -> usize {
        self.apply(|list| list.len())
    }

    pub fn is_empty(&self) -> bool {
        self.apply(|list| list.is_empty())
    }

    pub fn get(&self, index: usize) -> Option<Arc<T>> {
        self.apply(|list| list.get(index))
    }

    pub fn get_next(&self) -> Option<Arc<T>> {
        self.apply(|list| list.get_next())
    }

    pub fn get_next_before<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(&Arc<T>) -> bool,
    {
        self.apply(|list| list.get_next_before(f))
    }

    pub fn add(&self, item: Arc<T>) {
        self.apply(|list| list.add(item))
    }

    pub fn add_range<I>(&self, items: I)
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        self.apply(|list| list.add_range(items))
    }

    pub fn remove(&self, item: &Arc<T>) -> bool {
        self.apply(|list| list.remove(item))
    }

    pub fn remove_at(&self, index: usize) -> bool {
        self.apply(|list| list.remove_at(index))
    }

    pub fn remove_all<F>(&self, f: F) -> usize
    where
        F: FnMut(&Arc<T>, usize) -> bool,
    {
        self.apply(|list| list.remove_all(f))
    }

    pub fn clear(&self) {
        self.apply(|list| list.clear())
    }

    pub fn contains(&self, item: &Arc<T>) -> bool {
        self.apply(|list| list.contains(item))
    }

    pub fn insert(&self, item: Arc<T>, index: usize) -> Result<()> {
        self.apply(|list| list.insert(item, index))
    }

    pub fn insert_range<I>(&self, items: I, index: usize) -> Result<()>
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        self.apply(|list| list.insert_range(items, index))
    }

    pub fn reverse(&self) {
        self.apply(|list| list.reverse())
    }

    pub fn sort<F>(&self, f: F)
    where
        F: FnMut(&Arc<T>, &Arc<T>) -> bool,
    {
        self.apply(|list| list.sort(f))
    }

    pub fn find<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        self.apply(|list| list.find(f))
    }

    pub fn find_all<F>(&self, f: F) -> Vec<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        self.apply(|list| list.find_all(f))
    }

    pub fn true_for_all<F>(&self, f: F) -> bool
    where
        F: FnMut(&Arc<T>) -> bool,
    {
        self.apply(|list| list.true_for_all(f))
    }

    /// Finds the first match and removes it within one critical section.
    ///
    pub fn find_and_remove<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        self.apply(|list| list.find_and_remove(f))
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        self.apply(|list| list.for_each(f))
    }

    pub fn to_vec(&self) -> Vec<Arc<T>> {
        self.apply(|list| list.to_vec())
    }
}

// The trait view forwards to the locking methods above; `&mut self` does not
// skip the lock so both paths behave identically.
impl<T> PointerCollection<T> for GuardedPointerList<T> {
    fn len(&self) -> usize {
        GuardedPointerList::len(self)
    }

    fn get(&self, index: usize) -> Option<Arc<T>> {
        GuardedPointerList::get(self, index)
    }

    fn get_next(&mut self) -> Option<Arc<T>> {
        GuardedPointerList::get_next(self)
    }

    fn get_next_before<F>(&mut self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(&Arc<T>) -> bool,
    {
        GuardedPointerList::get_next_before(self, f)
    }

    fn add(&mut self, item: Arc<T>) {
        GuardedPointerList::add(self, item)
    }

    fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        GuardedPointerList::add_range(self, items)
    }

    fn remove(&mut self, item: &Arc<T>) -> bool {
        GuardedPointerList::remove(self, item)
    }

    fn remove_at(&mut self, index: usize) -> bool {
        GuardedPointerList::remove_at(self, index)
    }

    fn remove_all<F>(&mut self, f: F) -> usize
    where
        F: FnMut(&Arc<T>, usize) -> bool,
    {
        GuardedPointerList::remove_all(self, f)
    }

    fn clear(&mut self) {
        GuardedPointerList::clear(self)
    }

    fn contains(&self, item: &Arc<T>) -> bool {
        GuardedPointerList::contains(self, item)
    }

    fn insert(&mut self, item: Arc<T>, index: usize) -> Result<()> {
        GuardedPointerList::insert(self, item, index)
    }

    fn insert_range<I>(&mut self, items: I, index: usize) -> Result<()>
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        GuardedPointerList::insert_range(self, items, index)
    }

    fn reverse(&mut self) {
        GuardedPointerList::reverse(self)
    }

    fn sort<F>(&mut self, f: F)
    where
        F: FnMut(&Arc<T>, &Arc<T>) -> bool,
    {
        GuardedPointerList::sort(self, f)
    }

    fn find<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        GuardedPointerList::find(self, f)
    }

    fn find_all<F>(&self, f: F) -> Vec<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        GuardedPointerList::find_all(self, f)
    }

    fn true_for_all<F>(&self, f: F) -> bool
    where
        F: FnMut(&Arc<T>) -> bool,
    {
        GuardedPointerList::true_for_all(self, f)
    }

    fn find_and_remove<F>(&mut self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        GuardedPointerList::find_and_remove(self, f)
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        GuardedPointerList::for_each(self, f)
    }

    fn to_vec(&self) -> Vec<Arc<T>> {
        GuardedPointerList::to_vec(self)
    }
}

impl<T> Default for GuardedPointerList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<PointerList<T>> for GuardedPointerList<T> {
    fn from(list: PointerList<T>) -> Self {
        GuardedPointerList {
            locker: Locker::new(list),
        }
    }
}

impl<T> FromIterator<Arc<T>> for GuardedPointerList<T> {
    fn from_iter<I: IntoIterator<Item = Arc<T>>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<PointerList<T>>())
    }
}

impl<T: fmt::Debug> fmt::Debug for GuardedPointerList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedPointerList")
            .field("list", &self.locker)
            .finish()
    }
}
