use std::fmt;
use std::slice;
use std::sync::Arc;

use crate::data_structures::PointerCollection;
use crate::error::{PointerListError, Result};

/// Growable list of shared elements compared by identity.
///
/// Holds the elements in insertion order plus a round-robin cursor used by
/// [`get_next`](PointerCollection::get_next).
///
/// `PointerList` does no locking. Mutation needs `&mut self`, so sharing one
/// between threads requires the caller's own synchronization; use
/// [`GuardedPointerList`](crate::data_structures::GuardedPointerList) for a
/// self-locking variant.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use pointerlist_core::{PointerCollection, PointerList};
///
/// let mut list = PointerList::new();
/// let a = Arc::new("a");
/// list.add(Arc::clone(&a));
/// list.add(Arc::new("b"));
///
/// assert!(list.contains(&a));
/// assert!(!list.contains(&Arc::new("a"))); // equal value, different element
///
/// assert_eq!(list.get_next().as_deref(), Some(&"a"));
/// assert_eq!(list.get_next().as_deref(), Some(&"b"));
/// assert_eq!(list.get_next().as_deref(), Some(&"a"));
/// ```
///
pub struct PointerList<T> {
    items: Vec<Arc<T>>,
    next_index: usize,
}

impl<T> PointerList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        PointerList {
            items: Vec::new(),
            next_index: 0,
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        PointerList {
            items: Vec::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Iterates over the elements in order.
    ///
    pub fn iter(&self) -> slice::Iter<'_, Arc<T>> {
        self.items.iter()
    }

    /// The elements as a slice.
    ///
    pub fn as_slice(&self) -> &[Arc<T>] {
        &self.items
    }

    // Round-robin dispense without bounds on the number of calls.
    //
    fn dispense(&mut self) -> Option<Arc<T>> {
        if self.items.is_empty() {
            return None;
        }

        // Removals may have shrunk the list under the cursor.
        //
        if self.next_index >= self.items.len() {
            self.next_index = 0;
        }

        let selected = Arc::clone(&self.items[self.next_index]);
        self.next_index += 1;
        if self.next_index == self.items.len() {
            self.next_index = 0;
        }

        Some(selected)
    }

    fn check_insert_index(&self, index: usize) -> Result<()> {
        if index > self.items.len() {
            return Err(PointerListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    fn position(&self, item: &Arc<T>) -> Option<usize> {
        self.items.iter().position(|x| Arc::ptr_eq(x, item))
    }
}

impl<T> PointerCollection<T> for PointerList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<Arc<T>> {
        self.items.get(index).cloned()
    }

    fn get_next(&mut self) -> Option<Arc<T>> {
        self.dispense()
    }

    fn get_next_before<F>(&mut self, mut f: F) -> Option<Arc<T>>
    where
        F: FnMut(&Arc<T>) -> bool,
    {
        // One full rotation at most.
        //
        for _ in 0..self.items.len() {
            let current = self.dispense()?;
            if f(&current) {
                return Some(current);
            }
        }

        None
    }

    fn add(&mut self, item: Arc<T>) {
        self.items.push(item);
    }

    fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        self.items.extend(items);
    }

    fn remove(&mut self, item: &Arc<T>) -> bool {
        match self.position(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }

        self.items.remove(index);
        true
    }

    fn remove_all<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&Arc<T>, usize) -> bool,
    {
        let before = self.items.len();
        let mut visit = 0;
        self.items.retain(|item| {
            let remove = f(item, visit);
            visit += 1;
            !remove
        });
        before - self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
        self.next_index = 0;
    }

    fn contains(&self, item: &Arc<T>) -> bool {
        self.position(item).is_some()
    }

    fn insert(&mut self, item: Arc<T>, index: usize) -> Result<()> {
        self.check_insert_index(index)?;
        self.items.insert(index, item);
        Ok(())
    }

    fn insert_range<I>(&mut self, items: I, index: usize) -> Result<()>
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        self.check_insert_index(index)?;
        self.items.splice(index..index, items);
        Ok(())
    }

    fn reverse(&mut self) {
        self.items.reverse();
    }

    fn sort<F>(&mut self, mut f: F)
    where
        F: FnMut(&Arc<T>, &Arc<T>) -> bool,
    {
        let n = self.items.len();
        for j in 0..n {
            for i in 0..n {
                if f(&self.items[i], &self.items[j]) {
                    self.items.swap(i, j);
                }
            }
        }
    }

    fn find<F>(&self, mut f: F) -> Option<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .find(|(index, item)| f(*index, *item))
            .map(|(_, item)| Arc::clone(item))
    }

    fn find_all<F>(&self, mut f: F) -> Vec<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(index, item)| f(*index, *item))
            .map(|(_, item)| Arc::clone(item))
            .collect()
    }

    fn true_for_all<F>(&self, f: F) -> bool
    where
        F: FnMut(&Arc<T>) -> bool,
    {
        self.items.iter().all(f)
    }

    fn find_and_remove<F>(&mut self, mut f: F) -> Option<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        let index = self
            .items
            .iter()
            .enumerate()
            .position(|(index, item)| f(index, item))?;
        Some(self.items.remove(index))
    }

    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(usize, &Arc<T>) -> bool,
    {
        for (index, item) in self.items.iter().enumerate() {
            if !f(index, item) {
                break;
            }
        }
    }

    fn to_vec(&self) -> Vec<Arc<T>> {
        self.items.clone()
    }
}

impl<T> Default for PointerList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Cloning shares the elements and copies the cursor; `T` need not be Clone.
impl<T> Clone for PointerList<T> {
    fn clone(&self) -> Self {
        PointerList {
            items: self.items.clone(),
            next_index: self.next_index,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PointerList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerList")
            .field("items", &self.items)
            .field("next_index", &self.next_index)
            .finish()
    }
}

impl<T> FromIterator<Arc<T>> for PointerList<T> {
    fn from_iter<I: IntoIterator<Item = Arc<T>>>(iter: I) -> Self {
        PointerList {
            items: iter.into_iter().collect(),
            next_index: 0,
        }
    }
}

impl<T> Extend<Arc<T>> for PointerList<T> {
    fn extend<I: IntoIterator<Item = Arc<T>>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<'a, T> IntoIterator for &'a PointerList<T> {
    type Item = &'a Arc<T>;
    type IntoIter = slice::Iter<'a, Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
