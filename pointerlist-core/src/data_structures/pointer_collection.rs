use std::sync::Arc;

use crate::error::Result;

/// Common API of the ordered pointer collections.
///
/// Elements are `Arc<T>` and are compared by identity (`Arc::ptr_eq`), never
/// by value. Two equal values in separate allocations are different elements.
///
/// # Design Philosophy
///
/// ```text
/// User Code / generic test suites
///    ↓ uses
/// PointerCollection (this trait)   ← Common ordered-collection contract
///    ↓ implemented by
/// GuardedPointerList               ← One mutex-held critical section per call
/// PointerList                      ← The algorithms, no locking
/// ```
///
/// Mutating methods take `&mut self`. `GuardedPointerList` additionally
/// offers every method through `&self` for sharing across threads.
///
/// # Failure semantics
///
/// Only `insert` and `insert_range` return an error. Every other miss
/// (index out of range, element not found, empty list) is reported through
/// the `bool` or `Option` result.
///
pub trait PointerCollection<T> {
    /// Returns the number of elements.
    ///
    fn len(&self) -> usize;

    /// Returns true if the collection has no elements.
    ///
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    ///
    fn get(&self, index: usize) -> Option<Arc<T>>;

    /// Dispenses the element under the round-robin cursor and advances the
    /// cursor, wrapping to the start after the last element.
    ///
    /// Returns `None` and leaves the cursor untouched when empty.
    ///
    fn get_next(&mut self) -> Option<Arc<T>>;

    /// Calls `get_next` at most `len()` times and returns the first
    /// dispensed element accepted by `f`.
    ///
    fn get_next_before<F>(&mut self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(&Arc<T>) -> bool;

    /// Appends an element.
    ///
    fn add(&mut self, item: Arc<T>);

    /// Appends every element of `items`, preserving their order.
    ///
    fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Arc<T>>;

    /// Removes the first occurrence of `item` (by identity).
    ///
    fn remove(&mut self, item: &Arc<T>) -> bool;

    /// Removes the element at `index`. Returns false if out of range.
    ///
    fn remove_at(&mut self, index: usize) -> bool;

    /// Removes every element for which `f(element, visit)` holds and returns
    /// how many were removed.
    ///
    /// `visit` is the element's ordinal in the traversal (0, 1, 2, ... over
    /// all visited elements), not its shrinking live index.
    ///
    fn remove_all<F>(&mut self, f: F) -> usize
    where
        F: FnMut(&Arc<T>, usize) -> bool;

    /// Removes all elements and resets the round-robin cursor.
    ///
    fn clear(&mut self);

    /// Determines whether `item` (by identity) is in the collection.
    ///
    fn contains(&self, item: &Arc<T>) -> bool;

    /// Inserts `item` at `index`. Valid indexes are `0..=len()`.
    ///
    fn insert(&mut self, item: Arc<T>, index: usize) -> Result<()>;

    /// Inserts `items` at `index`, keeping their relative order.
    ///
    /// Valid indexes are `0..=len()`. An empty `items` is a no-op success.
    ///
    fn insert_range<I>(&mut self, items: I, index: usize) -> Result<()>
    where
        I: IntoIterator<Item = Arc<T>>;

    /// Reverses the order of the elements in place.
    ///
    fn reverse(&mut self);

    /// Sorts with a "should swap" predicate.
    ///
    /// For every pair of positions `(i, j)` visited as `for j in 0..n { for i
    /// in 0..n { .. } }`, the elements are swapped when `f(list[i], list[j])`
    /// returns true. `|l, r| l > r` therefore sorts ascending. The cost is
    /// always O(n²) and non-transitive predicates produce whatever order this
    /// double scan yields.
    ///
    fn sort<F>(&mut self, f: F)
    where
        F: FnMut(&Arc<T>, &Arc<T>) -> bool;

    /// Returns the first element for which `f(index, element)` holds.
    ///
    fn find<F>(&self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool;

    /// Returns every element for which `f(index, element)` holds.
    ///
    fn find_all<F>(&self, f: F) -> Vec<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool;

    /// Determines whether `f` holds for every element. True when empty.
    ///
    fn true_for_all<F>(&self, f: F) -> bool
    where
        F: FnMut(&Arc<T>) -> bool;

    /// Removes and returns the first element for which `f(index, element)`
    /// holds.
    ///
    fn find_and_remove<F>(&mut self, f: F) -> Option<Arc<T>>
    where
        F: FnMut(usize, &Arc<T>) -> bool;

    /// Visits the elements in order until `f` returns false.
    ///
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(usize, &Arc<T>) -> bool;

    /// Copies the current elements into a `Vec`.
    ///
    fn to_vec(&self) -> Vec<Arc<T>>;
}
