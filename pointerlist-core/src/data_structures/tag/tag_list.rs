use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::data_structures::tag::{RemoveCurrent, TagCollection};
use crate::data_structures::{PointerCollection, PointerList};
use crate::error::Result;

/// Pointer lists partitioned by string tag.
///
/// `TagList` does no locking; see
/// [`GuardedTagList`](crate::data_structures::GuardedTagList) for a variant
/// that serializes every call on one partition-wide lock.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use pointerlist_core::{TagCollection, TagList};
///
/// let mut tags = TagList::new();
/// tags.add("red", Arc::new(1));
/// tags.add("red", Arc::new(2));
/// tags.add("blue", Arc::new(3));
///
/// assert_eq!(tags.tag_count(), 2);
/// assert_eq!(tags.total_count(), 3);
///
/// tags.clear_list("red");
/// assert_eq!(tags.tag_count(), 2);
/// assert_eq!(tags.total_count(), 1);
/// ```
///
pub struct TagList<T> {
    lists: HashMap<String, PointerList<T>>,
}

impl<T> TagList<T> {
    pub fn new() -> Self {
        TagList {
            lists: HashMap::new(),
        }
    }

    /// Borrows the list for `tag`.
    ///
    pub fn list(&self, tag: &str) -> Option<&PointerList<T>> {
        self.lists.get(tag)
    }

    /// Mutably borrows the list for `tag`.
    ///
    pub fn list_mut(&mut self, tag: &str) -> Option<&mut PointerList<T>> {
        self.lists.get_mut(tag)
    }

    /// Iterates over the known tags in unspecified order.
    ///
    pub fn tags(&self) -> hash_map::Keys<'_, String, PointerList<T>> {
        self.lists.keys()
    }

    fn list_or_create(&mut self, tag: &str) -> &mut PointerList<T> {
        if !self.lists.contains_key(tag) {
            debug!(tag, "creating tag list");
        }
        self.lists.entry(tag.to_owned()).or_default()
    }
}

impl<T> TagCollection<T> for TagList<T> {
    fn add(&mut self, tag: &str, item: Arc<T>) {
        self.list_or_create(tag).add(item);
    }

    fn get(&self, tag: &str) -> Option<PointerList<T>> {
        self.lists.get(tag).cloned()
    }

    fn get_next(&mut self, tag: &str) -> Option<Arc<T>> {
        self.lists.get_mut(tag)?.get_next()
    }

    fn insert(&mut self, index: usize, tag: &str, item: Arc<T>) -> Result<()> {
        self.list_or_create(tag).insert(item, index)
    }

    fn remove(&mut self, tag: &str, item: &Arc<T>) -> bool {
        self.lists
            .get_mut(tag)
            .is_some_and(|list| list.remove(item))
    }

    fn remove_at(&mut self, tag: &str, index: usize) -> bool {
        self.lists
            .get_mut(tag)
            .is_some_and(|list| list.remove_at(index))
    }

    fn clear(&mut self) {
        debug!(tags = self.lists.len(), "clearing tag lists");
        self.lists.clear();
    }

    fn clear_list(&mut self, tag: &str) {
        if let Some(list) = self.lists.get_mut(tag) {
            trace!(tag, len = list.len(), "emptying tag list");
            list.clear();
        }
    }

    fn contains(&self, tag: &str, item: &Arc<T>) -> bool {
        self.lists.get(tag).is_some_and(|list| list.contains(item))
    }

    fn tag_count(&self) -> usize {
        self.lists.len()
    }

    fn total_count(&self) -> usize {
        self.lists.values().map(|list| list.len()).sum()
    }

    fn map_count(&self) -> HashMap<String, usize> {
        self.lists
            .iter()
            .map(|(tag, list)| (tag.clone(), list.len()))
            .collect()
    }

    fn map_count_select<F>(&self, mut f: F) -> HashMap<String, usize>
    where
        F: FnMut(&str, usize, &Arc<T>) -> bool,
    {
        self.lists
            .iter()
            .map(|(tag, list)| {
                let count = list
                    .iter()
                    .enumerate()
                    .filter(|(index, item)| f(tag.as_str(), *index, *item))
                    .count();
                (tag.clone(), count)
            })
            .collect()
    }

    fn count_select<F>(&self, mut f: F) -> usize
    where
        F: FnMut(&str, usize, &Arc<T>) -> bool,
    {
        self.lists
            .iter()
            .map(|(tag, list)| {
                list.iter()
                    .enumerate()
                    .filter(|(index, item)| f(tag.as_str(), *index, *item))
                    .count()
            })
            .sum()
    }

    fn find<F>(&self, mut f: F) -> Option<Arc<T>>
    where
        F: FnMut(&Arc<T>) -> bool,
    {
        self.lists
            .values()
            .find_map(|list| list.iter().find(|item| f(*item)).cloned())
    }

    fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, usize, &Arc<T>, &mut RemoveCurrent) -> bool,
    {
        for (tag, list) in self.lists.iter_mut() {
            let mut live = 0;
            let mut visit = 0;

            while let Some(current) = list.get(live) {
                let mut remove = RemoveCurrent::new();
                let proceed = f(tag.as_str(), visit, &current, &mut remove);

                // A removal shifts the next element into `live`.
                //
                if remove.is_requested() {
                    list.remove_at(live);
                } else {
                    live += 1;
                }
                visit += 1;

                if !proceed {
                    return;
                }
            }
        }
    }

    fn to_map(&self) -> HashMap<String, PointerList<T>> {
        self.lists.clone()
    }
}

impl<T> Default for TagList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TagList<T> {
    fn clone(&self) -> Self {
        TagList {
            lists: self.lists.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TagList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagList")
            .field("lists", &self.lists)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_borrow_is_live() {
        let mut tags = TagList::new();
        tags.add("a", Arc::new(1));

        tags.list_mut("a").unwrap().add(Arc::new(2));
        assert_eq!(tags.list("a").unwrap().len(), 2);
        assert!(tags.list("b").is_none());
    }

    #[test]
    fn test_get_is_a_copy() {
        let mut tags = TagList::new();
        tags.add("a", Arc::new(1));

        let mut copy = tags.get("a").unwrap();
        copy.add(Arc::new(2));
        assert_eq!(tags.total_count(), 1);

        // The live list is reached through list_mut.
        //
        tags.list_mut("a").unwrap().add(Arc::new(3));
        assert_eq!(tags.total_count(), 2);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_failed_insert_keeps_created_tag() {
        let mut tags: TagList<i32> = TagList::new();
        assert!(tags.insert(3, "a", Arc::new(1)).is_err());
        assert_eq!(tags.tag_count(), 1);
        assert_eq!(tags.total_count(), 0);
    }

    #[test]
    fn test_clear_list_unknown_tag_is_noop() {
        let mut tags: TagList<i32> = TagList::new();
        tags.clear_list("missing");
        assert_eq!(tags.tag_count(), 0);
    }

    #[test]
    fn test_tags_iterator() {
        let mut tags = TagList::new();
        tags.add("a", Arc::new(1));
        tags.add("b", Arc::new(2));

        let mut names: Vec<_> = tags.tags().cloned().collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
    }
}
