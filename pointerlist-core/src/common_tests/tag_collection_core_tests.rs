use std::collections::HashMap;
use std::sync::Arc;

use crate::data_structures::{PointerCollection, TagCollection};
use crate::error::PointerListError;

fn tag_values<C>(collection: &C, tag: &str) -> Option<Vec<i32>>
where
    C: TagCollection<i32>,
{
    collection
        .get(tag)
        .map(|list| list.iter().map(|x| **x).collect())
}

/// Test lazy creation and per-tag lookups
pub fn test_basic_operations<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    assert_eq!(collection.tag_count(), 0);
    assert!(collection.get("a").is_none());

    let one = Arc::new(1);
    collection.add("a", Arc::clone(&one));
    collection.add("a", Arc::new(2));
    collection.add("b", Arc::new(3));

    assert_eq!(collection.tag_count(), 2);
    assert_eq!(collection.total_count(), 3);
    assert_eq!(tag_values(&collection, "a"), Some(vec![1, 2]));
    assert_eq!(tag_values(&collection, "b"), Some(vec![3]));

    assert!(collection.contains("a", &one));
    assert!(!collection.contains("b", &one));
    assert!(!collection.contains("missing", &one));
    assert!(!collection.contains("a", &Arc::new(1)));
}

/// Test round-robin dispensing per tag
pub fn test_get_next<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    assert!(collection.get_next("a").is_none());
    assert_eq!(collection.tag_count(), 0);

    collection.add("a", Arc::new(1));
    collection.add("a", Arc::new(2));
    collection.add("b", Arc::new(10));

    let dispensed: Vec<i32> = (0..5).map(|_| *collection.get_next("a").unwrap()).collect();
    assert_eq!(dispensed, vec![1, 2, 1, 2, 1]);

    // Cursors are independent per tag.
    //
    assert_eq!(collection.get_next("b").map(|x| *x), Some(10));
    assert_eq!(collection.get_next("a").map(|x| *x), Some(2));
}

/// Test positional insert into a tag
pub fn test_insert<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();

    collection.insert(0, "a", Arc::new(2)).unwrap();
    collection.insert(0, "a", Arc::new(1)).unwrap();
    collection.insert(2, "a", Arc::new(3)).unwrap();
    assert_eq!(tag_values(&collection, "a"), Some(vec![1, 2, 3]));

    assert_eq!(
        collection.insert(5, "a", Arc::new(9)),
        Err(PointerListError::IndexOutOfRange { index: 5, len: 3 })
    );
    assert_eq!(collection.total_count(), 3);
}

/// Test remove and remove_at, including unknown tags
pub fn test_remove<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    let target = Arc::new(2);
    collection.add("a", Arc::new(1));
    collection.add("a", Arc::clone(&target));
    collection.add("a", Arc::new(3));

    assert!(!collection.remove("b", &target));
    assert!(!collection.remove_at("b", 0));

    assert!(collection.remove("a", &target));
    assert!(!collection.remove("a", &target));
    assert_eq!(tag_values(&collection, "a"), Some(vec![1, 3]));

    assert!(!collection.remove_at("a", 2));
    assert!(collection.remove_at("a", 0));
    assert_eq!(tag_values(&collection, "a"), Some(vec![3]));
}

/// Test clear_list keeps the tag while clear forgets everything
pub fn test_clear_list_and_clear<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    collection.add("a", Arc::new(1));
    collection.add("a", Arc::new(2));
    collection.add("b", Arc::new(3));

    collection.clear_list("a");
    assert_eq!(collection.tag_count(), 2);
    assert_eq!(collection.total_count(), 1);
    assert_eq!(tag_values(&collection, "a"), Some(vec![]));
    assert_eq!(collection.map_count().get("a"), Some(&0));
    assert!(collection.get_next("a").is_none());

    // An emptied tag can be populated again.
    //
    collection.add("a", Arc::new(4));
    assert_eq!(tag_values(&collection, "a"), Some(vec![4]));

    collection.clear();
    assert_eq!(collection.tag_count(), 0);
    assert_eq!(collection.total_count(), 0);
    assert!(collection.get("a").is_none());
    assert!(collection.get("b").is_none());
}

/// Test the aggregate counters
pub fn test_counts<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    for i in 0..10 {
        collection.add("low", Arc::new(i));
    }
    for i in 10..15 {
        collection.add("high", Arc::new(i));
    }

    let expected: HashMap<String, usize> =
        HashMap::from([("low".to_string(), 10), ("high".to_string(), 5)]);
    assert_eq!(collection.map_count(), expected);
    assert_eq!(collection.total_count(), 15);

    let evens = collection.map_count_select(|_, _, x| **x % 2 == 0);
    assert_eq!(evens.get("low"), Some(&5));
    assert_eq!(evens.get("high"), Some(&3));
    assert_eq!(collection.count_select(|_, _, x| **x % 2 == 0), 8);

    // Tag and index are passed through to the predicate.
    //
    assert_eq!(collection.count_select(|tag, _, _| tag == "high"), 5);
    assert_eq!(collection.count_select(|_, index, _| index == 0), 2);

    let none = collection.map_count_select(|_, _, _| false);
    assert_eq!(none.len(), 2);
    assert!(none.values().all(|&n| n == 0));
}

/// Test find across tags
pub fn test_find<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    assert!(collection.find(|_| true).is_none());

    collection.add("a", Arc::new(1));
    collection.add("b", Arc::new(20));
    collection.add("c", Arc::new(3));

    assert_eq!(collection.find(|x| **x > 10).map(|x| *x), Some(20));
    assert!(collection.find(|x| **x > 100).is_none());

    let small = collection.find(|x| **x < 10).map(|x| *x);
    assert!(matches!(small, Some(1) | Some(3)));
}

/// Test that for_each visits every element exactly once
pub fn test_for_each_visits_all<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    for i in 0..12 {
        collection.add(&format!("tag-{}", i % 3), Arc::new(i));
    }

    let mut seen = Vec::new();
    collection.for_each(|tag, index, x, _| {
        assert_eq!(tag, format!("tag-{}", **x % 3));
        assert_eq!(index, (**x / 3) as usize);
        seen.push(**x);
        true
    });
    seen.sort_unstable();
    assert_eq!(seen, (0..12).collect::<Vec<_>>());
}

/// Test removal of single-element tags during iteration
///
/// Every element sits at index 0 of its own tag, so an "even index" filter
/// removes them all and the second pass visits nothing.
///
pub fn test_for_each_remove_single_element_tags<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    for i in 0..25 {
        collection.add(&i.to_string(), Arc::new(i));
    }

    let mut visited = 0;
    collection.for_each(|_, index, _, remove| {
        visited += 1;
        if index % 2 == 0 {
            remove.remove();
        }
        true
    });
    assert_eq!(visited, 25);

    let mut revisited = 0;
    collection.for_each(|_, _, _, _| {
        revisited += 1;
        true
    });
    assert_eq!(revisited, 0);
    assert_eq!(collection.tag_count(), 25);
    assert_eq!(collection.total_count(), 0);
}

/// Test removal of even positions within one tag during iteration
pub fn test_for_each_remove_even_positions<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    for i in 0..25 {
        collection.add("0", Arc::new(i));
    }

    let mut visits = Vec::new();
    collection.for_each(|_, index, x, remove| {
        assert_eq!(index, **x as usize);
        visits.push(index);
        if index % 2 == 0 {
            remove.remove();
        }
        true
    });
    assert_eq!(visits, (0..25).collect::<Vec<_>>());

    let mut survivors = Vec::new();
    collection.for_each(|_, index, x, _| {
        survivors.push((index, **x));
        true
    });
    let expected: Vec<(usize, i32)> = (1..25).step_by(2).enumerate().collect();
    assert_eq!(survivors, expected);
}

/// Test that returning false stops the traversal of every tag
pub fn test_for_each_early_exit<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    for i in 0..10 {
        collection.add(&format!("tag-{}", i % 2), Arc::new(i));
    }

    let mut visited = 0;
    collection.for_each(|_, _, _, remove| {
        visited += 1;
        if visited == 3 {
            remove.remove();
            return false;
        }
        true
    });
    assert_eq!(visited, 3);

    // The removal requested on the stopping visit still applies.
    //
    assert_eq!(collection.total_count(), 9);
}

/// Test to_map returns copies of every list
pub fn test_to_map<C>()
where
    C: TagCollection<i32> + Default,
{
    let mut collection = C::default();
    let shared = Arc::new(1);
    collection.add("a", Arc::clone(&shared));
    collection.add("b", Arc::new(2));

    let mut map = collection.to_map();
    assert_eq!(map.len(), 2);
    assert!(map["a"].contains(&shared));

    if let Some(list) = map.get_mut("a") {
        list.clear();
    }
    assert!(collection.contains("a", &shared));
}
