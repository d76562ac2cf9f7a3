//! Chainable pipeline over an iterator of items.
//!
//! A `Pipeline` wraps any iterator and exposes the stage adapters used to
//! build record transformations. Each adapter consumes the pipeline and
//! returns a new one, so stages read top to bottom:
//!
//! ```
//! use record_streams::{Pipeline, get_records};
//!
//! let records = get_records();
//! let names: Vec<String> = Pipeline::from_slice(&records)
//!     .filter(|r| r.is_from("北京大学"))
//!     .skip(1)
//!     .map(|r| r.name)
//!     .collect();
//!
//! assert_eq!(names, vec!["小明", "小红"]);
//! ```

use std::cmp::Reverse;
use std::collections::HashSet;
use std::hash::Hash;
use std::iter::{Cloned, Filter, Inspect, Map, Skip, Take};
use std::slice;

/// A stage chain over an underlying iterator.
#[derive(Debug, Clone)]
pub struct Pipeline<I> {
    iter: I,
}

impl<'a, T: Clone + 'a> Pipeline<Cloned<slice::Iter<'a, T>>> {
    /// Start a pipeline over a borrowed slice, cloning items as they flow.
    pub fn from_slice(items: &'a [T]) -> Self {
        Self::new(items.iter().cloned())
    }
}

impl<I: Iterator> Pipeline<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Keep items for which `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Pipeline<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Pipeline::new(self.iter.filter(predicate))
    }

    pub fn map<B, F>(self, f: F) -> Pipeline<Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        Pipeline::new(self.iter.map(f))
    }

    /// Observe each item without changing it.
    pub fn inspect<F>(self, f: F) -> Pipeline<Inspect<I, F>>
    where
        F: FnMut(&I::Item),
    {
        Pipeline::new(self.iter.inspect(f))
    }

    /// Keep at most the first `n` items.
    pub fn take(self, n: usize) -> Pipeline<Take<I>> {
        Pipeline::new(self.iter.take(n))
    }

    /// Drop the first `n` items.
    pub fn skip(self, n: usize) -> Pipeline<Skip<I>> {
        Pipeline::new(self.iter.skip(n))
    }

    /// Keep the first item seen for each distinct key, in arrival order.
    pub fn distinct_by<K, F>(self, key: F) -> Pipeline<DistinctBy<I, K, F>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        Pipeline::new(DistinctBy {
            iter: self.iter,
            key,
            seen: HashSet::new(),
        })
    }

    /// Order all items by descending key.
    ///
    /// The sort is stable: items with equal keys keep their arrival order.
    /// This stage buffers the whole stream before yielding anything.
    pub fn sorted_by_key_desc<K, F>(self, mut key: F) -> Pipeline<std::vec::IntoIter<I::Item>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let mut items: Vec<I::Item> = self.iter.collect();
        items.sort_by_cached_key(|item| Reverse(key(item)));
        Pipeline::new(items.into_iter())
    }
}

impl<I: Iterator> Iterator for Pipeline<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator adapter returned by [`Pipeline::distinct_by`].
pub struct DistinctBy<I, K, F> {
    iter: I,
    key: F,
    seen: HashSet<K>,
}

impl<I, K, F> Iterator for DistinctBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Record, get_records};

    fn ids(records: &[Record]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_passthrough() {
        let records = get_records();
        let out: Vec<Record> = Pipeline::from_slice(&records).collect();
        assert_eq!(out, records);
    }

    #[test]
    fn test_filter_take_skip_chain() {
        let records = get_records();
        let out: Vec<Record> = Pipeline::from_slice(&records)
            .filter(|r| r.has_even_age())
            .skip(1)
            .take(3)
            .collect();
        // even ages: ids 1,2,4,6,7,8,10
        assert_eq!(ids(&out), vec![2, 4, 6]);
    }

    #[test]
    fn test_map_projects() {
        let out: Vec<u32> = Pipeline::new(get_records().into_iter())
            .map(|r| r.age)
            .take(3)
            .collect();
        assert_eq!(out, vec![10, 12, 15]);
    }

    #[test]
    fn test_distinct_by_keeps_first_occurrence() {
        let records = get_records();
        let out: Vec<Record> = Pipeline::from_slice(&records)
            .distinct_by(|r| r.school.clone())
            .collect();
        assert_eq!(ids(&out), vec![1, 5, 8]);
    }

    #[test]
    fn test_distinct_by_on_plain_values() {
        let out: Vec<i32> = Pipeline::new(vec![3, 1, 3, 2, 1, 3].into_iter())
            .distinct_by(|n| *n)
            .collect();
        assert_eq!(out, vec![3, 1, 2]);
    }

    #[test]
    fn test_sorted_by_key_desc_is_stable() {
        let records = get_records();
        let out: Vec<Record> = Pipeline::from_slice(&records)
            .sorted_by_key_desc(|r| r.age)
            .collect();
        assert_eq!(ids(&out), vec![5, 9, 6, 3, 7, 8, 2, 4, 1, 10]);
    }

    #[test]
    fn test_inspect_sees_every_item() {
        let records = get_records();
        let mut seen = 0;
        let out = Pipeline::from_slice(&records)
            .inspect(|_| seen += 1)
            .filter(|r| r.is_from("浙江大学"))
            .count();
        assert_eq!(out, 3);
        assert_eq!(seen, 10);
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<Record> = vec![];
        let out: Vec<Record> = Pipeline::from_slice(&records)
            .sorted_by_key_desc(|r| r.age)
            .distinct_by(|r| r.id)
            .skip(3)
            .collect();
        assert!(out.is_empty());
    }
}
