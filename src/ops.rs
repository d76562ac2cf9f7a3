//! The five sequence operations.
//!
//! Each operation borrows its input, leaves it untouched, and returns a
//! freshly allocated output. Counts are taken as `i64` so a negative value
//! from a caller is reported as [`PipelineError::InvalidCount`] rather than
//! silently wrapping.

use std::hash::Hash;

use tracing::debug;

use crate::error::count_arg;
use crate::{Pipeline, PipelineError};

/// Keep, in input order, exactly the items matching `predicate`.
pub fn filter<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let out: Vec<T> = Pipeline::from_slice(items).filter(predicate).collect();
    debug!(input = items.len(), output = out.len(), "filter");
    out
}

/// Project every item to a key and return each key once, in order of
/// first appearance.
pub fn distinct_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<K>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let out: Vec<K> = Pipeline::new(items.iter())
        .map(|item| key(item))
        .distinct_by(K::clone)
        .collect();
    debug!(input = items.len(), output = out.len(), "distinct_by_key");
    out
}

/// Filter by `predicate`, then keep at most the first `n` matches.
pub fn limit<T, P>(items: &[T], predicate: P, n: i64) -> Result<Vec<T>, PipelineError>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let n = count_arg("limit", n)?;
    let out: Vec<T> = Pipeline::from_slice(items)
        .filter(predicate)
        .take(n)
        .collect();
    debug!(input = items.len(), n, output = out.len(), "limit");
    Ok(out)
}

/// All items ordered by descending key; equal keys keep input order.
pub fn sorted_desc<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let out: Vec<T> = Pipeline::from_slice(items)
        .sorted_by_key_desc(key)
        .collect();
    debug!(input = items.len(), "sorted_desc");
    out
}

/// Everything from index `n` onward.
pub fn skip<T: Clone>(items: &[T], n: i64) -> Result<Vec<T>, PipelineError> {
    let n = count_arg("skip", n)?;
    let out: Vec<T> = Pipeline::from_slice(items).skip(n).collect();
    debug!(input = items.len(), n, output = out.len(), "skip");
    Ok(out)
}
