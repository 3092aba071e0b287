// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lazy filtering for keyed iterators.
//!
//! [`FilterIterator`] adapts any iterator of `(key, value)` pairs, yielding
//! only the pairs a [`KeyPredicate`] accepts while preserving the original
//! keys and relative order. Nothing is buffered or memoized; the predicate
//! runs again on every traversal of a [`FilteredView`].

/// Decides whether a keyed element passes the filter.
///
/// Blanket-implemented for `FnMut(&V, &K) -> bool` closures; standalone
/// implementations can carry their own state.
pub trait KeyPredicate<K, V> {
    fn test(&mut self, value: &V, key: &K) -> bool;
}

impl<K, V, F> KeyPredicate<K, V> for F
where
    F: FnMut(&V, &K) -> bool,
{
    fn test(&mut self, value: &V, key: &K) -> bool {
        self(value, key)
    }
}

/// Lazy adapter yielding only the pairs the predicate accepts.
#[derive(Debug, Clone)]
pub struct FilterIterator<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> FilterIterator<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<K, V, I, P> Iterator for FilterIterator<I, P>
where
    I: Iterator<Item = (K, V)>,
    P: KeyPredicate<K, V>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (key, value) = self.iter.next()?;
            if self.predicate.test(&value, &key) {
                return Some((key, value));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Everything may be rejected; only the upper bound survives.
        (0, self.iter.size_hint().1)
    }
}

/// Filtering entry point for any keyed iterator.
///
/// Index-keyed sequences compose with `enumerate`:
///
/// ```
/// use formwidgets::filter::KeyedIteratorExt;
///
/// let items = [1, 2, 3];
/// let kept: Vec<_> = items
///     .iter()
///     .enumerate()
///     .filter_keyed(|value: &&i32, _key: &usize| **value == 2)
///     .collect();
/// assert_eq!(kept, vec![(1, &2)]);
/// ```
pub trait KeyedIteratorExt<K, V>: Iterator<Item = (K, V)> + Sized {
    fn filter_keyed<P: KeyPredicate<K, V>>(self, predicate: P) -> FilterIterator<Self, P> {
        FilterIterator::new(self, predicate)
    }
}

impl<K, V, I: Iterator<Item = (K, V)>> KeyedIteratorExt<K, V> for I {}

/// A non-materialized filtered view over a re-iterable keyed source.
///
/// Each traversal starts from the source again with a fresh clone of the
/// predicate; results are never cached.
#[derive(Debug, Clone)]
pub struct FilteredView<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> FilteredView<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<'a, S, K, V, P> IntoIterator for &'a FilteredView<S, P>
where
    &'a S: IntoIterator<Item = (K, V)>,
    P: KeyPredicate<K, V> + Clone,
{
    type Item = (K, V);
    type IntoIter = FilterIterator<<&'a S as IntoIterator>::IntoIter, P>;

    fn into_iter(self) -> Self::IntoIter {
        FilterIterator::new(self.source.into_iter(), self.predicate.clone())
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
