//! Partitioning a sequence into runs of equal key.
//!
//! [`group_by`] scans its input once, front to back. A new group starts whenever
//! the key of an element differs from the key of the element before it, so the
//! input is expected to be ordered by key already; nothing is sorted or merged.
//! Unordered input is still well defined, it just produces one group per maximal
//! run:
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let input = [1, 1, 1, 1, 2, 2, 2, 3, 3, 4, 1, 1, 2, 2, 2];
//! let mut groups = group_by(input, |n| *n);
//!
//! let mut keys = Vec::new();
//! while let Some((key, members)) = groups.next_group() {
//!     keys.push((key, members.count()));
//! }
//! assert_eq!(keys, vec![(1, 4), (2, 3), (3, 2), (4, 1), (1, 2), (2, 3)]);
//! ```
//!
//! Each [`Group`] is a view that pulls its members straight from the shared input.
//! It mutably borrows the [`GroupBy`], so it cannot be kept across the next
//! `next_group()` call; the borrow checker rejects that at compile time. Dropping a
//! group early is fine: the rest of its run is skipped when the next group opens.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::{Gen, Generator, SequenceError, SequenceResult, step::Step};

/// Splits a sequence into contiguous runs of equal key.
///
/// Created via [`group_by`].
pub struct GroupBy<I, F, K>
where
    I: Iterator,
{
    iter: I,
    key_fn: F,
    current_key: Option<K>,
    // first element of the next run, pulled while scanning the previous one
    pending: Option<(K, I::Item)>,
    run_open: bool,
    exhausted: bool,
    opened: usize,
    seen: HashSet<K>,
}

/// Group the elements of `range` by the key `key_fn` gives them.
///
/// `key_fn` is called exactly once per element. Empty input yields no groups.
/// See the [module docs](self) for the run semantics.
pub fn group_by<S, F, K>(range: S, key_fn: F) -> GroupBy<S::IntoIter, F, K>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: PartialEq + Clone,
{
    GroupBy {
        iter: range.into_iter(),
        key_fn,
        current_key: None,
        pending: None,
        run_open: false,
        exhausted: false,
        opened: 0,
        seen: HashSet::new(),
    }
}

impl<I, F, K> GroupBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq + Clone,
{
    /// Open the next group, returning its key and a view of its members.
    pub fn next_group(&mut self) -> Option<(K, Group<'_, I, F, K>)> {
        let (key, first) = self.open_group()?;
        Some((key, Group {
            parent: self,
            first: Some(first),
        }))
    }

    /// Like [`next_group`](Self::next_group), but reject input that is not
    /// ordered by key.
    ///
    /// Fails with [`SequenceError::UnorderedGroupKey`] when a run starts with a key
    /// that an earlier run (opened through this method) already had. The offending
    /// run is skipped by the following call.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut groups = group_by("aabbab".chars(), |c| *c);
    /// assert_eq!(groups.next_group_checked().unwrap().map(|(k, _)| k), Some('a'));
    /// assert_eq!(groups.next_group_checked().unwrap().map(|(k, _)| k), Some('b'));
    /// assert!(groups.next_group_checked().is_err());
    /// ```
    pub fn next_group_checked(&mut self) -> SequenceResult<Option<(K, Group<'_, I, F, K>)>>
    where
        K: Eq + Hash + Debug,
    {
        let Some((key, first)) = self.open_group() else {
            return Ok(None);
        };
        if !self.seen.insert(key.clone()) {
            return Err(SequenceError::unordered_group_key(&key, self.opened - 1));
        }
        Ok(Some((key, Group {
            parent: self,
            first: Some(first),
        })))
    }

    /// Collect every group into an owned `(key, members)` pair.
    ///
    /// Handy for plain `for` loops when the members fit in memory.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let words = ["apple", "avocado", "banana", "cherry", "cranberry"];
    /// let by_letter: Vec<_> = group_by(words, |w| w.as_bytes()[0]).collected().collect();
    /// assert_eq!(by_letter[0], (b'a', vec!["apple", "avocado"]));
    /// assert_eq!(by_letter.len(), 3);
    /// ```
    pub fn collected(self) -> Gen<Collected<I, F, K>> {
        Gen::new(Collected { groups: self })
    }

    fn skip_rest_of_run(&mut self) {
        while let Some(item) = self.pull() {
            let key = (self.key_fn)(&item);
            if self.current_key.as_ref() != Some(&key) {
                self.pending = Some((key, item));
                break;
            }
        }
        self.run_open = false;
    }

    fn open_group(&mut self) -> Option<(K, I::Item)> {
        if self.run_open {
            self.skip_rest_of_run();
        }
        let (key, first) = match self.pending.take() {
            Some(pending) => pending,
            None => {
                let item = self.pull()?;
                ((self.key_fn)(&item), item)
            }
        };
        self.current_key = Some(key.clone());
        self.run_open = true;
        self.opened += 1;
        log::trace!("group_by: opened group {}", self.opened);
        Some((key, first))
    }
}

impl<I, F, K> GroupBy<I, F, K>
where
    I: Iterator,
{
    fn pull(&mut self) -> Option<I::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.iter.next();
        if item.is_none() {
            self.exhausted = true;
        }
        item
    }
}

/// Members of one group: a view of a single run of the input.
///
/// Returned by [`GroupBy::next_group`].
pub struct Group<'a, I, F, K>
where
    I: Iterator,
{
    parent: &'a mut GroupBy<I, F, K>,
    first: Option<I::Item>,
}

impl<I, F, K> Iterator for Group<'_, I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = self.first.take() {
            return Some(first);
        }
        let parent = &mut *self.parent;
        if !parent.run_open {
            return None;
        }
        let Some(item) = parent.pull() else {
            parent.run_open = false;
            return None;
        };
        let key = (parent.key_fn)(&item);
        if parent.current_key.as_ref() == Some(&key) {
            Some(item)
        } else {
            parent.pending = Some((key, item));
            parent.run_open = false;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let first = usize::from(self.first.is_some());
        if !self.parent.run_open {
            return (first, Some(first));
        }
        let upper = self.parent.iter.size_hint().1;
        (first, upper.and_then(|u| u.checked_add(first)))
    }
}

impl<I, F, K> FusedIterator for Group<'_, I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
}

/// Owned groups, one `(key, members)` pair per run.
///
/// Created via [`GroupBy::collected`].
pub struct Collected<I, F, K>
where
    I: Iterator,
{
    groups: GroupBy<I, F, K>,
}

impl<I, F, K> Generator for Collected<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq + Clone,
{
    type Yield = (K, Vec<I::Item>);
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        match self.groups.next_group() {
            Some((key, members)) => Step::Yielded((key, members.collect())),
            None => Step::Complete(()),
        }
    }
}
