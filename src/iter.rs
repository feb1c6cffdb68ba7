//! Iterator bridge for generators.
//!
//! [`Gen`] is the lazy sequence handed out by every constructor in this crate. It
//! drives a [`Generator`] one pull at a time and fixes the terminal state: once the
//! generator completes it is dropped, its return value is kept, and every later
//! `next()` answers `None` without running anything.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut seq = repeat_n('z', 2);
//! assert_eq!(seq.next(), Some('z'));
//! assert_eq!(seq.next(), Some('z'));
//! assert_eq!(seq.next(), None);
//! assert_eq!(seq.next(), None);
//! assert!(seq.is_complete());
//! ```
//!
//! Both `Gen` and `&mut Gen` are iterators, so a sequence can be partly consumed
//! and then inspected:
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut seq = count(10, 5);
//! let head: Vec<_> = (&mut seq).take(3).collect();
//! assert_eq!(head, vec![10, 15, 20]);
//! assert_eq!(seq.next(), Some(25));
//! ```

use std::{fmt, iter::FusedIterator};

use crate::{Generator, Step};

/// Fused [`Iterator`] over the elements of a [`Generator`].
pub struct Gen<G>
where
    G: Generator,
{
    state: GenState<G>,
}

enum GenState<G>
where
    G: Generator,
{
    Active(G),
    Complete(G::Return),
}

impl<G> Gen<G>
where
    G: Generator,
{
    /// Wrap a generator. Nothing is pulled until the first `next()`.
    pub fn new(generator: G) -> Self {
        Self {
            state: GenState::Active(generator),
        }
    }

    /// Check if the underlying generator has completed.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, GenState::Complete(_))
    }

    /// Get a reference to the return value if complete.
    pub fn return_value(&self) -> Option<&G::Return> {
        match &self.state {
            GenState::Complete(ret) => Some(ret),
            GenState::Active(_) => None,
        }
    }

    /// Consume the sequence and return the final value if complete.
    ///
    /// Returns `None` if the generator hasn't completed yet.
    pub fn into_return(self) -> Option<G::Return> {
        match self.state {
            GenState::Complete(ret) => Some(ret),
            GenState::Active(_) => None,
        }
    }

    /// Take back the generator, unless it has already completed.
    pub fn into_inner(self) -> Option<G> {
        match self.state {
            GenState::Active(generator) => Some(generator),
            GenState::Complete(_) => None,
        }
    }
}

impl<G> Iterator for Gen<G>
where
    G: Generator,
{
    type Item = G::Yield;

    fn next(&mut self) -> Option<Self::Item> {
        let GenState::Active(generator) = &mut self.state else {
            return None;
        };
        match generator.resume() {
            Step::Yielded(output) => Some(output),
            Step::Complete(ret) => {
                // drops the generator along with any buffer it owns
                self.state = GenState::Complete(ret);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            GenState::Active(generator) => generator.size_hint(),
            GenState::Complete(_) => (0, Some(0)),
        }
    }
}

impl<G> FusedIterator for Gen<G> where G: Generator {}

impl<G> Clone for Gen<G>
where
    G: Generator + Clone,
    G::Return: Clone,
{
    fn clone(&self) -> Self {
        let state = match &self.state {
            GenState::Active(generator) => GenState::Active(generator.clone()),
            GenState::Complete(ret) => GenState::Complete(ret.clone()),
        };
        Self { state }
    }
}

impl<G> fmt::Debug for Gen<G>
where
    G: Generator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            GenState::Active(_) => "active",
            GenState::Complete(_) => "complete",
        };
        f.debug_struct("Gen").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_fn;

    #[test]
    fn test_gen_stops_resuming_after_complete() {
        let mut resumes = 0;
        let mut seq = from_fn(move || {
            resumes += 1;
            assert!(resumes <= 2, "resumed after completion");
            if resumes == 1 { Step::Yielded(1) } else { Step::Complete("done") }
        })
        .into_gen();

        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.return_value(), Some(&"done"));
    }

    #[test]
    fn test_into_return_before_completion_is_none() {
        let seq = from_fn(|| Step::<u8, ()>::Yielded(0)).into_gen();
        assert!(!seq.is_complete());
        assert_eq!(seq.into_return(), None);
    }

    #[test]
    fn test_for_loop_with_mut_ref() {
        let mut left = 3;
        let mut seq = from_fn(move || {
            if left == 0 {
                return Step::Complete(left);
            }
            left -= 1;
            Step::Yielded(left)
        })
        .into_gen();

        let mut values = Vec::new();
        for value in &mut seq {
            values.push(value);
        }
        assert_eq!(values, vec![2, 1, 0]);
        assert_eq!(seq.into_return(), Some(0));
    }

    #[test]
    fn test_size_hint_after_complete() {
        let mut seq = from_fn(|| Step::<u8, ()>::Complete(())).into_gen();
        assert_eq!(seq.next(), None);
        assert_eq!(seq.size_hint(), (0, Some(0)));
        assert_eq!(format!("{seq:?}"), "Gen { state: \"complete\" }");
    }
}
