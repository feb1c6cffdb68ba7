//! Result combinators for fallible pipelines.
//!
//! A user function that can fail is expressed by making it return [`Result`], so
//! the failure travels down the pipeline as an ordinary element at the position
//! where it happened. [`short_circuit`] turns such a sequence back into one of
//! plain values that stops at the first error and keeps it as the return value.
//!
//! # Examples
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let parsed = transform(["1", "2", "x", "4"], |s| s.parse::<i32>());
//! let mut numbers = short_circuit(parsed);
//!
//! assert_eq!((&mut numbers).collect::<Vec<_>>(), vec![1, 2]);
//! assert!(numbers.into_return().unwrap().is_err());
//! ```

use crate::{Gen, Generator, step::Step};

/// Short-circuits on the first `Err` in a sequence of `Result`s.
///
/// Yields the `Ok` values unwrapped and completes with `Ok(())` at the end of the
/// input, or with `Err(e)` at the first error. Elements before the error are
/// unaffected and the input is not pulled after it.
///
/// Created via [`short_circuit`].
#[derive(Debug, Clone)]
pub struct ShortCircuit<I, E> {
    iter: I,
    _phantom: std::marker::PhantomData<E>,
}

impl<T, E, I> Generator for ShortCircuit<I, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Yield = T;
    type Return = Result<(), E>;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        match self.iter.next() {
            Some(Ok(t)) => Step::Yielded(t),
            Some(Err(e)) => Step::Complete(Err(e)),
            None => Step::Complete(Ok(())),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Yield the `Ok` values of `range` until the first `Err`, which becomes the
/// return value.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut sc = short_circuit([Ok(1), Ok(2), Err("three"), Ok(4)]);
///
/// assert_eq!(sc.next(), Some(1));
/// assert_eq!(sc.next(), Some(2));
/// assert_eq!(sc.next(), None);
/// assert_eq!(sc.into_return(), Some(Err("three")));
/// ```
pub fn short_circuit<S, T, E>(range: S) -> Gen<ShortCircuit<S::IntoIter, E>>
where
    S: IntoIterator<Item = Result<T, E>>,
{
    Gen::new(ShortCircuit {
        iter: range.into_iter(),
        _phantom: std::marker::PhantomData,
    })
}
