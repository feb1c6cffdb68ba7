//! Core trait for resumable, pull-driven sequences.
//!
//! A [`Generator`] is a state machine that is resumed by its consumer and either
//! produces the next element or reports completion. Every combinator in this crate
//! is a `Generator` over explicit struct state (cursors, buffers, accumulators) so
//! that nothing is computed ahead of demand.
//!
//! Generators are rarely driven by hand; wrap one in [`Gen`] (or call
//! [`Generator::into_gen`]) to get a fused [`Iterator`].
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut n = 0;
//! let mut countdown = from_fn(move || {
//!     n += 1;
//!     if n <= 3 { Step::Yielded(4 - n) } else { Step::Complete("liftoff") }
//! });
//!
//! assert_eq!(countdown.resume(), Step::Yielded(3));
//! assert_eq!(countdown.resume(), Step::Yielded(2));
//! assert_eq!(countdown.resume(), Step::Yielded(1));
//! assert_eq!(countdown.resume(), Step::Complete("liftoff"));
//! ```

use crate::{Gen, step::Step};

/// A resumable computation that yields elements until it completes.
///
/// Each call to [`resume`](Generator::resume) runs the generator up to its next
/// suspension point. After `Complete` has been returned the generator must not be
/// resumed again; implementations are free to panic or to misbehave if it is.
/// [`Gen`] guarantees this never happens.
pub trait Generator {
    /// Type of each produced element.
    type Yield;
    /// Type of the final value when the generator is exhausted.
    type Return;

    /// Run to the next suspension point.
    fn resume(&mut self) -> Step<Self::Yield, Self::Return>;

    /// Bounds on the number of elements still to come, as in [`Iterator::size_hint`].
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Wrap this generator in a fused [`Iterator`].
    fn into_gen(self) -> Gen<Self>
    where
        Self: Sized,
    {
        Gen::new(self)
    }

    fn boxed<'a>(self) -> Box<dyn Generator<Yield = Self::Yield, Return = Self::Return> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<G> Generator for Option<G>
where
    G: Generator,
{
    type Yield = G::Yield;
    type Return = Option<G::Return>;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        match self {
            Some(g) => g.resume().map_complete(Some),
            None => Step::Complete(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Some(g) => g.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<L, R> Generator for either::Either<L, R>
where
    L: Generator,
    R: Generator<Yield = L::Yield, Return = L::Return>,
{
    type Yield = L::Yield;
    type Return = L::Return;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        match self {
            either::Either::Left(l) => l.resume(),
            either::Either::Right(r) => r.resume(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            either::Either::Left(l) => l.size_hint(),
            either::Either::Right(r) => r.size_hint(),
        }
    }
}

impl<G> Generator for Box<G>
where
    G: Generator + ?Sized,
{
    type Yield = G::Yield;
    type Return = G::Return;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        (**self).resume()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

impl<G> Generator for &'_ mut G
where
    G: Generator + ?Sized,
{
    type Yield = G::Yield;
    type Return = G::Return;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        (**self).resume()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}
