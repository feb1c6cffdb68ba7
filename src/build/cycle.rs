//! Endless replay of a finite source.
//!
//! Two strategies, picked by constructor:
//!
//! - [`cycle`] needs a restartable source (its iterator is `Clone`) and re-walks a
//!   fresh copy of the original iterator on every pass. No buffer.
//! - [`cycle_buffered`] works with any single-pass source. The first pass is yielded
//!   and copied into an owned buffer at the same time; later passes replay the
//!   buffer. Memory is O(n) in the source length.
//!
//! Both stop immediately on an empty source instead of spinning.

use crate::{Gen, Generator, step::Step};

/// Replays a restartable source by re-walking it.
///
/// Created via [`cycle`].
#[derive(Debug, Clone)]
pub struct Cycle<I> {
    origin: I,
    current: I,
    yielded_this_pass: bool,
}

impl<I> Generator for Cycle<I>
where
    I: Iterator + Clone,
{
    type Yield = I::Item;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        loop {
            if let Some(item) = self.current.next() {
                self.yielded_this_pass = true;
                return Step::Yielded(item);
            }
            if !self.yielded_this_pass {
                log::trace!("cycle: pass produced no elements, stopping");
                return Step::Complete(());
            }
            self.current = self.origin.clone();
            self.yielded_this_pass = false;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.origin.size_hint() {
            (_, Some(0)) => (0, Some(0)),
            (0, _) => (0, None),
            _ => (usize::MAX, None),
        }
    }
}

/// Repeat a restartable source forever without buffering it.
///
/// Each pass starts from a clone of the source's original iterator, so slices,
/// ranges, `chars()` and other cheap-to-clone iterators are walked again in place.
/// An empty source yields nothing.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq: Vec<_> = cycle(1..3).take(6).collect();
/// assert_eq!(seq, vec![1, 2, 1, 2, 1, 2]);
///
/// let letters = ['a', 'b'];
/// assert_eq!(cycle(&letters).take(3).collect::<String>(), "aba");
/// ```
pub fn cycle<S>(range: S) -> Gen<Cycle<S::IntoIter>>
where
    S: IntoIterator,
    S::IntoIter: Clone,
{
    let origin = range.into_iter();
    Gen::new(Cycle {
        current: origin.clone(),
        origin,
        yielded_this_pass: false,
    })
}

/// Replays a single-pass source from a private buffer.
///
/// Created via [`cycle_buffered`].
pub struct CycleBuffered<I>
where
    I: Iterator,
{
    source: Option<I>,
    buffer: Vec<I::Item>,
    index: usize,
}

impl<I> Generator for CycleBuffered<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Yield = I::Item;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        if let Some(source) = self.source.as_mut() {
            if let Some(item) = source.next() {
                self.buffer.push(item.clone());
                return Step::Yielded(item);
            }
            // first pass is over, the source is never touched again
            self.source = None;
            log::trace!("cycle: replaying {} buffered elements", self.buffer.len());
        }

        let Some(item) = self.buffer.get(self.index) else {
            return Step::Complete(());
        };
        let item = item.clone();
        self.index = (self.index + 1) % self.buffer.len();
        Step::Yielded(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.buffer.is_empty() {
            return (usize::MAX, None);
        }
        match self.source.as_ref().map(|s| s.size_hint()) {
            None | Some((_, Some(0))) => (0, Some(0)),
            Some((0, _)) => (0, None),
            Some(_) => (usize::MAX, None),
        }
    }
}

/// Repeat any source forever, buffering the first pass.
///
/// The source is consumed exactly once. An empty source yields nothing.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut lines = "x\ny".lines().map(str::to_owned);
/// let seq: Vec<_> = cycle_buffered(&mut lines).take(5).collect();
/// assert_eq!(seq, vec!["x", "y", "x", "y", "x"]);
/// ```
pub fn cycle_buffered<S>(range: S) -> Gen<CycleBuffered<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let source = range.into_iter();
    let buffer = match source.size_hint() {
        (lower, Some(upper)) if lower == upper => Vec::with_capacity(lower),
        _ => Vec::new(),
    };
    Gen::new(CycleBuffered {
        source: Some(source),
        buffer,
        index: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_cycle_buffered_empty_terminates() {
        let mut seq = cycle_buffered(Vec::<i32>::new());
        assert_eq!(seq.next(), None);
        assert!(seq.is_complete());
    }

    #[test]
    fn test_cycle_empty_restartable_terminates() {
        let empty: [u8; 0] = [];
        let mut seq = cycle(empty.iter());
        assert_eq!(seq.size_hint(), (0, Some(0)));
        assert_eq!(seq.next(), None);
        assert!(seq.is_complete());
    }

    #[test]
    fn test_cycle_buffered_pulls_source_once() {
        let pulls = Cell::new(0);
        let source = (0..3).inspect(|_| pulls.set(pulls.get() + 1));
        let seq: Vec<_> = cycle_buffered(source).take(10).collect();

        assert_eq!(seq, vec![0, 1, 2, 0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_cycle_buffered_yields_during_first_pass() {
        // an endless source still streams, it just never reaches replay
        let seq: Vec<_> = cycle_buffered(1..).take(4).collect();
        assert_eq!(seq, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_cycle_single_element() {
        let seq: Vec<_> = cycle(std::iter::once("only")).take(3).collect();
        assert_eq!(seq, vec!["only"; 3]);
    }

    #[test]
    fn test_cycle_size_hint_is_infinite_for_nonempty() {
        assert_eq!(cycle([1, 2]).size_hint(), (usize::MAX, None));
        assert_eq!(cycle_buffered([1, 2]).size_hint(), (usize::MAX, None));
    }
}
