use std::ops::Add;

use crate::{Gen, Generator, step::Step};

/// Running fold over a sequence.
///
/// Created via [`accumulate`] or [`accumulate_with`].
#[derive(Debug, Clone)]
pub struct Accumulate<I, F>
where
    I: Iterator,
{
    iter: I,
    func: F,
    acc: Option<I::Item>,
    started: bool,
}

impl<I, F> Generator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Yield = I::Item;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        if !self.started {
            self.started = true;
            if self.acc.is_none() {
                self.acc = self.iter.next();
            }
            return self.acc.clone().into();
        }

        // the previous value is already out; fold in the next element on demand
        let Some(element) = self.iter.next() else {
            return Step::Complete(());
        };
        let Some(acc) = self.acc.take() else {
            return Step::Complete(());
        };
        let acc = (self.func)(acc, element);
        self.acc = Some(acc.clone());
        Step::Yielded(acc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if !self.started && self.acc.is_some() {
            (lower.saturating_add(1), upper.and_then(|u| u.checked_add(1)))
        } else {
            (lower, upper)
        }
    }
}

/// Running fold with an explicit function and an optional starting value.
///
/// The first value yielded is `initial`, or the first element when there is no
/// initial value. Each later pull folds the next element into the running value
/// with `func(acc, element)` and yields the result. So an input of `n` elements
/// gives `n` values without an initial value and `n + 1` with one; an empty input
/// gives nothing, or just `initial`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let products: Vec<_> = accumulate_with(5..9, |a, b| a * b, Some(1)).collect();
/// assert_eq!(products, vec![1, 5, 30, 210, 1680]);
///
/// let maxima: Vec<_> = accumulate_with([3, 1, 4, 1, 5], i32::max, None).collect();
/// assert_eq!(maxima, vec![3, 3, 4, 4, 5]);
/// ```
pub fn accumulate_with<S, F>(
    range: S,
    func: F,
    initial: Option<S::Item>,
) -> Gen<Accumulate<S::IntoIter, F>>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    Gen::new(Accumulate {
        iter: range.into_iter(),
        func,
        acc: initial,
        started: false,
    })
}

/// Running sums: `accumulate_with(range, Add::add, None)`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(accumulate(5..10).collect::<Vec<_>>(), vec![5, 11, 18, 26, 35]);
/// assert_eq!(accumulate(Vec::<i32>::new()).count(), 0);
/// ```
#[allow(clippy::type_complexity)]
pub fn accumulate<S>(range: S) -> Gen<Accumulate<S::IntoIter, fn(S::Item, S::Item) -> S::Item>>
where
    S: IntoIterator,
    S::Item: Add<Output = S::Item> + Clone,
{
    accumulate_with(range, Add::add as fn(S::Item, S::Item) -> S::Item, None)
}
