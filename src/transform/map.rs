use crate::{Gen, Generator, SpreadFn, step::Step};

/// Applies a function to every element.
///
/// Created via [`transform`].
#[derive(Debug, Clone)]
pub struct Transform<I, F> {
    iter: I,
    f: F,
}

impl<I, O, F> Generator for Transform<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> O,
{
    type Yield = O;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        self.iter.next().map(&mut self.f).into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Yield `f(element)` for every element: same order, same count.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let squares: Vec<_> = transform(1..=4, |n| n * n).collect();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn transform<S, O, F>(range: S, f: F) -> Gen<Transform<S::IntoIter, F>>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> O,
{
    Gen::new(Transform {
        iter: range.into_iter(),
        f,
    })
}

/// Applies a function to the fields of every tuple element.
///
/// Created via [`star_transform`].
#[derive(Debug, Clone)]
pub struct StarTransform<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Generator for StarTransform<I, F>
where
    I: Iterator,
    F: SpreadFn<I::Item>,
{
    type Yield = F::Output;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        match self.iter.next() {
            Some(args) => Step::Yielded(self.f.call_spread(args)),
            None => Step::Complete(()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Like [`transform`], but each tuple element is spread into `f`'s arguments.
///
/// Closure parameters usually need type annotations, since they are matched
/// against the tuple through [`SpreadFn`] rather than an `Fn` bound.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = vec![(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)];
/// let products: Vec<f64> = star_transform(pairs, |a: f64, b: f64| a * b).collect();
/// assert_eq!(products, vec![3.0, 4.0, 3.0]);
/// ```
pub fn star_transform<S, F>(range: S, f: F) -> Gen<StarTransform<S::IntoIter, F>>
where
    S: IntoIterator,
    F: SpreadFn<S::Item>,
{
    Gen::new(StarTransform {
        iter: range.into_iter(),
        f,
    })
}
