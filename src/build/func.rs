use crate::{Gen, Generator, step::Step};

/// Generator driven by a closure.
///
/// Created via [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

impl<Y, R, F> Generator for FromFn<F>
where
    F: FnMut() -> Step<Y, R>,
{
    type Yield = Y;
    type Return = R;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        (self.0)()
    }
}

/// Create a generator from a closure.
///
/// Each resume calls the closure once; it decides whether to yield or complete.
/// The closure's captured state plays the role of the generator's locals.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut a = 0_u64;
/// let mut b = 1_u64;
/// let fib: Vec<u64> = from_fn(move || {
///     let out = a;
///     (a, b) = (b, a + b);
///     Step::<u64, ()>::Yielded(out)
/// })
/// .into_gen()
/// .take(7)
/// .collect();
/// assert_eq!(fib, vec![0, 1, 1, 2, 3, 5, 8]);
/// ```
pub fn from_fn<Y, R, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<Y, R>,
{
    FromFn(f)
}

/// Generator over any forward iterator, yielding its elements unchanged.
///
/// Created via [`to_generator`].
#[derive(Debug, Clone)]
pub struct FromIter<I>(I);

impl<I> Generator for FromIter<I>
where
    I: Iterator,
{
    type Yield = I::Item;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        self.0.next().into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Bridge anything iterable into a lazy sequence.
///
/// Borrowed sources stay borrowed: `to_generator(&v)` yields `&T` and cannot
/// outlive `v`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let words = vec!["a", "b"];
/// let seq = to_generator(&words);
/// assert_eq!(seq.collect::<Vec<_>>(), vec![&"a", &"b"]);
/// ```
pub fn to_generator<S>(range: S) -> Gen<FromIter<S::IntoIter>>
where
    S: IntoIterator,
{
    Gen::new(FromIter(range.into_iter()))
}
