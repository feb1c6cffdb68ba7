use crate::{Gen, Generator, step::Step};

/// Yields the leading run of accepted elements.
///
/// Created via [`take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Generator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Yield = I::Item;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        match self.iter.next() {
            Some(item) if (self.predicate)(&item) => Step::Yielded(item),
            // the rejected element is dropped here, not kept around
            _ => Step::Complete(()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Yield elements until the first one `predicate` rejects, then stop.
///
/// The rejected element is discarded and the input is not pulled again.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let word: String = take_while("take while".chars(), |c| *c != ' ').collect();
/// assert_eq!(word, "take");
/// ```
pub fn take_while<S, P>(range: S, predicate: P) -> Gen<TakeWhile<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Gen::new(TakeWhile {
        iter: range.into_iter(),
        predicate,
    })
}

/// Skips the leading run of accepted elements.
///
/// Created via [`drop_while`].
#[derive(Debug, Clone)]
pub struct DropWhile<I, P> {
    iter: I,
    // dropped once the first element is rejected
    predicate: Option<P>,
}

impl<I, P> Generator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Yield = I::Item;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        if let Some(predicate) = self.predicate.as_mut() {
            for item in self.iter.by_ref() {
                if !predicate(&item) {
                    self.predicate = None;
                    return Step::Yielded(item);
                }
            }
            return Step::Complete(());
        }
        self.iter.next().into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        match self.predicate {
            Some(_) => (0, upper),
            None => (lower, upper),
        }
    }
}

/// Skip elements while `predicate` holds, then yield the rest unfiltered.
///
/// The first rejected element is yielded, and `predicate` is never called again.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let tail: String = drop_while("drop while".chars(), |c| *c != 'w').collect();
/// assert_eq!(tail, "while");
/// ```
pub fn drop_while<S, P>(range: S, predicate: P) -> Gen<DropWhile<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Gen::new(DropWhile {
        iter: range.into_iter(),
        predicate: Some(predicate),
    })
}
