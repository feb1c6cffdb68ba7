use crate::{Gen, Generator, step::Step};

/// Keeps the elements a predicate accepts.
///
/// Created via [`filter`].
#[derive(Debug, Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Generator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Yield = I::Item;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        for item in self.iter.by_ref() {
            if (self.predicate)(&item) {
                return Step::Yielded(item);
            }
        }
        Step::Complete(())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Yield only the elements for which `predicate` holds, in order.
///
/// The input is pulled no further than the next accepted element.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let kept: String = filter("ABABABA".chars(), |c| *c != 'A').collect();
/// assert_eq!(kept, "BBB");
/// ```
pub fn filter<S, P>(range: S, predicate: P) -> Gen<Filter<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Gen::new(Filter {
        iter: range.into_iter(),
        predicate,
    })
}

/// Keeps the elements a fallible predicate accepts, stopping at its first error.
///
/// Created via [`try_filter`].
#[derive(Debug, Clone)]
pub struct TryFilter<I, P> {
    iter: I,
    predicate: P,
    failed: bool,
}

impl<I, P, E> Generator for TryFilter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    type Yield = Result<I::Item, E>;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        if self.failed {
            return Step::Complete(());
        }
        for item in self.iter.by_ref() {
            match (self.predicate)(&item) {
                Ok(true) => return Step::Yielded(Ok(item)),
                Ok(false) => {}
                Err(e) => {
                    self.failed = true;
                    return Step::Yielded(Err(e));
                }
            }
        }
        Step::Complete(())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

/// Like [`filter`], with a predicate that can fail.
///
/// Accepted elements come out as `Ok`. The first `Err` from the predicate is yielded
/// in place of the element that caused it, and the sequence ends right after.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let parsed: Vec<_> = try_filter(["4", "7", "x", "8"], |s| {
///     s.parse::<u32>().map(|n| n % 2 == 0)
/// })
/// .collect();
///
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(parsed[0], Ok("4"));
/// assert!(parsed[1].is_err());
/// ```
pub fn try_filter<S, P, E>(range: S, predicate: P) -> Gen<TryFilter<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    Gen::new(TryFilter {
        iter: range.into_iter(),
        predicate,
        failed: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_filter_does_not_look_ahead() {
        let pulls = Cell::new(0);
        let source = (1..).inspect(|_| pulls.set(pulls.get() + 1));
        let mut evens = filter(source, |n| n % 2 == 0);

        assert_eq!(evens.next(), Some(2));
        assert_eq!(pulls.get(), 2);
        assert_eq!(evens.next(), Some(4));
        assert_eq!(pulls.get(), 4);
    }

    #[test]
    fn test_filter_over_borrowed_slice() {
        let data = vec![3, 8, 1, 9];
        let big: Vec<&i32> = filter(&data, |n| **n > 2).collect();
        assert_eq!(big, vec![&3, &8, &9]);
    }

    #[test]
    fn test_filter_none_match() {
        let mut seq = filter(0..10, |_| false);
        assert_eq!(seq.next(), None);
        assert!(seq.is_complete());
    }

    #[test]
    fn test_try_filter_stops_after_error() {
        let calls = Cell::new(0);
        let mut seq = try_filter(1..=10, |n| {
            calls.set(calls.get() + 1);
            if *n == 3 { Err(format!("bad {n}")) } else { Ok(n % 2 == 1) }
        });

        assert_eq!(seq.next(), Some(Ok(1)));
        assert_eq!(seq.next(), Some(Err("bad 3".to_string())));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(calls.get(), 3);
    }
}
