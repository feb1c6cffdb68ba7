use crate::{Gen, Generator, step::Step};

/// Drains one sequence, then another.
///
/// Created via [`chain`] or the [`chain!`](crate::chain!) macro. The first source
/// is dropped from memory as soon as it is exhausted.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: Option<A>,
    second: B,
}

impl<A, B> Generator for Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Yield = A::Item;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        if let Some(first) = self.first.as_mut() {
            if let Some(item) = first.next() {
                return Step::Yielded(item);
            }
            log::trace!("chain: first source drained");
            self.first = None;
        }
        self.second.next().into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.first.as_ref().map_or((0, Some(0)), |a| a.size_hint());
        let (b_lo, b_hi) = self.second.size_hint();
        let upper = match (a_hi, b_hi) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (a_lo.saturating_add(b_lo), upper)
    }
}

/// Yield every element of `first`, then every element of `second`.
///
/// Both sources must have the same element type; the sources themselves may be
/// different kinds of iterator. For more than two sources see
/// [`chain!`](crate::chain!) and [`chain_all`](crate::chain_all).
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let joined: Vec<_> = chain(1..3, vec![3, 4]).collect();
/// assert_eq!(joined, vec![1, 2, 3, 4]);
/// ```
pub fn chain<A, B>(first: A, second: B) -> Gen<Chain<A::IntoIter, B::IntoIter>>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Gen::new(Chain {
        first: Some(first.into_iter()),
        second: second.into_iter(),
    })
}

/// Chain any number of sources that share an element type.
///
/// Expands to nested [`chain`] calls, so the sources may be different iterator
/// types. A single source is passed through [`to_generator`](crate::to_generator).
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let all: Vec<_> = lazyseq::chain!(1..3, 3..5, [5, 6]).collect();
/// assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
/// ```
#[macro_export]
macro_rules! chain {
    ($only:expr $(,)?) => {
        $crate::to_generator($only)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::chain($first, $crate::chain!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_drains_first_before_second() {
        let mut order = Vec::new();
        let left = [1, 2].into_iter().inspect(|n| order.push(*n));
        let joined: Vec<_> = chain(left, [3]).collect();
        assert_eq!(joined, vec![1, 2, 3]);
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_chain_empty_sides() {
        assert_eq!(chain(Vec::<u8>::new(), vec![1]).collect::<Vec<_>>(), vec![1]);
        assert_eq!(chain(vec![1], Vec::<u8>::new()).collect::<Vec<_>>(), vec![1]);
        assert_eq!(chain(Vec::<u8>::new(), Vec::<u8>::new()).count(), 0);
    }

    #[test]
    fn test_chain_size_hint_sums() {
        let seq = chain(0..3, 10..12);
        assert_eq!(seq.size_hint(), (5, Some(5)));
    }

    #[test]
    fn test_chain_macro_single_and_trailing_comma() {
        assert_eq!(crate::chain!(vec!['a']).collect::<String>(), "a");
        assert_eq!(crate::chain!("ab".chars(), "c".chars(),).collect::<String>(), "abc");
    }
}
