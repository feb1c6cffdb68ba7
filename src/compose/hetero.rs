use either::Either;

use crate::{Gen, Generator, step::Step};

/// Drains two sequences of different element types into one tagged sequence.
///
/// Created via [`chain_heterogeneous`].
#[derive(Debug, Clone)]
pub struct ChainHeterogeneous<A, B> {
    first: Option<A>,
    second: B,
}

impl<A, B> Generator for ChainHeterogeneous<A, B>
where
    A: Iterator,
    B: Iterator,
{
    type Yield = Either<A::Item, B::Item>;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        if let Some(first) = self.first.as_mut() {
            if let Some(item) = first.next() {
                return Step::Yielded(Either::Left(item));
            }
            log::trace!("chain_heterogeneous: left source drained");
            self.first = None;
        }
        self.second.next().map(Either::Right).into()
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

/// Chain two sources whose element types differ.
///
/// Elements of `first` come out as `Either::Left`, then elements of `second` as
/// `Either::Right`. The variant always says which source produced the value, even
/// when both element types are the same. For more sources use
/// [`chain_heterogeneous!`](crate::chain_heterogeneous!).
///
/// ```rust
/// use either::Either;
/// use lazyseq::prelude::*;
///
/// let mut numbers = Vec::new();
/// let mut text = String::new();
/// for value in chain_heterogeneous(8..11, "ab".chars()) {
///     match value {
///         Either::Left(n) => numbers.push(n),
///         Either::Right(c) => text.push(c),
///     }
/// }
/// assert_eq!(numbers, vec![8, 9, 10]);
/// assert_eq!(text, "ab");
/// ```
pub fn chain_heterogeneous<A, B>(
    first: A,
    second: B,
) -> Gen<ChainHeterogeneous<A::IntoIter, B::IntoIter>>
where
    A: IntoIterator,
    B: IntoIterator,
{
    Gen::new(ChainHeterogeneous {
        first: Some(first.into_iter()),
        second: second.into_iter(),
    })
}

/// Chain two or more sources of arbitrary element types.
///
/// The element type nests to the right: three sources yield
/// `Either<A, Either<B, C>>`, four yield `Either<A, Either<B, Either<C, D>>>`.
///
/// ```rust
/// use either::Either::{Left, Right};
/// use lazyseq::prelude::*;
///
/// let tagged: Vec<_> = lazyseq::chain_heterogeneous!([1_u8], ["two"], [3.0_f32]).collect();
/// assert_eq!(tagged, vec![Left(1), Right(Left("two")), Right(Right(3.0))]);
/// ```
#[macro_export]
macro_rules! chain_heterogeneous {
    ($first:expr, $second:expr $(,)?) => {
        $crate::chain_heterogeneous($first, $second)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::chain_heterogeneous($first, $crate::chain_heterogeneous!($($rest),+))
    };
}
