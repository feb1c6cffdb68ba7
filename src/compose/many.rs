use crate::{Gen, Generator, Step};

/// Drains an array of same-typed sources in order.
///
/// Created via [`chain_all`]. Each source is dropped once it is exhausted.
#[derive(Debug, Clone)]
pub struct ChainAll<const N: usize, I> {
    sources: [Option<I>; N],
    index: usize,
}

impl<const N: usize, I> Generator for ChainAll<N, I>
where
    I: Iterator,
{
    type Yield = I::Item;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        loop {
            match self.sources.get_mut(self.index) {
                Some(Some(source)) => match source.next() {
                    Some(item) => return Step::Yielded(item),
                    None => {
                        log::trace!("chain_all: source {} of {} drained", self.index + 1, N);
                        self.sources[self.index] = None;
                        self.index += 1;
                    }
                },
                Some(None) => {
                    self.index += 1;
                }
                None => return Step::Complete(()),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sources
            .iter()
            .flatten()
            .map(|s| s.size_hint())
            .fold((0, Some(0)), |(lo, hi), (s_lo, s_hi)| {
                let hi = match (hi, s_hi) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                (lo.saturating_add(s_lo), hi)
            })
    }
}

/// Yield every element of each source in turn, first to last.
///
/// All sources must be the same type, which with closures usually means function
/// pointers or plain collections.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let all: Vec<_> = chain_all([1..3, 3..5, 5..7]).collect();
/// assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn chain_all<const N: usize, S>(sources: [S; N]) -> Gen<ChainAll<N, S::IntoIter>>
where
    S: IntoIterator,
{
    Gen::new(ChainAll {
        sources: sources.map(|s| Some(s.into_iter())),
        index: 0,
    })
}
