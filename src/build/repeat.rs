use std::convert::Infallible;

use crate::{Gen, Generator, step::Step};

/// The same value forever.
///
/// Created via [`repeat`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

impl<T> Generator for Repeat<T>
where
    T: Clone,
{
    type Yield = T;
    type Return = Infallible;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        Step::Yielded(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Yield `value` forever.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(repeat(2.4).take(3).collect::<Vec<_>>(), vec![2.4, 2.4, 2.4]);
/// ```
pub fn repeat<T>(value: T) -> Gen<Repeat<T>>
where
    T: Clone,
{
    Gen::new(Repeat { value })
}

/// The same value a fixed number of times.
///
/// Created via [`repeat_n`].
#[derive(Debug, Clone)]
pub struct RepeatN<T> {
    value: Option<T>,
    left: usize,
}

impl<T> Generator for RepeatN<T>
where
    T: Clone,
{
    type Yield = T;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        if self.left == 0 {
            return Step::Complete(());
        }
        self.left -= 1;
        let value = if self.left == 0 {
            self.value.take()
        } else {
            self.value.clone()
        };
        value.into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

/// Yield `value` exactly `times` times, then stop.
///
/// The last copy is moved out rather than cloned.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(repeat_n("ab", 2).collect::<Vec<_>>(), vec!["ab", "ab"]);
/// assert_eq!(repeat_n("ab", 0).count(), 0);
/// ```
pub fn repeat_n<T>(value: T, times: usize) -> Gen<RepeatN<T>>
where
    T: Clone,
{
    Gen::new(RepeatN {
        value: (times > 0).then_some(value),
        left: times,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_repeat_n_exact_count() {
        let seq = repeat_n(7_u8, 5);
        assert_eq!(seq.size_hint(), (5, Some(5)));
        assert_eq!(seq.collect::<Vec<_>>(), vec![7; 5]);
    }

    #[test]
    fn test_repeat_n_zero_drops_value_immediately() {
        let shared = Rc::new(());
        let seq = repeat_n(Rc::clone(&shared), 0);
        assert_eq!(Rc::strong_count(&shared), 1);
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn test_repeat_n_moves_last_copy() {
        let shared = Rc::new(());
        let copies: Vec<_> = repeat_n(Rc::clone(&shared), 3).collect();
        // three yielded handles plus the original
        assert_eq!(copies.len(), 3);
        assert_eq!(Rc::strong_count(&shared), 4);
    }

    #[test]
    fn test_repeat_infinite_take() {
        let mut seq = repeat('x');
        assert_eq!(seq.by_ref().take(1000).count(), 1000);
        assert_eq!(seq.next(), Some('x'));
    }
}
