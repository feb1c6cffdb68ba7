use crate::{Gen, Generator, step::Step};

/// Truthiness of a selector value for [`compress`].
///
/// Booleans are themselves, numbers are selected when non-zero, and `Option`s
/// when `Some`.
pub trait Selector {
    fn is_selected(&self) -> bool;
}

impl Selector for bool {
    fn is_selected(&self) -> bool {
        *self
    }
}

macro_rules! impl_selector_for_numbers {
    ($zero:literal => $($t:ty),+) => {
        $(
            impl Selector for $t {
                fn is_selected(&self) -> bool {
                    *self != $zero
                }
            }
        )+
    };
}

impl_selector_for_numbers!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_selector_for_numbers!(0.0 => f32, f64);

impl<T> Selector for Option<T> {
    fn is_selected(&self) -> bool {
        self.is_some()
    }
}

impl<S> Selector for &S
where
    S: Selector + ?Sized,
{
    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }
}

/// Masks one sequence with another.
///
/// Created via [`compress`].
#[derive(Debug, Clone)]
pub struct Compress<D, S> {
    data: D,
    selectors: S,
}

impl<D, S> Generator for Compress<D, S>
where
    D: Iterator,
    S: Iterator,
    S::Item: Selector,
{
    type Yield = D::Item;
    type Return = ();

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        loop {
            let Some(item) = self.data.next() else {
                return Step::Complete(());
            };
            let Some(selector) = self.selectors.next() else {
                return Step::Complete(());
            };
            if selector.is_selected() {
                return Step::Yielded(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = match (self.data.size_hint().1, self.selectors.size_hint().1) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        (0, upper)
    }
}

/// Yield `data[i]` wherever `selectors[i]` is truthy.
///
/// The two inputs are walked in lock step and the sequence ends as soon as either
/// one does, so they need not have the same length.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let odds: Vec<_> = compress(1..10, cycle([true, false]).take(20)).collect();
/// assert_eq!(odds, vec![1, 3, 5, 7, 9]);
///
/// let evens: Vec<_> = compress(1..20, cycle([0, 1]).take(10)).collect();
/// assert_eq!(evens, vec![2, 4, 6, 8, 10]);
/// ```
pub fn compress<D, S>(data: D, selectors: S) -> Gen<Compress<D::IntoIter, S::IntoIter>>
where
    D: IntoIterator,
    S: IntoIterator,
    S::Item: Selector,
{
    Gen::new(Compress {
        data: data.into_iter(),
        selectors: selectors.into_iter(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repeat;

    #[test]
    fn test_compress_no_selectors() {
        let mut seq = compress(1..5, std::iter::empty::<bool>());
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_compress_shorter_data() {
        let picked: Vec<_> = compress("ab".chars(), repeat(true)).collect();
        assert_eq!(picked, vec!['a', 'b']);
    }

    #[test]
    fn test_compress_option_and_reference_selectors() {
        let mask = [Some(()), None, Some(())];
        let picked: Vec<_> = compress(["x", "y", "z"], &mask).collect();
        assert_eq!(picked, vec!["x", "z"]);
    }

    #[test]
    fn test_compress_float_selectors() {
        let picked: Vec<_> = compress(0..4, [0.0, 0.5, -1.0, 0.0]).collect();
        assert_eq!(picked, vec![1, 2]);
    }

    #[test]
    fn test_compress_size_hint_takes_shorter_bound() {
        let seq = compress(0..100, [true; 3]);
        assert_eq!(seq.size_hint(), (0, Some(3)));
    }
}
