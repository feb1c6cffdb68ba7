use std::{convert::Infallible, ops::Add};

use crate::{Gen, Generator, step::Step};

/// Arithmetic progression without end.
///
/// Created via [`count`] or [`count_up`].
#[derive(Debug, Clone)]
pub struct Count<T> {
    current: T,
    step: T,
    started: bool,
}

impl<T> Generator for Count<T>
where
    T: Add<Output = T> + Clone,
{
    type Yield = T;
    type Return = Infallible;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        // the sum for element k+1 is only taken when element k+1 is asked for
        if self.started {
            self.current = self.current.clone() + self.step.clone();
        } else {
            self.started = true;
        }
        Step::Yielded(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Yield `start`, `start + step`, `start + 2 * step`, ... forever.
///
/// Overflow follows the numeric type's own `+`: a debug build panics when the
/// overflowing element is pulled, a release build wraps.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let odds: Vec<f32> = count(1.0_f32, 2.0).take(4).collect();
/// assert_eq!(odds, vec![1.0, 3.0, 5.0, 7.0]);
/// ```
pub fn count<T>(start: T, step: T) -> Gen<Count<T>>
where
    T: Add<Output = T> + Clone,
{
    Gen::new(Count {
        current: start,
        step,
        started: false,
    })
}

/// Count up from zero in steps of one.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(count_up::<i32>().take(5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// ```
pub fn count_up<T>() -> Gen<Count<T>>
where
    T: Add<Output = T> + Clone + Default + From<u8>,
{
    count(T::default(), T::from(1_u8))
}
