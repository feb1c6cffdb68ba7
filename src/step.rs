/// Outcome of a single pull on a generator: either the next element or the final value.
///
/// `Step` is what [`Generator::resume`](crate::Generator::resume) hands back. A
/// generator keeps producing `Yielded` elements until it reports `Complete`, after
/// which it must not be resumed again ([`Gen`](crate::Gen) enforces that).
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let element: Step<i32, ()> = Step::Yielded(42);
/// let finished: Step<i32, ()> = Step::Complete(());
///
/// assert_eq!(element.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert!(finished.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, R> {
    /// The generator produced an element and is suspended.
    Yielded(Y),
    /// The generator is exhausted and produced its return value.
    Complete(R),
}

impl<Y, R> Step<Y, R> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert!(x.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into `Option<Y>`, discarding any return value.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(x.yielded_value(), Some(42));
    ///
    /// let y: Step<i32, &str> = Step::Complete("done");
    /// assert_eq!(y.yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding any yielded element.
    #[inline]
    pub fn complete_value(self) -> Option<R> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(r) => Some(r),
        }
    }

    /// Maps the yielded element, leaving a `Complete` untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, R>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(r) => Step::Complete(r),
        }
    }

    /// Maps the return value, leaving a `Yielded` untouched.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32, i32> = Step::Complete(5);
    /// assert_eq!(x.map_complete(|v| v * 2), Step::Complete(10));
    /// ```
    #[inline]
    pub fn map_complete<R2, F>(self, f: F) -> Step<Y, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(r) => Step::Complete(f(r)),
        }
    }

    /// Returns the contained `Yielded` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Complete`.
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the contained `Complete` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> R {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(r) => r,
        }
    }
}

impl<Y> From<Option<Y>> for Step<Y, ()> {
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yielded(y),
            None => Step::Complete(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yielded_and_is_complete() {
        let y: Step<i32, &str> = Step::Yielded(42);
        let d: Step<i32, &str> = Step::Complete("complete");
        assert!(y.is_yielded());
        assert!(!y.is_complete());
        assert!(d.is_complete());
        assert!(!d.is_yielded());
    }

    #[test]
    fn test_yielded_value_and_complete_value() {
        let y: Step<i32, &str> = Step::Yielded(42);
        let d: Step<i32, &str> = Step::Complete("complete");
        assert_eq!(y.yielded_value(), Some(42));
        assert_eq!(y.complete_value(), None);
        assert_eq!(d.yielded_value(), None);
        assert_eq!(d.complete_value(), Some("complete"));
    }

    #[test]
    fn test_map_yielded_leaves_complete() {
        let d: Step<i32, &str> = Step::Complete("complete");
        assert_eq!(d.map_yielded(|v| v * 2), Step::Complete("complete"));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Step::from(Some(3)), Step::Yielded(3));
        assert_eq!(Step::<i32, ()>::from(None), Step::Complete(()));
    }

    #[test]
    #[should_panic(expected = "called `Step::unwrap_yielded()` on a `Complete` value")]
    fn test_unwrap_yielded_panics() {
        let d: Step<i32, &str> = Step::Complete("complete");
        d.unwrap_yielded();
    }

    #[test]
    #[should_panic(expected = "called `Step::unwrap_complete()` on a `Yielded` value")]
    fn test_unwrap_complete_panics() {
        let y: Step<i32, &str> = Step::Yielded(42);
        y.unwrap_complete();
    }
}
