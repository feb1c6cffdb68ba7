/// Call a function with the fields of a tuple as separate arguments.
///
/// Implemented for every `FnMut` of one to six arguments, with the matching tuple
/// as `Args`. This is what lets [`star_transform`](crate::star_transform) take a
/// closure like `|a: f64, b: f64| a * b` over a sequence of pairs.
pub trait SpreadFn<Args> {
    type Output;

    fn call_spread(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_spread_fn {
    ($($arg:ident),+) => {
        impl<Func, Out, $($arg),+> SpreadFn<($($arg,)+)> for Func
        where
            Func: FnMut($($arg),+) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn call_spread(&mut self, ($($arg,)+): ($($arg,)+)) -> Out {
                self($($arg),+)
            }
        }
    };
}

impl_spread_fn!(A);
impl_spread_fn!(A, B);
impl_spread_fn!(A, B, C);
impl_spread_fn!(A, B, C, D);
impl_spread_fn!(A, B, C, D, E);
impl_spread_fn!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_pair_and_triple() {
        let mut mul = |a: i32, b: i32| a * b;
        assert_eq!(mul.call_spread((6, 7)), 42);

        let mut join = |a: &str, b: char, c: u8| format!("{a}{b}{c}");
        assert_eq!(join.call_spread(("x", '-', 1)), "x-1");
    }

    #[test]
    fn test_spread_single_element_tuple() {
        let mut negate = |x: i64| -x;
        assert_eq!(negate.call_spread((5,)), -5);
    }
}
