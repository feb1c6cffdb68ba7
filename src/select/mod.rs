//! Dropping elements from a sequence
//!
//! Every combinator here yields a subsequence of its input, in input order.

mod compress;
mod filter;
mod take_while;

pub use compress::{Compress, Selector, compress};
pub use filter::{Filter, TryFilter, filter, try_filter};
pub use take_while::{DropWhile, TakeWhile, drop_while, take_while};
