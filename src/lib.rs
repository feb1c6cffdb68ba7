//! # Lazyseq: Lazy Sequence Combinators
//!
//! Produce and reshape ordered series of values one element at a time, on demand,
//! without materializing the whole series.
//!
//! ## Core Types
//!
//! - **[`Generator`]**: a resumable state machine that yields elements until it
//!   completes with a return value
//! - **[`Gen`]**: the fused [`Iterator`] every constructor hands out
//! - **[`Step`]**: the outcome of one resume, `Yielded` or `Complete`
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! // running totals of the odd numbers, stopping once they pass 50
//! let odds = filter(count_up::<u32>(), |n| n % 2 == 1);
//! let totals = take_while(accumulate(odds), |t| *t <= 50);
//!
//! assert_eq!(totals.collect::<Vec<_>>(), vec![1, 4, 9, 16, 25, 36, 49]);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`count(start, step)`](count) - Arithmetic progression, forever
//! - [`repeat(value)`](repeat) / [`repeat_n(value, times)`](repeat_n) - One value, forever or `times` times
//! - [`cycle(range)`](cycle) / [`cycle_buffered(range)`](cycle_buffered) - Replay a sequence forever
//! - [`from_fn(f)`](from_fn) - Generator from a closure
//!
//! **Selection:**
//! - [`filter`], [`take_while`], [`drop_while`], [`compress`]
//!
//! **Transformation:**
//! - [`transform`], [`star_transform`], [`accumulate`], [`accumulate_with`]
//!
//! **Structure:**
//! - [`chain`] / [`chain!`] - Same-typed sources back to back
//! - [`chain_heterogeneous`] / [`chain_heterogeneous!`] - Mixed sources, tagged with [`Either`]
//! - [`group_by`] - Contiguous runs of equal key
//!
//! **Fallible pipelines:**
//! - [`try_filter`] - Predicate that may fail
//! - [`short_circuit`] - Stop at the first `Err`

pub mod build;
pub mod compose;
mod error;
mod generator;
mod iter;
pub mod prelude;
mod result;
pub mod select;
mod step;
pub mod transform;

pub use build::*;
pub use compose::*;
pub use either::Either;
pub use error::*;
pub use generator::*;
pub use iter::*;
pub use result::*;
pub use select::*;
pub use step::*;
pub use transform::*;
