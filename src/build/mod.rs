//! Sequences built from scratch or replayed from a source
//!
//! This module provides the generators that start a pipeline.

mod count;
mod cycle;
mod func;
mod repeat;

pub use count::{Count, count, count_up};
pub use cycle::{Cycle, CycleBuffered, cycle, cycle_buffered};
pub use func::{FromFn, FromIter, from_fn, to_generator};
pub use repeat::{Repeat, RepeatN, repeat, repeat_n};
