//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Gen, Generator, Step};

// Sources
pub use crate::build::{count, count_up, cycle, cycle_buffered, from_fn, repeat, repeat_n, to_generator};

// Selection
pub use crate::select::{Selector, compress, drop_while, filter, take_while, try_filter};

// Transformation
pub use crate::transform::{SpreadFn, accumulate, accumulate_with, star_transform, transform};

// Structure
pub use crate::compose::{chain, chain_all, chain_heterogeneous, group_by};

// Fallible pipelines
pub use crate::result::short_circuit;
