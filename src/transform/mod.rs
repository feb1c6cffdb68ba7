//! Per-element mapping and running folds
//!
//! [`transform`] and [`star_transform`] map one element to one element;
//! [`accumulate`] threads a running value through the sequence.

mod accumulate;
mod map;
mod spread;

pub use accumulate::{Accumulate, accumulate, accumulate_with};
pub use map::{StarTransform, Transform, star_transform, transform};
pub use spread::SpreadFn;
