//! Combining and restructuring sequences
//!
//! This module provides the combinators that join several sequences into one, or
//! split one sequence into groups.

mod chain;
mod group;
mod hetero;
mod many;

pub use chain::{Chain, chain};
pub use group::{Collected, Group, GroupBy, group_by};
pub use hetero::{ChainHeterogeneous, chain_heterogeneous};
pub use many::{ChainAll, chain_all};
