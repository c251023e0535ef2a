//! Eager higher-order helpers over slices.
//!
//! Every helper borrows its input, walks it once in index order and
//! materializes its result. Aggregates over an empty slice return the
//! zero value of the result type instead of failing.

pub mod math;
pub mod prelude;
pub mod seq;

pub use math::{Numeric, Summary};
pub use seq::{avg, map, max, min, reduce, sum, try_map, try_reduce};
