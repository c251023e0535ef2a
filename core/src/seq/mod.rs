//! Map, fold and aggregate helpers.
//!
//! Caller-supplied closures receive elements by reference and are invoked
//! exactly once per element, in index order. Panics raised inside a closure
//! unwind through these helpers untouched; the `try_` variants hand back the
//! closure's first `Err` as-is.

pub mod aggregate;
pub mod transform;

pub use aggregate::{avg, max, min, sum};
pub use transform::{map, reduce, try_map, try_reduce};
