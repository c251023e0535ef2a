pub use crate::math::numeric::Numeric;
pub use crate::math::stats::Summary;
pub use crate::seq::{avg, map, max, min, reduce, sum, try_map, try_reduce};
