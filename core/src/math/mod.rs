pub mod numeric;
pub mod stats;

pub use numeric::Numeric;
pub use stats::Summary;
