pub mod profile;

pub use profile::{build_records, GeneratorConfig};
