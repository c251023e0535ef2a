pub mod record;

pub use record::{load_records, project, project_integers, Record};
