use crate::generator::GeneratorConfig;
use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Aggregation applied to the projected field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Sum,
    Avg,
    Min,
    Max,
    /// Emit the projected values themselves.
    Values,
    Summary,
}

fn default_operations() -> Vec<Operation> {
    vec![Operation::Sum, Operation::Avg, Operation::Min, Operation::Max]
}

fn default_field() -> String {
    "value".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkloadConfig {
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    #[serde(default = "default_field")]
    pub field: String,
    #[serde(default = "default_operations")]
    pub operations: Vec<Operation>,
    /// Truncate projected values to `i64` before aggregating.
    #[serde(default)]
    pub integer: bool,
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
}

impl WorkloadConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workload config {}", path_ref.display()))?;
        let config: WorkloadConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workload config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        dataset: Option<PathBuf>,
        field: String,
        operations: Vec<Operation>,
        integer: bool,
    ) -> Self {
        let operations = if operations.is_empty() {
            default_operations()
        } else {
            operations
        };
        Self {
            dataset,
            field,
            operations,
            integer,
            generator: None,
        }
    }

    /// Generator settings for runs without a dataset file; the generated
    /// field always matches the configured one.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            field: self.field.clone(),
            ..self.generator.clone().unwrap_or_default()
        }
    }
}
