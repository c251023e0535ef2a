use crate::dataset::{load_records, project, project_integers, Record};
use crate::generator::build_records;
use crate::report::AggregateReport;
use crate::workflow::config::{Operation, WorkloadConfig};
use anyhow::Context;
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;
use slicekit::{avg, max, min, sum, Numeric, Summary};

#[derive(Clone)]
pub struct Runner {
    config: WorkloadConfig,
}

impl Runner {
    pub fn new(config: WorkloadConfig) -> Self {
        Self { config }
    }

    /// Loads the configured dataset, or generates one when no file is set.
    pub fn records(&self) -> anyhow::Result<Vec<Record>> {
        match &self.config.dataset {
            Some(path) => load_records(path),
            None => {
                let generator = self.config.generator_config();
                info!(
                    "generating {} records (seed {})",
                    generator.records, generator.seed
                );
                build_records(&generator)
            }
        }
    }

    pub fn execute(&self, records: &[Record]) -> anyhow::Result<AggregateReport> {
        let field = &self.config.field;
        let mut report = AggregateReport::new(field, records.len(), self.config.integer);
        if self.config.integer {
            let values = project_integers(records, field)
                .with_context(|| format!("projecting field `{}`", field))?;
            self.log_projection(values.len());
            self.evaluate_all(&values, &mut report)?;
        } else {
            let values = project(records, field)
                .with_context(|| format!("projecting field `{}`", field))?;
            self.log_projection(values.len());
            self.evaluate_all(&values, &mut report)?;
        }
        Ok(report)
    }

    fn log_projection(&self, count: usize) {
        info!("projected {} values from `{}`", count, self.config.field);
        if count == 0 {
            warn!("dataset is empty; aggregates report zero");
        }
    }

    pub fn run(&self) -> anyhow::Result<AggregateReport> {
        let records = self.records()?;
        self.execute(&records)
    }

    fn evaluate_all<V>(&self, values: &[V], report: &mut AggregateReport) -> anyhow::Result<()>
    where
        V: Numeric + Serialize,
    {
        for &operation in &self.config.operations {
            let value = evaluate(values, operation)
                .with_context(|| format!("encoding {:?} result", operation))?;
            debug!("{:?} -> {}", operation, value);
            report.push(operation, value);
        }
        Ok(())
    }
}

fn evaluate<V>(values: &[V], operation: Operation) -> serde_json::Result<Value>
where
    V: Numeric + Serialize,
{
    match operation {
        Operation::Sum => serde_json::to_value(sum(values, |&v| v)),
        Operation::Avg => serde_json::to_value(avg(values, |&v| v)),
        Operation::Min => serde_json::to_value(min(values, |&v| v)),
        Operation::Max => serde_json::to_value(max(values, |&v| v)),
        Operation::Values => serde_json::to_value(values),
        Operation::Summary => serde_json::to_value(Summary::of(values, |&v| v)),
    }
}
