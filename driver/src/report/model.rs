use crate::workflow::config::Operation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperationOutcome {
    pub operation: Operation,
    pub value: Value,
}

/// Result of one workload run, written out as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AggregateReport {
    pub field: String,
    pub record_count: usize,
    pub integer: bool,
    pub results: Vec<OperationOutcome>,
}

impl AggregateReport {
    pub fn new(field: &str, record_count: usize, integer: bool) -> Self {
        Self {
            field: field.to_string(),
            record_count,
            integer,
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, operation: Operation, value: Value) {
        self.results.push(OperationOutcome { operation, value });
    }

    #[cfg(test)]
    pub fn value(&self, operation: Operation) -> Option<&Value> {
        self.results
            .iter()
            .find(|outcome| outcome.operation == operation)
            .map(|outcome| &outcome.value)
    }
}
