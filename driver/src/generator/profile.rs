use crate::dataset::Record;
use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use slicekit::map;

/// Configuration for generating a synthetic record dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub records: usize,
    pub seed: u64,
    pub field: String,
    pub min_value: f64,
    pub max_value: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 100,
            seed: 0,
            field: "value".to_string(),
            min_value: 0.0,
            max_value: 100.0,
        }
    }
}

/// Builds `records` objects shaped `{"id": n, <field>: <uniform sample>}`.
pub fn build_records(config: &GeneratorConfig) -> anyhow::Result<Vec<Record>> {
    ensure!(
        config.min_value.is_finite() && config.max_value.is_finite(),
        "generator bounds must be finite, got {}..{}",
        config.min_value,
        config.max_value
    );
    ensure!(
        config.min_value < config.max_value,
        "generator range is empty: min_value {} must be below max_value {}",
        config.min_value,
        config.max_value
    );
    ensure!(
        (config.max_value - config.min_value).is_finite(),
        "generator range {}..{} is too wide to sample",
        config.min_value,
        config.max_value
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let ids: Vec<usize> = (0..config.records).collect();
    let records = map(&ids, |&id| {
        let sample = rng.gen_range(config.min_value..config.max_value);
        let mut record = Record::new();
        record.insert("id".to_string(), Value::from(id));
        record.insert(config.field.clone(), Value::from(sample));
        record
    });

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::project;

    #[test]
    fn generator_builds_expected_record_count() {
        let records = build_records(&GeneratorConfig::default()).unwrap();
        assert_eq!(records.len(), 100);
        assert_eq!(records[7]["id"], Value::from(7));
    }

    #[test]
    fn generator_is_deterministic_per_seed() {
        let config = GeneratorConfig {
            records: 16,
            seed: 13,
            field: "energy".into(),
            min_value: -5.0,
            max_value: 5.0,
        };
        let first = project(&build_records(&config).unwrap(), "energy").unwrap();
        let second = project(&build_records(&config).unwrap(), "energy").unwrap();
        assert_eq!(first, second);
        assert!(first.iter().all(|v| (-5.0..5.0).contains(v)));
    }

    #[test]
    fn generator_rejects_empty_range() {
        let config = GeneratorConfig {
            min_value: 3.0,
            max_value: 3.0,
            ..Default::default()
        };
        assert!(build_records(&config).is_err());
    }

    #[test]
    fn generator_rejects_unbounded_ranges() {
        let wide = GeneratorConfig {
            min_value: -1e308,
            max_value: 1e308,
            ..Default::default()
        };
        assert!(build_records(&wide).is_err());

        let infinite = GeneratorConfig {
            max_value: f64::INFINITY,
            ..Default::default()
        };
        assert!(build_records(&infinite).is_err());

        let nan = GeneratorConfig {
            min_value: f64::NAN,
            ..Default::default()
        };
        assert!(build_records(&nan).is_err());
    }
}
