use anyhow::Context;
use serde_json::{Map, Value};
use slicekit::{try_map, try_reduce};
use std::fs;
use std::path::Path;

/// One flat JSON object from a dataset file.
pub type Record = Map<String, Value>;

/// Errors raised while turning raw JSON into projected numbers.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DatasetError {
    #[error("dataset entries must be JSON objects, found {0}")]
    NotAnObject(String),
    #[error("record {index} has no field `{field}`")]
    MissingField { index: usize, field: String },
    #[error("record {index} field `{field}` is not numeric")]
    NotNumeric { index: usize, field: String },
}

pub fn load_records<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Record>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading dataset {}", path_ref.display()))?;
    let entries: Vec<Value> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing dataset {}", path_ref.display()))?;
    let records = try_map(&entries, |entry| {
        entry
            .as_object()
            .cloned()
            .ok_or_else(|| DatasetError::NotAnObject(kind_of(entry).to_string()))
    })?;
    Ok(records)
}

/// Reads `field` from every record as a number, failing on the first record
/// that lacks it or holds a non-numeric value.
pub fn project(records: &[Record], field: &str) -> Result<Vec<f64>, DatasetError> {
    project_with(records, field, Value::as_f64)
}

/// Integer counterpart of [`project`]. Integral JSON numbers are read
/// exactly; fractional ones truncate toward zero and saturate at the `i64`
/// bounds.
pub fn project_integers(records: &[Record], field: &str) -> Result<Vec<i64>, DatasetError> {
    project_with(records, field, |raw| {
        raw.as_i64().or_else(|| raw.as_f64().map(|v| v as i64))
    })
}

fn project_with<V, R>(records: &[Record], field: &str, read: R) -> Result<Vec<V>, DatasetError>
where
    R: Fn(&Value) -> Option<V>,
{
    // The accumulator length doubles as the index of the record being read.
    try_reduce(
        records,
        |mut values: Vec<V>, record| {
            let index = values.len();
            let raw = record
                .get(field)
                .ok_or_else(|| DatasetError::MissingField {
                    index,
                    field: field.to_string(),
                })?;
            let value = read(raw).ok_or_else(|| DatasetError::NotNumeric {
                index,
                field: field.to_string(),
            })?;
            values.push(value);
            Ok(values)
        },
        Vec::with_capacity(records.len()),
    )
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn load_records_reads_json_array() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(br#"[{"name": "Alice", "age": 30}, {"name": "Bob", "age": 25}]"#)
            .unwrap();
        let path = temp.into_temp_path();
        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["name"], json!("Bob"));
    }

    #[test]
    fn load_records_rejects_non_objects() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"[{\"age\": 1}, 7]").unwrap();
        let path = temp.into_temp_path();
        let err = load_records(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DatasetError>(),
            Some(&DatasetError::NotAnObject("a number".into()))
        );
    }

    #[test]
    fn project_extracts_numbers_in_order() {
        let records = vec![
            record(json!({"age": 30})),
            record(json!({"age": 25})),
            record(json!({"age": 35.5})),
        ];
        assert_eq!(project(&records, "age").unwrap(), vec![30.0, 25.0, 35.5]);
    }

    #[test]
    fn project_reports_first_bad_record() {
        let records = vec![
            record(json!({"age": 30})),
            record(json!({"name": "Bob"})),
            record(json!({"age": "old"})),
        ];
        assert_eq!(
            project(&records, "age"),
            Err(DatasetError::MissingField {
                index: 1,
                field: "age".into()
            })
        );
    }

    #[test]
    fn project_rejects_non_numeric_values() {
        let records = vec![record(json!({"age": "old"}))];
        assert_eq!(
            project(&records, "age"),
            Err(DatasetError::NotNumeric {
                index: 0,
                field: "age".into()
            })
        );
    }

    #[test]
    fn project_integers_keeps_exact_large_values() {
        let records = vec![
            record(json!({"age": 9_007_199_254_740_993_i64})),
            record(json!({"age": -7.9})),
            record(json!({"age": 1e300})),
        ];
        assert_eq!(
            project_integers(&records, "age").unwrap(),
            vec![9_007_199_254_740_993, -7, i64::MAX]
        );
    }

    #[test]
    fn project_integers_rejects_non_numeric_values() {
        let records = vec![record(json!({"age": 3})), record(json!({"age": null}))];
        assert_eq!(
            project_integers(&records, "age"),
            Err(DatasetError::NotNumeric {
                index: 1,
                field: "age".into()
            })
        );
    }
}
