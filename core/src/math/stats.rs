use crate::math::numeric::Numeric;
use crate::seq::{avg, map, max, min, sum};
use serde::{Deserialize, Serialize};

/// Count plus the four aggregates of one projection over a slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary<V> {
    pub count: usize,
    pub sum: V,
    pub avg: V,
    pub min: V,
    pub max: V,
}

impl<V: Numeric> Summary<V> {
    /// Projects every element once with `f`, then aggregates the projected values.
    pub fn of<T, F>(ts: &[T], f: F) -> Self
    where
        F: FnMut(&T) -> V,
    {
        let values = map(ts, f);
        Self {
            count: values.len(),
            sum: sum(&values, |&v| v),
            avg: avg(&values, |&v| v),
            min: min(&values, |&v| v),
            max: max(&values, |&v| v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn summary_of_empty_slice_is_all_zero() {
        let summary = Summary::of(&[] as &[i32], |&v| v);
        assert_eq!(
            summary,
            Summary {
                count: 0,
                sum: 0,
                avg: 0,
                min: 0,
                max: 0,
            }
        );
    }

    #[test]
    fn summary_matches_individual_aggregates() {
        let values = [5, 2, 8, 1, 9];
        let summary = Summary::of(&values, |&v| v);
        assert_eq!(summary.count, 5);
        assert_eq!(summary.sum, 25);
        assert_eq!(summary.avg, 5);
        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 9);
    }

    #[test]
    fn summary_calls_accessor_once_per_element() {
        let calls = Cell::new(0);
        let summary = Summary::of(&[1.5_f64, 2.5, 3.0], |&v| {
            calls.set(calls.get() + 1);
            v
        });
        assert_eq!(calls.get(), 3);
        assert_eq!(summary.sum, 7.0);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = Summary::of(&[2_i64, 4, 6, 8], |&v| v);
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"count": 4, "sum": 20, "avg": 5, "min": 2, "max": 8})
        );
    }
}
