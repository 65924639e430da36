use crate::loader::normalize_subject_id;
use crate::selector::select;
use crate::store::SignalStore;
use crate::types::{ChartData, LongRow, LongTable, Selection, WideTable};

/// Unpivot a wide table into long (tidy) format.
///
/// Output is variable-major: all rows of the first value column first,
/// each series contiguous and in original row order, so the presenter can
/// draw each line without reordering. Row count is exactly
/// `wide.rows.len() * wide.columns.len()`; no aggregation happens.
pub fn melt(wide: &WideTable) -> LongTable {
    let mut rows = Vec::with_capacity(wide.rows.len() * wide.columns.len());
    for (col_idx, variable) in wide.columns.iter().enumerate() {
        for row in &wide.rows {
            rows.push(LongRow {
                subject_id: row.subject_id.clone(),
                time: row.time,
                variable: variable.clone(),
                value: row.values[col_idx],
            });
        }
    }
    LongTable { rows }
}

/// The full per-interaction computation: Selector then Reshaper plus the
/// chart title. Pure with respect to the store; calling it twice with the
/// same selection yields the same table.
pub fn chart_data(store: &SignalStore, selection: &Selection) -> ChartData {
    let wide = select(store, selection);
    let long = melt(&wide);
    ChartData {
        title: format!(
            "Time series signal strength, subject {}",
            normalize_subject_id(&selection.subject_id)
        ),
        rows: long.rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WideRow;

    fn wide_two_columns() -> WideTable {
        WideTable {
            columns: vec!["bending1_rss12".to_string(), "bending1_rss13".to_string()],
            rows: vec![
                WideRow {
                    subject_id: "1".to_string(),
                    time: 0.0,
                    values: vec![20.0, 30.0],
                },
                WideRow {
                    subject_id: "1".to_string(),
                    time: 250.0,
                    values: vec![21.0, 31.0],
                },
            ],
        }
    }

    #[test]
    fn test_melt_row_count() {
        let long = melt(&wide_two_columns());
        assert_eq!(long.len(), 4);
    }

    #[test]
    fn test_melt_is_variable_major() {
        let long = melt(&wide_two_columns());
        let variables: Vec<&str> = long.rows.iter().map(|r| r.variable.as_str()).collect();
        assert_eq!(
            variables,
            vec![
                "bending1_rss12",
                "bending1_rss12",
                "bending1_rss13",
                "bending1_rss13"
            ]
        );
        let values: Vec<f64> = long.rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![20.0, 21.0, 30.0, 31.0]);
    }

    #[test]
    fn test_melt_empty_rows() {
        let wide = WideTable {
            columns: vec!["bending1_rss12".to_string()],
            rows: vec![],
        };
        assert!(melt(&wide).is_empty());
    }

    #[test]
    fn test_melt_no_columns() {
        let wide = WideTable {
            columns: vec![],
            rows: vec![WideRow {
                subject_id: "1".to_string(),
                time: 0.0,
                values: vec![],
            }],
        };
        assert!(melt(&wide).is_empty());
    }

    #[test]
    fn test_single_column_round_trip() {
        // Pivoting a one-column long table back on `variable` must recover
        // the wide table.
        let wide = WideTable {
            columns: vec!["bending1_rss12".to_string()],
            rows: vec![
                WideRow {
                    subject_id: "1".to_string(),
                    time: 0.0,
                    values: vec![20.0],
                },
                WideRow {
                    subject_id: "1".to_string(),
                    time: 250.0,
                    values: vec![21.0],
                },
            ],
        };
        let long = melt(&wide);

        let recovered = WideTable {
            columns: vec![long.rows[0].variable.clone()],
            rows: long
                .rows
                .iter()
                .map(|r| WideRow {
                    subject_id: r.subject_id.clone(),
                    time: r.time,
                    values: vec![r.value],
                })
                .collect(),
        };
        assert_eq!(recovered, wide);
    }
}
