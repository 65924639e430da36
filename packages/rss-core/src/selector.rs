use crate::loader::normalize_subject_id;
use crate::store::SignalStore;
use crate::types::{Selection, WideRow, WideTable};

/// Collapse a label for substring matching: lowercase, whitespace removed.
/// "RSS 12" and "rss12" both become "rss12".
fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Filter the store down to one interaction's view.
///
/// A value column is kept when its normalized name contains the normalized
/// activity label AND at least one of the normalized sensor-pair labels;
/// a row is kept when its measure type and normalized subject id match the
/// request. An empty sensor-pair list selects no columns, and an unknown
/// subject or activity yields an empty table; neither is an error.
pub fn select(store: &SignalStore, selection: &Selection) -> WideTable {
    let activity = normalize(&selection.activity);
    let pairs: Vec<String> = selection
        .sensor_pairs
        .iter()
        .map(|p| normalize(p))
        .filter(|p| !p.is_empty())
        .collect();

    let mut column_indices = Vec::new();
    let mut columns = Vec::new();
    if !pairs.is_empty() {
        for (idx, name) in store.columns().iter().enumerate() {
            let normalized = normalize(name);
            if normalized.contains(&activity) && pairs.iter().any(|p| normalized.contains(p.as_str()))
            {
                column_indices.push(idx);
                columns.push(name.clone());
            }
        }
    }

    let subject_id = normalize_subject_id(&selection.subject_id);
    let rows: Vec<WideRow> = store
        .rows()
        .iter()
        .filter(|row| row.measure == selection.measure && row.subject_id == subject_id)
        .map(|row| WideRow {
            subject_id: row.subject_id.clone(),
            time: row.time,
            values: column_indices.iter().map(|&i| row.values[i]).collect(),
        })
        .collect();

    log::debug!(
        "Selection matched {} columns and {} rows",
        columns.len(),
        rows.len()
    );

    WideTable { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MeasureType, Observation};

    fn test_store() -> SignalStore {
        let columns = vec![
            "bending1_rss12".to_string(),
            "bending1_rss13".to_string(),
            "bending1_rss23".to_string(),
            "walking_rss12".to_string(),
        ];
        let mut rows = Vec::new();
        for measure in [MeasureType::Mean, MeasureType::Variance] {
            for subject in ["1", "7"] {
                for t in 0..3 {
                    rows.push(Observation {
                        subject_id: subject.to_string(),
                        time: t as f64 * 250.0,
                        measure,
                        values: vec![20.0, 21.0, 22.0, 23.0],
                    });
                }
            }
        }
        SignalStore::new(columns, rows)
    }

    fn selection(
        measure: MeasureType,
        subject: &str,
        activity: &str,
        pairs: &[&str],
    ) -> Selection {
        Selection {
            measure,
            subject_id: subject.to_string(),
            activity: activity.to_string(),
            sensor_pairs: pairs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_activity_and_pair_restrict_columns() {
        let store = test_store();
        let wide = select(
            &store,
            &selection(MeasureType::Mean, "1", "bending1", &["RSS 12"]),
        );
        assert_eq!(wide.columns, vec!["bending1_rss12"]);
        assert_eq!(wide.rows.len(), 3);
    }

    #[test]
    fn test_rows_match_measure_and_subject() {
        let store = test_store();
        let wide = select(
            &store,
            &selection(MeasureType::Variance, "7", "bending1", &["RSS 12", "RSS 13"]),
        );
        assert_eq!(wide.columns.len(), 2);
        assert_eq!(wide.rows.len(), 3);
        for row in &wide.rows {
            assert_eq!(row.subject_id, "7");
            assert_eq!(row.values, vec![20.0, 21.0]);
        }
    }

    #[test]
    fn test_subject_id_normalized_before_matching() {
        let store = test_store();
        for query in ["7", "7.0", " 7 "] {
            let wide = select(
                &store,
                &selection(MeasureType::Mean, query, "bending1", &["RSS 12"]),
            );
            assert_eq!(wide.rows.len(), 3, "query '{}' should match", query);
        }
    }

    #[test]
    fn test_unknown_subject_yields_empty_table() {
        let store = test_store();
        let wide = select(
            &store,
            &selection(MeasureType::Mean, "99", "bending1", &["RSS 12"]),
        );
        assert_eq!(wide.columns.len(), 1);
        assert!(wide.rows.is_empty());
    }

    #[test]
    fn test_empty_sensor_pairs_selects_no_columns() {
        let store = test_store();
        let wide = select(&store, &selection(MeasureType::Mean, "1", "bending1", &[]));
        assert!(wide.columns.is_empty());
        assert!(wide.is_empty());
    }

    #[test]
    fn test_unknown_activity_selects_no_columns() {
        let store = test_store();
        let wide = select(
            &store,
            &selection(MeasureType::Mean, "1", "sitting", &["RSS 12"]),
        );
        assert!(wide.columns.is_empty());
    }

    #[test]
    fn test_sensor_pair_matching_is_case_and_space_insensitive() {
        let store = test_store();
        for label in ["RSS 12", "rss12", "Rss 12", " rss 12 "] {
            let wide = select(
                &store,
                &selection(MeasureType::Mean, "1", "bending1", &[label]),
            );
            assert_eq!(wide.columns, vec!["bending1_rss12"], "label '{}'", label);
        }
    }

    #[test]
    fn test_column_order_follows_store_order() {
        let store = test_store();
        let wide = select(
            &store,
            &selection(MeasureType::Mean, "1", "bending1", &["RSS 23", "RSS 12"]),
        );
        assert_eq!(wide.columns, vec!["bending1_rss12", "bending1_rss23"]);
    }
}
