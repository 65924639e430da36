use crate::types::{MeasureType, Observation};

/// The unified mean+variance table.
///
/// Built once by the loader at startup and never mutated afterwards; the
/// server shares it behind an `Arc` and every interaction computes a
/// transient filtered view from it.
#[derive(Debug, Clone)]
pub struct SignalStore {
    /// Data-column names in file order (everything except subject_id/time).
    columns: Vec<String>,
    rows: Vec<Observation>,
}

impl SignalStore {
    /// Normally constructed via [`crate::loader::load`].
    pub fn new(columns: Vec<String>, rows: Vec<Observation>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn measure_count(&self, measure: MeasureType) -> usize {
        self.rows.iter().filter(|r| r.measure == measure).count()
    }

    /// Distinct activity labels, parsed from the `<activity>_rss<pair>`
    /// column convention, in first-seen column order.
    pub fn activities(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for name in &self.columns {
            if let Some(idx) = name.rfind("_rss") {
                let activity = &name[..idx];
                if !activity.is_empty() && !seen.iter().any(|s| s == activity) {
                    seen.push(activity.to_string());
                }
            }
        }
        seen
    }

    /// Distinct sensor-pair display labels ("RSS 12", "RSS 13", ...),
    /// derived from the `rss<pair>` column suffixes, sorted.
    pub fn sensor_pair_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for name in &self.columns {
            if let Some(idx) = name.rfind("_rss") {
                let digits = &name[idx + "_rss".len()..];
                if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                    let label = format!("RSS {}", digits);
                    if !labels.contains(&label) {
                        labels.push(label);
                    }
                }
            }
        }
        labels.sort();
        labels
    }

    /// Distinct subject ids, sorted numerically where possible.
    pub fn subject_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for row in &self.rows {
            if !ids.contains(&row.subject_id) {
                ids.push(row.subject_id.clone());
            }
        }
        ids.sort_by(|a, b| match (a.parse::<i64>(), b.parse::<i64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            _ => a.cmp(b),
        });
        ids
    }
}
