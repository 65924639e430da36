use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RssError;

/// Whether a value summarizes a signal-strength series as its mean or its
/// variance. Rows from the mean CSV carry `Mean`, rows from the variance
/// CSV carry `Variance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureType {
    Mean,
    Variance,
}

impl MeasureType {
    pub const ALL: [MeasureType; 2] = [MeasureType::Mean, MeasureType::Variance];

    /// Lowercase tag, matching the source-file labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureType::Mean => "mean",
            MeasureType::Variance => "variance",
        }
    }
}

impl FromStr for MeasureType {
    type Err = RssError;

    /// Case-insensitive: the reference UI sends "Mean"/"Variance".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mean" => Ok(MeasureType::Mean),
            "variance" => Ok(MeasureType::Variance),
            other => Err(RssError::InvalidParameter(format!(
                "unknown measure type '{}', expected 'mean' or 'variance'",
                other
            ))),
        }
    }
}

impl fmt::Display for MeasureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the unified table: a (subject, time) sample of every
/// activity/sensor-pair column, tagged with its measure type.
///
/// `subject_id` is always the normalized string form ("7", never "7.0");
/// see [`crate::loader::normalize_subject_id`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub subject_id: String,
    pub time: f64,
    pub measure: MeasureType,
    /// Parallel to the store's column list.
    pub values: Vec<f64>,
}

/// One dashboard interaction's worth of filter parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    pub measure: MeasureType,
    pub subject_id: String,
    /// Activity label matched against column names (e.g. "bending1").
    pub activity: String,
    /// Sensor-pair labels, matched case-insensitively with whitespace
    /// stripped (e.g. "RSS 12" matches a "..._rss12" column).
    pub sensor_pairs: Vec<String>,
}

/// Filtered wide-format row: subject and time plus one value per selected
/// column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WideRow {
    pub subject_id: String,
    pub time: f64,
    pub values: Vec<f64>,
}

/// Output of the selector: the matched value columns (in store order) and
/// the matching rows. Zero columns or zero rows is a designed degenerate
/// case, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WideTable {
    pub columns: Vec<String>,
    pub rows: Vec<WideRow>,
}

impl WideTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}

/// One long-format (tidy) observation, ready for direct charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongRow {
    pub subject_id: String,
    pub time: f64,
    /// Name of the wide column this value came from.
    pub variable: String,
    pub value: f64,
}

/// Long-format table, one row per (input row x value column) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LongTable {
    pub rows: Vec<LongRow>,
}

impl LongTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The payload handed to the presenter: a chart title plus the long table.
/// The presenter draws one line per distinct `variable`, x = time,
/// y = value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub rows: Vec<LongRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_type_from_str_case_insensitive() {
        assert_eq!("Mean".parse::<MeasureType>().unwrap(), MeasureType::Mean);
        assert_eq!("mean".parse::<MeasureType>().unwrap(), MeasureType::Mean);
        assert_eq!(
            "VARIANCE".parse::<MeasureType>().unwrap(),
            MeasureType::Variance
        );
        assert_eq!(
            " variance ".parse::<MeasureType>().unwrap(),
            MeasureType::Variance
        );
    }

    #[test]
    fn test_measure_type_from_str_invalid() {
        assert!("median".parse::<MeasureType>().is_err());
        assert!("".parse::<MeasureType>().is_err());
    }

    #[test]
    fn test_measure_type_serde_lowercase() {
        let json = serde_json::to_string(&MeasureType::Variance).unwrap();
        assert_eq!(json, "\"variance\"");
    }
}
