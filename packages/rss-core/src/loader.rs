use std::path::Path;

use crate::error::{Result, RssError};
use crate::store::SignalStore;
use crate::types::{MeasureType, Observation};

/// Canonical string form of a subject id.
///
/// Source files store ids numerically ("7", sometimes "7.0"); the matching
/// contract is that every comparison happens on the truncated-integer
/// string form. Non-numeric input passes through trimmed, so it simply
/// matches nothing.
pub fn normalize_subject_id(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => (v as i64).to_string(),
        _ => trimmed.to_string(),
    }
}

/// Read the mean and variance summary CSVs, tag each row with its measure
/// type, and concatenate them into one immutable store.
///
/// Fails if either file is missing, if a record is not numeric, or if the
/// two files do not share a column set. The caller is expected to treat
/// any error as fatal at startup: the pipeline must not serve an
/// incomplete dataset.
pub fn load<P: AsRef<Path>>(mean_path: P, variance_path: P) -> Result<SignalStore> {
    let mean_path = mean_path.as_ref();
    let variance_path = variance_path.as_ref();

    for path in [mean_path, variance_path] {
        if !path.exists() {
            return Err(RssError::FileNotFound(path.display().to_string()));
        }
    }

    let (columns, mut rows) = read_measure_file(mean_path, MeasureType::Mean)?;
    let (var_columns, var_rows) = read_measure_file(variance_path, MeasureType::Variance)?;

    if columns != var_columns {
        let var_rows = align_columns(&columns, &var_columns, var_rows).ok_or_else(|| {
            RssError::SchemaMismatch {
                mean_path: mean_path.display().to_string(),
                variance_path: variance_path.display().to_string(),
                detail: schema_diff(&columns, &var_columns),
            }
        })?;
        rows.extend(var_rows);
    } else {
        rows.extend(var_rows);
    }

    log::info!(
        "Loaded {} observations ({} columns) from {} and {}",
        rows.len(),
        columns.len(),
        mean_path.display(),
        variance_path.display()
    );

    Ok(SignalStore::new(columns, rows))
}

/// Read one summary CSV. Returns the data-column names in file order and
/// one tagged observation per record.
fn read_measure_file(path: &Path, measure: MeasureType) -> Result<(Vec<String>, Vec<Observation>)> {
    let file_name = path.display().to_string();
    let mut reader = csv::Reader::from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let subject_idx = headers
        .iter()
        .position(|h| h == "subject_id")
        .ok_or_else(|| RssError::MalformedRecord {
            file: file_name.clone(),
            line: 1,
            detail: "missing required column 'subject_id'".to_string(),
        })?;
    let time_idx = headers
        .iter()
        .position(|h| h == "time")
        .ok_or_else(|| RssError::MalformedRecord {
            file: file_name.clone(),
            line: 1,
            detail: "missing required column 'time'".to_string(),
        })?;

    let data_indices: Vec<usize> = (0..headers.len())
        .filter(|&i| i != subject_idx && i != time_idx)
        .collect();
    let columns: Vec<String> = data_indices.iter().map(|&i| headers[i].clone()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let parse_cell = |idx: usize| -> Result<f64> {
            let cell = record.get(idx).unwrap_or("");
            cell.trim().parse::<f64>().map_err(|_| RssError::MalformedRecord {
                file: file_name.clone(),
                line,
                detail: format!("non-numeric value '{}' in column '{}'", cell, headers[idx]),
            })
        };

        let subject_id = normalize_subject_id(record.get(subject_idx).unwrap_or(""));
        let time = parse_cell(time_idx)?;
        let values = data_indices
            .iter()
            .map(|&i| parse_cell(i))
            .collect::<Result<Vec<f64>>>()?;

        rows.push(Observation {
            subject_id,
            time,
            measure,
            values,
        });
    }

    Ok((columns, rows))
}

/// Reorder `rows` (whose values follow `from` column order) into `to`
/// column order. Returns None if the two orders are not permutations of
/// the same set.
fn align_columns(
    to: &[String],
    from: &[String],
    rows: Vec<Observation>,
) -> Option<Vec<Observation>> {
    if to.len() != from.len() {
        return None;
    }
    let mapping: Option<Vec<usize>> = to
        .iter()
        .map(|name| from.iter().position(|f| f == name))
        .collect();
    let mapping = mapping?;

    Some(
        rows.into_iter()
            .map(|mut row| {
                row.values = mapping.iter().map(|&i| row.values[i]).collect();
                row
            })
            .collect(),
    )
}

fn schema_diff(mean_cols: &[String], var_cols: &[String]) -> String {
    let only_mean: Vec<&str> = mean_cols
        .iter()
        .filter(|c| !var_cols.contains(c))
        .map(|s| s.as_str())
        .collect();
    let only_var: Vec<&str> = var_cols
        .iter()
        .filter(|c| !mean_cols.contains(c))
        .map(|s| s.as_str())
        .collect();
    format!(
        "columns only in mean file: [{}]; columns only in variance file: [{}]",
        only_mean.join(", "),
        only_var.join(", ")
    )
}
