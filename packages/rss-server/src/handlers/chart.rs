use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::Query;
use rss_core::types::{ChartData, MeasureType, Selection};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::state::ServerState;

/// Query params for one chart interaction.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// "mean" or "variance", case-insensitive
    pub measure: String,
    /// Subject id; integer-like values are normalized before matching
    pub subject: String,
    /// Activity label matched against column names
    pub activity: String,
    /// Sensor-pair labels, as repeated params (`sensors=RSS 12&sensors=RSS 13`)
    /// or comma-separated (`sensors=RSS 12,RSS 13`). Missing or empty means
    /// no columns are selected.
    #[serde(default)]
    pub sensors: Vec<String>,
}

/// Compute chart-ready long-format data for the requested selection.
///
/// An unknown measure type is a client error; a selection that matches
/// nothing is not, and returns an empty row list for the presenter to
/// render as an empty chart.
pub async fn chart_data(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartData>, (StatusCode, String)> {
    let measure: MeasureType = query
        .measure
        .parse()
        .map_err(|e: rss_core::RssError| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let selection = Selection {
        measure,
        subject_id: query.subject,
        activity: query.activity,
        sensor_pairs: split_sensors(&query.sensors),
    };

    let chart = rss_core::chart_data(&state.store, &selection);
    if chart.rows.is_empty() {
        debug!(
            "Selection matched no data (measure={}, subject={}, activity={})",
            selection.measure, selection.subject_id, selection.activity
        );
    }

    Ok(Json(chart))
}

fn split_sensors(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|entry| entry.split(','))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
