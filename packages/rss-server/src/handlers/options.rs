use axum::{extract::State, Json};
use rss_core::types::MeasureType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::ServerState;

/// Dropdown options for the dashboard frontend, discovered from the
/// dataset at load time.
#[derive(Debug, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub activities: Vec<String>,
    pub sensor_pairs: Vec<String>,
    pub subject_ids: Vec<String>,
    pub measure_types: Vec<String>,
}

pub async fn dataset_options(State(state): State<Arc<ServerState>>) -> Json<OptionsResponse> {
    let store = &state.store;
    Json(OptionsResponse {
        activities: store.activities(),
        sensor_pairs: store.sensor_pair_labels(),
        subject_ids: store.subject_ids(),
        measure_types: MeasureType::ALL
            .iter()
            .map(|m| m.as_str().to_string())
            .collect(),
    })
}
