//! Catalog analytics

use analytics::AnalyticsSnapshot;
use axum::{Json, extract::State};

use crate::AppState;
use crate::error::Result;

/// GET /analytics
///
/// The full-catalog scan runs on the blocking pool.
pub async fn get_analytics(State(state): State<AppState>) -> Result<Json<AnalyticsSnapshot>> {
    let dataset = state.dataset.clone();
    let snapshot = tokio::task::spawn_blocking(move || AnalyticsSnapshot::compute(&dataset)).await?;
    Ok(Json(snapshot))
}
