//! Filter options for listing clients

use analytics::FilterOptions;
use axum::{Json, extract::State};

use crate::AppState;

/// GET /filters/options
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(FilterOptions::from_dataset(&state.dataset))
}
