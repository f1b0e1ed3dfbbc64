//! Movie listing with filters, sorting and pagination

use axum::{
    Json,
    extract::{Query, State},
};
use query::{QuerySpec, execute};

use crate::AppState;
use crate::error::Result;
use crate::views::MovieListResponse;

/// GET /movies
///
/// Every query parameter is optional. A value of the wrong type (for
/// example `year_min=abc`) is rejected by the extractor with 400. The scan
/// runs on the blocking pool, like the analytics scan.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(spec): Query<QuerySpec>,
) -> Result<Json<MovieListResponse>> {
    let dataset = state.dataset.clone();
    let response = tokio::task::spawn_blocking(move || {
        MovieListResponse::from(execute(&dataset, &spec))
    })
    .await?;
    Ok(Json(response))
}
