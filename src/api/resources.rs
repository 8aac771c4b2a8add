use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::state::ResourcesState;

/// Axum handler for the legacy `GET /api/resources` endpoint.
///
/// Predates the paginated feeds: returns the whole news collection in
/// one response, identifier stripped, in server order.
pub async fn resources_handler(
    State(state): State<ResourcesState>,
) -> Result<Json<Vec<Value>>, AppError> {
    let resources = state.resources.find_all().await?;
    Ok(Json(resources))
}
