use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::state::UsersState;

/// Axum handler for `GET /api/users`.
pub async fn users_handler(
    State(state): State<UsersState>,
) -> Result<Json<Vec<Value>>, AppError> {
    let users = state.users.list_all().await?;
    Ok(Json(users))
}
