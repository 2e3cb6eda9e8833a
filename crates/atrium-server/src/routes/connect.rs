//! Room connection endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use atrium_core::deadline::with_deadline;

use crate::error::{ApiError, ApiResult};
use crate::extractors::ApiJson;
use crate::state::AppState;

/// Request body for connecting a user to a room.
#[derive(Debug, Deserialize)]
pub struct ConnectUserRequest {
    #[serde(alias = "userID")]
    pub user_id: String,
}

/// Response for a new connection: the edge identity and the user it
/// resolved.
#[derive(Debug, Serialize)]
pub struct ConnectUserResponse {
    pub id: String,
    pub user: String,
}

/// Connect a user to a room.
/// POST /rooms/:id/connect
pub async fn connect_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<ConnectUserRequest>,
) -> ApiResult<(StatusCode, Json<ConnectUserResponse>)> {
    let connection = with_deadline(
        state.request_budget,
        "connect user to room",
        state.connector.connect(&id, &request.user_id),
    )
    .await
    .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(ConnectUserResponse {
            id: connection.edge_id,
            user: connection.user_id,
        }),
    ))
}
