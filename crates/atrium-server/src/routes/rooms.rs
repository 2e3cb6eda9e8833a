//! Room CRUD endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use atrium_core::deadline::with_deadline;
use atrium_core::types::{NewRoom, Room, RoomPatch};

use crate::error::{ApiError, ApiResult};
use crate::extractors::ApiJson;
use crate::state::AppState;

/// Request body for creating a room.
#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
}

/// Response for creating a room: the URI of the new resource.
#[derive(Debug, Serialize)]
pub struct CreateRoomResponse {
    pub uri: String,
}

/// Create a room.
/// POST /rooms
pub async fn create_room(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateRoomRequest>,
) -> ApiResult<(StatusCode, Json<CreateRoomResponse>)> {
    if request.name.trim().is_empty() {
        return Err(ApiError::bad_request("room name must not be empty"));
    }

    let id = with_deadline(
        state.request_budget,
        "create room",
        state.rooms.create(NewRoom { name: request.name }),
    )
    .await
    .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateRoomResponse {
            uri: format!("/rooms/{id}"),
        }),
    ))
}

/// Get a room.
/// GET /rooms/:id
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Room>> {
    let room = with_deadline(state.request_budget, "get room", state.rooms.get(&id))
        .await
        .map_err(ApiError::from)?;

    Ok(Json(room))
}

/// Update a room. Fields absent from the body keep their prior values.
/// PUT /rooms/:id, PATCH /rooms/:id
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<RoomPatch>,
) -> ApiResult<StatusCode> {
    with_deadline(
        state.request_budget,
        "update room",
        state.rooms.update(&id, patch),
    )
    .await
    .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a room.
/// DELETE /rooms/:id
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    with_deadline(state.request_budget, "delete room", state.rooms.delete(&id))
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
