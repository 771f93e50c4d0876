use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use models::attendee;
use service::attendees::{self, AttendeeInput};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[utoipa::path(post, path = "/events/{id}/attendees", tag = "attendees", params(("id" = i32, Path, description = "Owning event id")), request_body = crate::openapi::AttendeeRequest, responses((status = 201, description = "Registered"), (status = 400, description = "Missing name"), (status = 404, description = "Unknown event")))]
pub async fn create(
    State(state): State<ServerState>,
    Path(event_id): Path<i32>,
    Json(input): Json<AttendeeInput>,
) -> Result<(StatusCode, Json<attendee::Model>), ApiError> {
    let created = attendees::add_attendee(&state.db, event_id, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(put, path = "/attendees/{id}", tag = "attendees", params(("id" = i32, Path, description = "Attendee id")), request_body = crate::openapi::AttendeeRequest, responses((status = 200, description = "Updated"), (status = 404, description = "Unknown attendee")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<AttendeeInput>,
) -> Result<Json<attendee::Model>, ApiError> {
    Ok(Json(attendees::update_attendee(&state.db, id, &input).await?))
}

#[utoipa::path(delete, path = "/attendees/{id}", tag = "attendees", params(("id" = i32, Path, description = "Attendee id")), responses((status = 204, description = "Removed"), (status = 404, description = "Unknown attendee")))]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    attendees::delete_attendee(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
