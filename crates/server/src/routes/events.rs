use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use models::{attendee, event};
use service::events::{self, EventInput};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

/// Event plus its roster in insertion order, as shown on the detail view.
#[derive(Serialize)]
pub struct EventDetail {
    pub event: event::Model,
    pub attendees: Vec<attendee::Model>,
}

#[utoipa::path(get, path = "/events", tag = "events", responses((status = 200, description = "All events ordered by date text")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<event::Model>>, ApiError> {
    Ok(Json(events::list_events(&state.db).await?))
}

#[utoipa::path(post, path = "/events", tag = "events", request_body = crate::openapi::EventRequest, responses((status = 201, description = "Created"), (status = 400, description = "Missing title or date")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<EventInput>,
) -> Result<(StatusCode, Json<event::Model>), ApiError> {
    let created = events::create_event(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/events/{id}", tag = "events", params(("id" = i32, Path, description = "Event id")), responses((status = 200, description = "Event with roster"), (status = 404, description = "Unknown event")))]
pub async fn detail(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<EventDetail>, ApiError> {
    let (event, attendees) = events::get_event_with_attendees(&state.db, id).await?;
    Ok(Json(EventDetail { event, attendees }))
}

#[utoipa::path(put, path = "/events/{id}", tag = "events", params(("id" = i32, Path, description = "Event id")), request_body = crate::openapi::EventRequest, responses((status = 200, description = "Updated"), (status = 404, description = "Unknown event")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<EventInput>,
) -> Result<Json<event::Model>, ApiError> {
    Ok(Json(events::update_event(&state.db, id, &input).await?))
}

#[utoipa::path(delete, path = "/events/{id}", tag = "events", params(("id" = i32, Path, description = "Event id")), responses((status = 204, description = "Event and roster removed"), (status = 404, description = "Unknown event")))]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    events::delete_event(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
