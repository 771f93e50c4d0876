use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use service::auth::domain::{AdminSummary, RegisterAdminInput};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[utoipa::path(get, path = "/admins", tag = "admins", responses((status = 200, description = "All admins, id and username only")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<AdminSummary>>, ApiError> {
    Ok(Json(state.auth.list_admins().await?))
}

#[utoipa::path(post, path = "/admins", tag = "admins", request_body = crate::openapi::RegisterAdminRequest, responses((status = 201, description = "Created"), (status = 400, description = "Missing username"), (status = 409, description = "Username taken")))]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterAdminInput>,
) -> Result<(StatusCode, Json<AdminSummary>), ApiError> {
    let created = state.auth.register_admin(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
