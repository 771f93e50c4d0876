use axum::middleware;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

pub mod admins;
pub mod attendees;
pub mod auth;
pub mod events;
pub mod exports;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::ApiDoc::openapi())
}

/// Build the full application router: a small public surface and the
/// session-guarded roster, admin and export routes.
pub fn build_router(cors: CorsLayer, state: auth::ServerState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(auth::login))
        .route("/api-docs/openapi.json", get(openapi_json));

    let protected = Router::new()
        .route("/auth/logout", post(auth::logout))
        .route("/auth/change_password", post(auth::change_password))
        .route("/events", get(events::list).post(events::create))
        .route("/events/:id", get(events::detail).put(events::update).delete(events::remove))
        .route("/events/:id/attendees", post(attendees::create))
        .route("/attendees/:id", put(attendees::update).delete(attendees::remove))
        .route("/admins", get(admins::list).post(admins::register))
        .route("/events/:id/export/excel", get(exports::excel))
        .route("/events/:id/export/pdf", get(exports::pdf))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_session));

    public
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
