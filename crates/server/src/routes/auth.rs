use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use axum::{Extension, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use service::auth::domain::{Identity, LoginInput};
use service::auth::errors::AuthError;
use service::auth::repository::seaorm::SeaOrmAdminRepository;
use service::auth::service::AuthService;

use crate::errors::ApiError;

pub const SESSION_COOKIE: &str = "session_token";

/// Shared application state: the storage handle plus the auth service, both
/// constructed once at startup and passed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: Arc<AuthService<SeaOrmAdminRepository>>,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub admin_id: i32,
    pub username: String,
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordInput {
    pub password: String,
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in"), (status = 401, description = "Invalid credentials")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), ApiError> {
    let session = state.auth.login(input).await?;
    let mut cookie = Cookie::new(SESSION_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);
    let out = LoginOutput {
        admin_id: session.admin.id,
        username: session.admin.username,
        token: session.token,
    };
    Ok((jar, Json(out)))
}

#[utoipa::path(post, path = "/auth/logout", tag = "auth", responses((status = 204, description = "Session ended")))]
pub async fn logout(
    State(state): State<ServerState>,
    jar: CookieJar,
    Extension(identity): Extension<Identity>,
) -> (CookieJar, StatusCode) {
    state.auth.end_session(&identity);
    (jar.remove(Cookie::from(SESSION_COOKIE)), StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/auth/change_password", tag = "auth", request_body = crate::openapi::ChangePasswordRequest, responses((status = 204, description = "Password updated")))]
pub async fn change_password(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<ChangePasswordInput>,
) -> Result<StatusCode, ApiError> {
    state.auth.change_password(&identity, &input.password).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Middleware: every protected operation validates the session before its
/// handler runs, so no side effect happens for an unauthenticated caller.
/// The token comes from `Authorization: Bearer` or the session cookie.
pub async fn require_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = token_from_request(&req).ok_or(AuthError::Unauthenticated)?;
    let identity = state.auth.require_session(&token)?;
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

fn token_from_request(req: &Request) -> Option<String> {
    if let Some(value) = req.headers().get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        if let Some(token) = value.strip_prefix("Bearer ") {
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }
    let cookies = req
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    for part in cookies.split(';') {
        if let Some(rest) = part.trim().strip_prefix(SESSION_COOKIE) {
            if let Some(token) = rest.strip_prefix('=') {
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    None
}
