use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login form input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Admin-registration form input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAdminInput {
    pub username: String,
    pub password: String,
}

/// Admin row stripped to what callers and rendering layers may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSummary {
    pub id: i32,
    pub username: String,
}

/// Internal admin view carrying the stored credential. Deliberately not
/// serializable; it must never cross the service boundary.
#[derive(Debug, Clone)]
pub struct AdminRecord {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

/// Proof of an authenticated session, attached to every protected request.
#[derive(Debug, Clone)]
pub struct Identity {
    pub admin_id: i32,
    pub username: String,
    pub session_id: Uuid,
}

/// Login result: the admin plus the signed session token.
#[derive(Debug, Clone)]
pub struct Session {
    pub admin: AdminSummary,
    pub token: String,
}
