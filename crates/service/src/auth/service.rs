use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::domain::{AdminSummary, Identity, LoginInput, RegisterAdminInput, Session};
use super::errors::AuthError;
use super::repository::AdminRepository;
use super::sessions::SessionStore;

pub const PASSWORD_ALGORITHM: &str = "argon2";

/// Seeded on an empty admin table so a fresh install is reachable at all.
/// Well known and flagged; deployments are expected to change it first thing.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub session_secret: String,
    pub session_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { session_secret: "church-roster-secret-key-v2".into(), session_ttl_hours: 12 }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct Claims {
    sub: String,
    uid: i32,
    jid: String,
    iat: usize,
    exp: usize,
}

/// Auth business service independent of the web framework. Constructed once
/// at startup and shared by reference with every request handler.
pub struct AuthService<R: AdminRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
    sessions: SessionStore,
}

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?
        .to_string())
}

impl<R: AdminRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        Self { repo, cfg, sessions: SessionStore::new() }
    }

    /// Verify a username/password pair against the stored credential.
    ///
    /// An unknown username and a wrong password are indistinguishable to the
    /// caller; the hash comparison goes through the argon2 verifier, never
    /// raw equality.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn authenticate(&self, input: &LoginInput) -> Result<AdminSummary, AuthError> {
        let admin = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&admin.password_hash).map_err(|e| AuthError::Hash(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            debug!("password mismatch");
            return Err(AuthError::InvalidCredentials);
        }
        Ok(AdminSummary { id: admin.id, username: admin.username })
    }

    /// Issue a signed session token for an authenticated admin and register
    /// its id in the live-session store.
    pub fn establish_session(&self, admin: &AdminSummary) -> Result<Session, AuthError> {
        let session_id = Uuid::new_v4();
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::hours(self.cfg.session_ttl_hours);
        let claims = Claims {
            sub: admin.username.clone(),
            uid: admin.id,
            jid: session_id.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };
        let token = encode(
            &JwtHeader::default(),
            &claims,
            &EncodingKey::from_secret(self.cfg.session_secret.as_bytes()),
        )
        .map_err(|e| AuthError::Token(e.to_string()))?;
        self.sessions.insert(session_id, admin.id);
        Ok(Session { admin: admin.clone(), token })
    }

    /// Authenticate and open a session in one step.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::domain::{LoginInput, RegisterAdminInput};
    /// use service::auth::repository::mock::MockAdminRepository;
    /// use service::auth::service::{AuthConfig, AuthService};
    /// let repo = Arc::new(MockAdminRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig::default());
    /// tokio_test::block_on(svc.register_admin(RegisterAdminInput {
    ///     username: "warden".into(),
    ///     password: "open-sesame".into(),
    /// }))
    /// .unwrap();
    /// let session = tokio_test::block_on(svc.login(LoginInput {
    ///     username: "warden".into(),
    ///     password: "open-sesame".into(),
    /// }))
    /// .unwrap();
    /// assert!(svc.require_session(&session.token).is_ok());
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<Session, AuthError> {
        let admin = self.authenticate(&input).await?;
        let session = self.establish_session(&admin)?;
        info!(admin_id = admin.id, "session_established");
        Ok(session)
    }

    /// Validate a session token: signature, expiry, and the session id still
    /// being live. Protected operations must call this before any side
    /// effect.
    pub fn require_session(&self, token: &str) -> Result<Identity, AuthError> {
        let key = DecodingKey::from_secret(self.cfg.session_secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = decode::<Claims>(token, &key, &validation).map_err(|_| AuthError::Unauthenticated)?;
        let session_id = Uuid::parse_str(&data.claims.jid).map_err(|_| AuthError::Unauthenticated)?;
        if !self.sessions.is_live(&session_id) {
            return Err(AuthError::Unauthenticated);
        }
        Ok(Identity { admin_id: data.claims.uid, username: data.claims.sub, session_id })
    }

    /// Invalidate the current session. The same token fails
    /// [`Self::require_session`] afterwards.
    pub fn end_session(&self, identity: &Identity) {
        self.sessions.remove(&identity.session_id);
        info!(admin_id = identity.admin_id, "session_ended");
    }

    /// Re-hash and overwrite the admin's credential. Other live sessions of
    /// the same admin stay valid; only the password changes.
    #[instrument(skip(self, new_password))]
    pub async fn change_password(&self, identity: &Identity, new_password: &str) -> Result<(), AuthError> {
        let hash = hash_password(new_password)?;
        self.repo.update_password(identity.admin_id, &hash, PASSWORD_ALGORITHM).await?;
        info!(admin_id = identity.admin_id, "password_changed");
        Ok(())
    }

    /// Create a new admin account with a hashed credential.
    ///
    /// The duplicate check runs before the insert; with a single writer that
    /// is sufficient, and the unique column backs it up.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register_admin(&self, input: RegisterAdminInput) -> Result<AdminSummary, AuthError> {
        if input.username.trim().is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if self.repo.find_by_username(&input.username).await?.is_some() {
            debug!("username taken");
            return Err(AuthError::DuplicateUsername);
        }
        let hash = hash_password(&input.password)?;
        let admin = self.repo.create(&input.username, &hash, PASSWORD_ALGORITHM).await?;
        info!(admin_id = admin.id, "admin_registered");
        Ok(AdminSummary { id: admin.id, username: admin.username })
    }

    /// Every admin account, id and username only.
    pub async fn list_admins(&self) -> Result<Vec<AdminSummary>, AuthError> {
        self.repo.list().await
    }

    /// Seed the well-known default account when no admin exists yet. Returns
    /// whether seeding happened.
    pub async fn ensure_default_admin(&self) -> Result<bool, AuthError> {
        if !self.repo.list().await?.is_empty() {
            return Ok(false);
        }
        let hash = hash_password(DEFAULT_ADMIN_PASSWORD)?;
        self.repo.create(DEFAULT_ADMIN_USERNAME, &hash, PASSWORD_ALGORITHM).await?;
        warn!("seeded default admin credentials; change the password immediately");
        Ok(true)
    }
}
