use async_trait::async_trait;

use super::domain::{AdminRecord, AdminSummary};
use super::errors::AuthError;

/// Repository abstraction for admin-account persistence.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminRecord>, AuthError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<AdminRecord>, AuthError>;
    async fn create(&self, username: &str, password_hash: &str, algorithm: &str) -> Result<AdminRecord, AuthError>;
    /// Replace the stored credential; `NotFound` when the admin is gone.
    async fn update_password(&self, id: i32, password_hash: &str, algorithm: &str) -> Result<(), AuthError>;
    async fn list(&self) -> Result<Vec<AdminSummary>, AuthError>;
}

/// SeaORM-backed repository used by the running service.
pub mod seaorm {
    use super::*;
    use models::admin;
    use models::errors::ModelError;
    use sea_orm::DatabaseConnection;

    pub struct SeaOrmAdminRepository {
        pub db: DatabaseConnection,
    }

    fn record(m: admin::Model) -> AdminRecord {
        AdminRecord { id: m.id, username: m.username, password_hash: m.password_hash }
    }

    fn repo_err(e: ModelError) -> AuthError {
        match e {
            ModelError::Validation(msg) if msg.starts_with("username") => AuthError::MissingField("username"),
            other => AuthError::Repository(other.to_string()),
        }
    }

    #[async_trait]
    impl AdminRepository for SeaOrmAdminRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<AdminRecord>, AuthError> {
            Ok(admin::find_by_username(&self.db, username).await.map_err(repo_err)?.map(record))
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<AdminRecord>, AuthError> {
            Ok(admin::find_by_id(&self.db, id).await.map_err(repo_err)?.map(record))
        }

        async fn create(&self, username: &str, password_hash: &str, algorithm: &str) -> Result<AdminRecord, AuthError> {
            Ok(record(admin::create(&self.db, username, password_hash, algorithm).await.map_err(repo_err)?))
        }

        async fn update_password(&self, id: i32, password_hash: &str, algorithm: &str) -> Result<(), AuthError> {
            admin::update_password(&self.db, id, password_hash, algorithm)
                .await
                .map_err(repo_err)?
                .map(|_| ())
                .ok_or(AuthError::NotFound)
        }

        async fn list(&self) -> Result<Vec<AdminSummary>, AuthError> {
            let all = admin::list(&self.db).await.map_err(repo_err)?;
            Ok(all.into_iter().map(|m| AdminSummary { id: m.id, username: m.username }).collect())
        }
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAdminRepository {
        admins: Mutex<Vec<AdminRecord>>,
        next_id: AtomicI32,
    }

    #[async_trait]
    impl AdminRepository for MockAdminRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<AdminRecord>, AuthError> {
            let admins = self.admins.lock().unwrap();
            Ok(admins.iter().find(|a| a.username == username).cloned())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<AdminRecord>, AuthError> {
            let admins = self.admins.lock().unwrap();
            Ok(admins.iter().find(|a| a.id == id).cloned())
        }

        async fn create(&self, username: &str, password_hash: &str, _algorithm: &str) -> Result<AdminRecord, AuthError> {
            if username.trim().is_empty() {
                return Err(AuthError::MissingField("username"));
            }
            let mut admins = self.admins.lock().unwrap();
            if admins.iter().any(|a| a.username == username) {
                return Err(AuthError::DuplicateUsername);
            }
            let admin = AdminRecord {
                id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                username: username.to_string(),
                password_hash: password_hash.to_string(),
            };
            admins.push(admin.clone());
            Ok(admin)
        }

        async fn update_password(&self, id: i32, password_hash: &str, _algorithm: &str) -> Result<(), AuthError> {
            let mut admins = self.admins.lock().unwrap();
            match admins.iter_mut().find(|a| a.id == id) {
                Some(a) => {
                    a.password_hash = password_hash.to_string();
                    Ok(())
                }
                None => Err(AuthError::NotFound),
            }
        }

        async fn list(&self) -> Result<Vec<AdminSummary>, AuthError> {
            let admins = self.admins.lock().unwrap();
            Ok(admins
                .iter()
                .map(|a| AdminSummary { id: a.id, username: a.username.clone() })
                .collect())
        }
    }
}
