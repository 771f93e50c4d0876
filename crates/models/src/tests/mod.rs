/// CRUD operation tests for all entities
pub mod crud_tests;


pub(crate) mod support {
    use migration::MigratorTrait;
    use sea_orm::DatabaseConnection;

    /// Fresh in-memory database with the full schema applied.
    pub async fn memory_db() -> DatabaseConnection {
        let db = crate::db::connect_to("sqlite::memory:")
            .await
            .expect("connect in-memory sqlite");
        migration::Migrator::up(&db, None).await.expect("apply migrations");
        db
    }
}
