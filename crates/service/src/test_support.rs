use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// In-memory database with the schema applied, for service-level tests.
pub async fn get_db() -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_to("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
