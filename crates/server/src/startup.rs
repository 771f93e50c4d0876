use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::auth::repository::seaorm::SeaOrmAdminRepository;
use service::auth::service::{AuthConfig, AuthService};

use crate::routes::{self, auth::ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Prepare shared state on a connected database: apply the schema, seed the
/// default admin when the table is empty, construct the auth service once.
pub async fn build_state(db: DatabaseConnection, auth_cfg: AuthConfig) -> anyhow::Result<ServerState> {
    migration::Migrator::up(&db, None).await?;
    let repo = Arc::new(SeaOrmAdminRepository { db: db.clone() });
    let auth = Arc::new(AuthService::new(repo, auth_cfg));
    auth.ensure_default_admin().await?;
    Ok(ServerState { db, auth })
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;

    let db = models::db::connect_with(&cfg.database).await?;
    let state = build_state(
        db,
        AuthConfig {
            session_secret: cfg.auth.session_secret.clone(),
            session_ttl_hours: cfg.auth.session_ttl_hours,
        },
    )
    .await?;

    let app: Router = routes::build_router(build_cors(), state);

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, "starting roster server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
