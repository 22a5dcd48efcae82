use std::{env, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` (or `CONFIG_PATH`) when readable, otherwise environment variables.
fn load_config() -> Result<AppConfig, StartupError> {
    let mut cfg = match configs::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config file unavailable, falling back to environment");
            config_from_env()
        }
    };
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

fn config_from_env() -> AppConfig {
    let mut cfg = AppConfig::default();
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.port = port;
    }
    cfg.server.worker_threads = configs::parse_worker_threads(env::var("TOKIO_WORKER_THREADS").ok().as_deref());
    cfg.database.url = models::db::DATABASE_URL.clone();
    cfg.database.seed_demo_data = env::var("SEED_DEMO_DATA")
        .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
        .unwrap_or(false);
    cfg
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = format!("{}:{}", cfg.server.host, cfg.server.port);
    raw.parse().map_err(|_| StartupError::BindAddr(raw))
}

/// Connect, migrate and optionally seed the store.
pub async fn prepare_database(cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    if cfg.database.seed_demo_data {
        let report = models::seed::load_demo_data(&db).await?;
        info!(
            garages = report.garages,
            customers = report.customers,
            mechanics = report.mechanics,
            vehicles = report.vehicles,
            "demo data seeded"
        );
    }
    Ok(db)
}

/// Router over the given connection, with the process-wide layers applied.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;
    let db = prepare_database(&cfg).await?;
    let app = build_app(db);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting garage api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 9090;
        assert_eq!(bind_addr(&cfg).unwrap().port(), 9090);

        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::BindAddr(_))));
    }

    #[tokio::test]
    async fn prepare_database_seeds_when_enabled() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite::memory:".into();
        cfg.database.seed_demo_data = true;
        let db = prepare_database(&cfg).await?;
        assert!(models::mechanic::find_by_mid(&db, "M007").await?.is_some());
        Ok(())
    }
}
