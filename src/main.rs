use std::sync::Arc;

mod app;
mod auth;
mod config;
mod state;
mod store;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::store::{PgUserStore, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "authgate=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = Arc::new(AppConfig::from_env()?);

    let pg = PgUserStore::connect(&config.database_url).await?;
    if let Err(e) = pg.run_migrations().await {
        tracing::warn!(error = %e, "migration failed; continuing with the existing schema");
    }
    let store: Arc<dyn UserStore> = Arc::new(pg);

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = app::build_app(state);
    app::serve(app, &config).await
}
