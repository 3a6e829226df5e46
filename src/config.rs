use anyhow::{bail, Context};

/// Process configuration, read and validated once at startup. Handlers reach it
/// through [`crate::state::AppState`]; nothing reads the environment after boot.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match std::env::var("APP_PORT") {
            Ok(raw) => raw.parse::<u16>().context("APP_PORT must be a port number")?,
            Err(_) => 5000,
        };
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is required")?;
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET is required")?;
        if jwt_secret.is_empty() {
            bail!("JWT_SECRET must not be empty");
        }
        Ok(Self {
            host,
            port,
            database_url,
            jwt_secret,
        })
    }
}
