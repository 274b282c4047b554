use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Runtime settings for the API server, read from the environment
/// (a `.env` file is honored in development). Only `DATABASE_URL` is
/// required; everything else has a working default.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Comma-separated admin API keys. Empty means no key is accepted
    /// and all protected routes reject.
    pub api_keys: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            database_url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL is required, e.g. sqlite://breeder_awards.db")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
        })
    }
}
