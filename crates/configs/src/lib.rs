//! # configs
//!
//! Layered settings for rusty-recipes: compiled-in defaults, an optional
//! `config/recipes.*` file, then `RECIPES__`-prefixed environment variables
//! (a `.env` file is honored). Later layers win.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub http: HttpSettings,
    pub feed: FeedSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedSettings {
    /// CSV file the store is seeded from at startup.
    pub path: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        if dotenvy::dotenv().is_ok() {
            tracing::debug!(".env loaded");
        }
        let settings = config::Config::builder()
            .set_default("http.host", "0.0.0.0")?
            .set_default("http.port", 8080)?
            .set_default("feed.path", "recipe-data.csv")?
            .add_source(config::File::with_name("config/recipes").required(false))
            .add_source(
                config::Environment::with_prefix("RECIPES")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
