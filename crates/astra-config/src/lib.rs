//! # astra-config
//!
//! Layered configuration loading for Astra using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ASTRA_*` prefix, `__` as separator)
//! 2. `DB_URI` (a path or `sqlite:///` URI, mapped to `database.path`)
//! 3. Project-level `.astra/config.toml`
//! 4. User-level `~/.config/astra/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ASTRA_SERVER__PORT` -> `server.port`,
//! `ASTRA_DATABASE__PATH` -> `database.path`.
//!
//! # Usage
//!
//! ```no_run
//! use astra_config::AstraConfig;
//!
//! let config = AstraConfig::load_with_dotenv().expect("config");
//! let addr = config.server.bind_addr().expect("valid address");
//! println!("listening on {addr}, database at {}", config.database.path);
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AstraConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AstraConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or merge extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".astra/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: DB_URI, kept for deployments that already set it
        figment = figment.merge(Env::raw().only(&["DB_URI"]).map(|_| "database.path".into()));

        // Layer 4: ASTRA_* environment variables (highest priority)
        figment.merge(Env::prefixed("ASTRA_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("astra").join("config.toml"))
    }
}
