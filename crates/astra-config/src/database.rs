//! libSQL database configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "app.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `:memory:` for a throwaway database.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// The filesystem path to open.
    ///
    /// Accepts SQLAlchemy-style `sqlite:` URIs as well as bare paths:
    /// `sqlite:///app.db` opens `app.db`, `sqlite:////srv/app.db` opens
    /// `/srv/app.db`, and `sqlite://` opens an in-memory database.
    #[must_use]
    pub fn local_path(&self) -> &str {
        match self.path.strip_prefix("sqlite://") {
            Some("") => ":memory:",
            Some(rest) => rest.strip_prefix('/').unwrap_or(rest),
            None => &self.path,
        }
    }

    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.local_path() == ":memory:"
    }
}
