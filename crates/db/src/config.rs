//! Connection settings for the three game databases.
//!
//! Loaded once at startup from a TOML file and owned by the
//! [`DatabaseManager`](crate::DatabaseManager) thereafter.  A missing
//! required key fails the load immediately rather than surfacing later as a
//! confusing connection error.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default pool ceiling per logical database.
pub const DEFAULT_POOL_SIZE: u32 = 10;

const DEFAULT_DB_PORT: u16 = 3306;

/// Contents of the `[db]` table of the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub db_host: String,
    #[serde(default = "default_port")]
    pub db_port: u16,
    pub db_username: String,
    pub db_password: String,
    pub world_database: String,
    pub player_database: String,
    pub realm_database: String,
    /// Connection ceiling applied to each of the three pools.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    db: DbConfig,
}

impl DbConfig {
    /// Read and parse the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&raw)?;
        Ok(file.db)
    }
}

fn default_port() -> u16 {
    DEFAULT_DB_PORT
}

fn default_pool_size() -> u32 {
    DEFAULT_POOL_SIZE
}
