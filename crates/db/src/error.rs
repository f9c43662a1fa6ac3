//! Typed error types for the db crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::pool::DatabaseKind;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The caller asked for a pool that is not reachable through the public
    /// accessor.  The realm pool exists but is deliberately not wired up.
    #[error("no connection pool is exposed for the {0} database")]
    InvalidDatabaseKind(DatabaseKind),

    /// A table or column name failed the identifier allow-list.  Identifiers
    /// are interpolated into statement text, so they must never come from an
    /// untrusted source.
    #[error("unsafe SQL identifier: {0:?}")]
    UnsafeIdentifier(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
