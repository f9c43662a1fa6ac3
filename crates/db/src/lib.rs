//! `db` crate — pure data-access layer for the peddler game databases.
//!
//! Provides a configuration loader, one connection pool per logical database
//! ("world", "player", "realm"), and a schema-agnostic [`DatabaseManager`]
//! with parameterized fetch/update/insert primitives.  No trading logic
//! lives here.

pub mod config;
pub mod error;
pub mod manager;
pub mod pool;
pub mod record;
pub mod sql;

pub use config::DbConfig;
pub use error::{ConfigError, DbError};
pub use manager::DatabaseManager;
pub use pool::DatabaseKind;
pub use record::Record;
