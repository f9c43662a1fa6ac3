//! MySQL connection pools for the three logical game databases.

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;
use tracing::info;

use crate::config::DbConfig;
use crate::error::DbError;

/// The logical databases of the game server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    World,
    Player,
    Realm,
}

impl DatabaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::World => "world",
            Self::Player => "player",
            Self::Realm => "realm",
        }
    }
}

impl std::fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DatabaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "world" => Ok(Self::World),
            "player" => Ok(Self::Player),
            "realm" => Ok(Self::Realm),
            other => Err(format!("unknown database kind: {other}")),
        }
    }
}

/// One bounded pool per logical database, created together at startup.
pub(crate) struct PoolSet {
    world: MySqlPool,
    player: MySqlPool,
    realm: MySqlPool,
}

impl PoolSet {
    /// Open all three pools.  Connects eagerly so bad credentials fail at
    /// startup instead of on first query.
    pub(crate) async fn connect(cfg: &DbConfig) -> Result<Self, DbError> {
        info!(
            host = %cfg.db_host,
            pool_size = cfg.pool_size,
            "opening world/player/realm connection pools"
        );
        Ok(Self {
            world: open_pool(cfg, &cfg.world_database).await?,
            player: open_pool(cfg, &cfg.player_database).await?,
            realm: open_pool(cfg, &cfg.realm_database).await?,
        })
    }

    /// Borrow the pool for `kind`.
    ///
    /// The realm pool is opened alongside the others but has no accessor
    /// yet; exposing it here would be an interface change, so asking for it
    /// is an error.
    pub(crate) fn get(&self, kind: DatabaseKind) -> Result<&MySqlPool, DbError> {
        match kind {
            DatabaseKind::World => Ok(&self.world),
            DatabaseKind::Player => Ok(&self.player),
            DatabaseKind::Realm => Err(DbError::InvalidDatabaseKind(kind)),
        }
    }
}

fn connect_options(cfg: &DbConfig, database: &str) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&cfg.db_host)
        .port(cfg.db_port)
        .username(&cfg.db_username)
        .password(&cfg.db_password)
        .database(database)
}

async fn open_pool(cfg: &DbConfig, database: &str) -> Result<MySqlPool, DbError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(cfg.pool_size)
        .connect_with(connect_options(cfg, database))
        .await?;
    Ok(pool)
}
