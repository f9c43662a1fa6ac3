//! Schema contract for the bot-accounts table.
//!
//! The column set is an external contract shared with the game server's
//! player database; this layer only relies on `bot_account_id` existing.

/// Table name in the player database.
pub const AH_BOT_ACCOUNTS_TABLE: &str = "ah_bot_accounts";

/// Raw creation statement, executed once when the table is missing.
pub const AH_BOT_TABLE_SCHEMA: &str = "CREATE TABLE ah_bot_accounts (
    bot_account_id INT UNSIGNED NOT NULL,
    account_name VARCHAR(32) NOT NULL,
    character_guid INT UNSIGNED NOT NULL DEFAULT 0,
    gold BIGINT UNSIGNED NOT NULL DEFAULT 0,
    enabled TINYINT(1) NOT NULL DEFAULT 1,
    last_seen TIMESTAMP NULL DEFAULT NULL,
    PRIMARY KEY (bot_account_id)
)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_creates_the_expected_table() {
        assert!(AH_BOT_TABLE_SCHEMA.contains(AH_BOT_ACCOUNTS_TABLE));
        assert!(AH_BOT_TABLE_SCHEMA.contains("bot_account_id"));
        assert!(AH_BOT_TABLE_SCHEMA.contains("PRIMARY KEY (bot_account_id)"));
    }
}
