//! Integration tests that run against a live MySQL server.
//!
//! All tests are `#[ignore]`d so plain `cargo test` stays hermetic.  To run
//! them, point the `PEDDLER_TEST_*` variables at a throwaway server where
//! the configured user may create and drop tables, then:
//!
//! ```text
//! cargo test -p db -- --ignored
//! ```

use db::{DatabaseKind, DatabaseManager, DbConfig};
use serde_json::json;

fn config_from_env() -> DbConfig {
    let var = |name: &str, default: &str| std::env::var(name).unwrap_or_else(|_| default.into());
    DbConfig {
        db_host: var("PEDDLER_TEST_DB_HOST", "127.0.0.1"),
        db_port: var("PEDDLER_TEST_DB_PORT", "3306").parse().unwrap(),
        db_username: var("PEDDLER_TEST_DB_USER", "root"),
        db_password: var("PEDDLER_TEST_DB_PASSWORD", ""),
        world_database: var("PEDDLER_TEST_WORLD_DB", "peddler_test_world"),
        player_database: var("PEDDLER_TEST_PLAYER_DB", "peddler_test_player"),
        realm_database: var("PEDDLER_TEST_REALM_DB", "peddler_test_realm"),
        pool_size: 2,
    }
}

async fn manager() -> DatabaseManager {
    DatabaseManager::connect(&config_from_env())
        .await
        .expect("cannot connect to the test server")
}

/// Drop `table` in the player database, ignoring "does not exist".
async fn drop_table(cfg: &DbConfig, table: &str) {
    use sqlx::mysql::MySqlConnectOptions;
    use sqlx::ConnectOptions;

    let mut conn = MySqlConnectOptions::new()
        .host(&cfg.db_host)
        .port(cfg.db_port)
        .username(&cfg.db_username)
        .password(&cfg.db_password)
        .database(&cfg.player_database)
        .connect()
        .await
        .expect("cannot connect for cleanup");
    let _ = sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
        .execute(&mut conn)
        .await;
}

fn scratch_schema(table: &str) -> String {
    format!(
        "CREATE TABLE {table} (
            id VARCHAR(32) NOT NULL PRIMARY KEY,
            label VARCHAR(64) NOT NULL,
            gold BIGINT NOT NULL DEFAULT 0
        )"
    )
}

#[tokio::test]
#[ignore = "requires a live MySQL server"]
async fn get_single_returns_none_for_missing_row() {
    let cfg = config_from_env();
    let table = "peddler_it_get_single";
    drop_table(&cfg, table).await;

    let mgr = manager().await;
    assert!(mgr.ensure_table_exists(DatabaseKind::Player, table, &scratch_schema(table)).await);

    let row = mgr
        .get_single("id", "no-such-row", DatabaseKind::Player, table)
        .await
        .unwrap();
    assert!(row.is_none());
}

#[tokio::test]
#[ignore = "requires a live MySQL server"]
async fn add_entry_succeeds_then_duplicate_key_errors() {
    let cfg = config_from_env();
    let table = "peddler_it_add_entry";
    drop_table(&cfg, table).await;

    let mgr = manager().await;
    assert!(mgr.ensure_table_exists(DatabaseKind::Player, table, &scratch_schema(table)).await);

    let fields = vec![
        ("id".to_string(), json!("bot-1")),
        ("label".to_string(), json!("first")),
        ("gold".to_string(), json!(125)),
    ];
    assert!(mgr
        .add_entry(DatabaseKind::Player, table, fields.clone())
        .await
        .unwrap());

    // Same primary key again: a constraint violation is an error, not false.
    assert!(mgr.add_entry(DatabaseKind::Player, table, fields).await.is_err());

    let row = mgr
        .get_single("id", "bot-1", DatabaseKind::Player, table)
        .await
        .unwrap()
        .expect("row was just inserted");
    assert_eq!(row["label"], json!("first"));
    assert_eq!(row["gold"], json!(125));
}

#[tokio::test]
#[ignore = "requires a live MySQL server"]
async fn update_single_field_reports_affected_rows() {
    let cfg = config_from_env();
    let table = "peddler_it_update";
    drop_table(&cfg, table).await;

    let mgr = manager().await;
    assert!(mgr.ensure_table_exists(DatabaseKind::Player, table, &scratch_schema(table)).await);
    assert!(mgr
        .add_entry(
            DatabaseKind::Player,
            table,
            vec![
                ("id".to_string(), json!("bot-2")),
                ("label".to_string(), json!("before")),
            ],
        )
        .await
        .unwrap());

    // Zero matching rows.
    let updated = mgr
        .update_single_field("id", "ghost", "label", "after", DatabaseKind::Player, table)
        .await
        .unwrap();
    assert!(!updated);

    // One matching row.
    let updated = mgr
        .update_single_field("id", "bot-2", "label", "after", DatabaseKind::Player, table)
        .await
        .unwrap();
    assert!(updated);

    let rows = mgr
        .get_multiple("label", "after", DatabaseKind::Player, table)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
#[ignore = "requires a live MySQL server"]
async fn ensure_table_exists_is_idempotent() {
    let cfg = config_from_env();
    let table = "peddler_it_ensure";
    drop_table(&cfg, table).await;

    let mgr = manager().await;
    assert!(mgr.ensure_table_exists(DatabaseKind::Player, table, &scratch_schema(table)).await);
    // Second call must find the table and not try to create it again.
    assert!(mgr.ensure_table_exists(DatabaseKind::Player, table, &scratch_schema(table)).await);
}

#[tokio::test]
#[ignore = "requires a live MySQL server"]
async fn ensure_table_exists_swallows_bad_ddl() {
    let mgr = manager().await;
    let ok = mgr
        .ensure_table_exists(DatabaseKind::Player, "peddler_it_bad_ddl", "CREATE TABLE oops (")
        .await;
    assert!(!ok);
}
