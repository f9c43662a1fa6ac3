//! Generic, schema-agnostic query execution over the pool set.

use serde_json::Value;
use tracing::{error, info};

use crate::config::DbConfig;
use crate::error::DbError;
use crate::pool::{DatabaseKind, PoolSet};
use crate::record::{bind_value, row_to_record, Record};
use crate::sql;

/// Facade over the world/player/realm pools.
///
/// Every operation checks one connection out of the matching pool for the
/// duration of the call and returns plain data; the connection goes back to
/// the pool on every exit path, including errors.  There is no retry layer
/// and no caching — each call is exactly one statement.
pub struct DatabaseManager {
    pools: PoolSet,
}

impl DatabaseManager {
    /// Open the three pools described by `config`.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        let pools = PoolSet::connect(config).await?;
        Ok(Self { pools })
    }

    /// Fetch the first row of `table` where `key` equals `value`.
    ///
    /// Returns `Ok(None)` when nothing matches.  `table` and `key` are
    /// interpolated into the statement and must be trusted identifiers.
    pub async fn get_single(
        &self,
        key: &str,
        value: &str,
        kind: DatabaseKind,
        table: &str,
    ) -> Result<Option<Record>, DbError> {
        let pool = self.pools.get(kind)?;
        let stmt = sql::select_one(table, key)?;
        let row = sqlx::query(&stmt).bind(value).fetch_optional(pool).await?;
        Ok(row.as_ref().map(row_to_record).transpose()?)
    }

    /// Fetch every row of `table` where `key` equals `value`, possibly none.
    pub async fn get_multiple(
        &self,
        key: &str,
        value: &str,
        kind: DatabaseKind,
        table: &str,
    ) -> Result<Vec<Record>, DbError> {
        let pool = self.pools.get(kind)?;
        let stmt = sql::select_many(table, key)?;
        let rows = sqlx::query(&stmt).bind(value).fetch_all(pool).await?;
        let records = rows
            .iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Set `update_key` to `update_value` on every row where `search_key`
    /// equals `search_value`.
    ///
    /// Returns `Ok(true)` iff at least one row was affected.  A `false` does
    /// not distinguish "no matching row" from "value already equal".
    pub async fn update_single_field(
        &self,
        search_key: &str,
        search_value: &str,
        update_key: &str,
        update_value: &str,
        kind: DatabaseKind,
        table: &str,
    ) -> Result<bool, DbError> {
        let pool = self.pools.get(kind)?;
        let stmt = sql::update_field(table, update_key, search_key)?;
        let result = sqlx::query(&stmt)
            .bind(update_value)
            .bind(search_value)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert one row built from `fields`, an ordered list of
    /// `(column, value)` pairs.
    ///
    /// Column names are validated against the identifier allow-list before
    /// they reach the statement.  Returns `Ok(true)` iff the insert affected
    /// a row; constraint violations (duplicate keys and the like) surface as
    /// `Err`, not `Ok(false)`.
    pub async fn add_entry(
        &self,
        kind: DatabaseKind,
        table: &str,
        fields: Vec<(String, Value)>,
    ) -> Result<bool, DbError> {
        let pool = self.pools.get(kind)?;
        let columns: Vec<&str> = fields.iter().map(|(column, _)| column.as_str()).collect();
        let stmt = sql::insert(table, &columns)?;
        let mut query = sqlx::query(&stmt);
        for (_, value) in fields {
            query = bind_value(query, value);
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Create `table` from the raw `schema_statement` unless it already
    /// exists.
    ///
    /// This is the one operation that swallows driver errors: any failure
    /// during the catalog probe or the create is logged and reported as
    /// `false`.  Calling it again once the table exists is a no-op that
    /// returns `true`.  `schema_statement` is executed verbatim and must be
    /// a trusted DDL string.
    pub async fn ensure_table_exists(
        &self,
        kind: DatabaseKind,
        table: &str,
        schema_statement: &str,
    ) -> bool {
        match self.provision_table(kind, table, schema_statement).await {
            Ok(()) => true,
            Err(e) => {
                error!(table, error = %e, "failed to check/create table");
                false
            }
        }
    }

    async fn provision_table(
        &self,
        kind: DatabaseKind,
        table: &str,
        schema_statement: &str,
    ) -> Result<(), DbError> {
        let pool = self.pools.get(kind)?;
        // Probe and create on the same connection.
        let mut conn = pool.acquire().await?;
        let existing = sqlx::query(sql::SHOW_TABLES_LIKE)
            .bind(table)
            .fetch_optional(&mut *conn)
            .await?;
        if existing.is_none() {
            info!(table, database = %kind, "table missing, creating it");
            sqlx::query(schema_statement).execute(&mut *conn).await?;
        }
        Ok(())
    }
}
