//! Statement templates for the generic query primitives.
//!
//! Values are always bound as `?` parameters.  Table and column names cannot
//! be bound, so they are interpolated into the statement text — that makes
//! identifier positions a trust boundary.  Every identifier that reaches a
//! template is first checked against a conservative allow-list so a stray
//! quote or semicolon can never land in a statement.

use crate::error::DbError;

/// `true` for `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_safe_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_identifier(name: &str) -> Result<&str, DbError> {
    if is_safe_identifier(name) {
        Ok(name)
    } else {
        Err(DbError::UnsafeIdentifier(name.to_string()))
    }
}

/// `SELECT * FROM <table> WHERE <key> = ? LIMIT 1`
pub fn select_one(table: &str, key: &str) -> Result<String, DbError> {
    Ok(format!(
        "SELECT * FROM {} WHERE {} = ? LIMIT 1",
        check_identifier(table)?,
        check_identifier(key)?,
    ))
}

/// `SELECT * FROM <table> WHERE <key> = ?`
pub fn select_many(table: &str, key: &str) -> Result<String, DbError> {
    Ok(format!(
        "SELECT * FROM {} WHERE {} = ?",
        check_identifier(table)?,
        check_identifier(key)?,
    ))
}

/// `UPDATE <table> SET <update_key> = ? WHERE <search_key> = ?`
pub fn update_field(table: &str, update_key: &str, search_key: &str) -> Result<String, DbError> {
    Ok(format!(
        "UPDATE {} SET {} = ? WHERE {} = ?",
        check_identifier(table)?,
        check_identifier(update_key)?,
        check_identifier(search_key)?,
    ))
}

/// `INSERT INTO <table> (<columns…>) VALUES (?, …)` with one placeholder per
/// column, in the caller's column order.
pub fn insert(table: &str, columns: &[&str]) -> Result<String, DbError> {
    let table = check_identifier(table)?;
    let mut names = Vec::with_capacity(columns.len());
    for column in columns {
        names.push(check_identifier(column)?);
    }
    let placeholders = vec!["?"; columns.len()].join(", ");
    Ok(format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        names.join(", "),
    ))
}

/// Catalog probe used by table provisioning.  The table name is a bound
/// parameter here (it sits in value position), so no identifier check.
pub const SHOW_TABLES_LIKE: &str = "SHOW TABLES LIKE ?";
