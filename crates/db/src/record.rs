//! Untyped row records.
//!
//! The manager is schema-agnostic: rows come back as an ordered map from
//! column name to JSON value, and insert parameters go in the same shape.
//! Typed row structs belong to the callers that know the schema.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, MySql, Row, TypeInfo, ValueRef};
use tracing::warn;

/// One database row, column order preserved.
pub type Record = serde_json::Map<String, Value>;

/// Convert a fetched row into a [`Record`].
pub(crate) fn row_to_record(row: &MySqlRow) -> Result<Record, sqlx::Error> {
    let mut record = Record::new();
    for (index, column) in row.columns().iter().enumerate() {
        record.insert(column.name().to_string(), decode_column(row, index)?);
    }
    Ok(record)
}

fn decode_column(row: &MySqlRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_string();

    let value = match type_name.as_str() {
        "BOOLEAN" | "BIT" => Value::Bool(row.try_get::<bool, _>(index)?),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" | "YEAR" => {
            Value::from(row.try_get::<i64, _>(index)?)
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => Value::from(row.try_get::<u64, _>(index)?),
        "FLOAT" | "DOUBLE" => float_value(row.try_get::<f64, _>(index)?),
        "CHAR" | "VARCHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM"
        | "SET" => Value::String(row.try_get::<String, _>(index)?),
        "BINARY" | "VARBINARY" | "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
            let bytes = row.try_get::<Vec<u8>, _>(index)?;
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        }
        "DATE" => Value::String(row.try_get::<NaiveDate, _>(index)?.to_string()),
        "TIME" => Value::String(row.try_get::<NaiveTime, _>(index)?.to_string()),
        "DATETIME" => Value::String(row.try_get::<NaiveDateTime, _>(index)?.to_string()),
        "TIMESTAMP" => Value::String(row.try_get::<DateTime<Utc>, _>(index)?.to_rfc3339()),
        "JSON" => row.try_get::<Value, _>(index)?,
        other => {
            // DECIMAL and friends land here; fall back to the textual form.
            match row.try_get::<String, _>(index) {
                Ok(text) => Value::String(text),
                Err(_) => {
                    warn!(
                        column = row.column(index).name(),
                        column_type = other,
                        "undecodable column, returning null"
                    );
                    Value::Null
                }
            }
        }
    };
    Ok(value)
}

fn float_value(f: f64) -> Value {
    serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)
}

/// Bind a JSON value as the next `?` parameter, choosing the narrowest
/// matching SQL type.
pub(crate) fn bind_value(
    query: Query<'_, MySql, MySqlArguments>,
    value: Value,
) -> Query<'_, MySql, MySqlArguments> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                query.bind(i)
            } else if let Some(u) = n.as_u64() {
                query.bind(u)
            } else {
                query.bind(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => query.bind(s),
        nested @ (Value::Array(_) | Value::Object(_)) => query.bind(nested),
    }
}
