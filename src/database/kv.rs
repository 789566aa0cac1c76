use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::errors::store_context;

pub fn find_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    let sql = "SELECT value FROM kv_store WHERE key = ?1";

    conn.query_row(sql, params![key], |row| row.get(0))
        .optional()
        .with_context(|| store_context("read", key))
}

pub fn upsert_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    let sql = "INSERT INTO kv_store (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP";

    conn.execute(sql, params![key, value])
        .with_context(|| store_context("write", key))
        .map(|_| ())
}

pub fn delete_value(conn: &Connection, key: &str) -> Result<()> {
    let sql = "DELETE FROM kv_store WHERE key = ?1";

    conn.execute(sql, params![key])
        .with_context(|| store_context("remove", key))
        .map(|_| ())
}
