use anyhow::{Context, Result};
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the key-value table if it is missing. Existing data is kept.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
        .context("Failed to create store schema")?;

    log::debug!("Store schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::kv;

    #[test]
    fn test_schema_is_idempotent_and_keeps_rows() {
        let conn = Connection::open_in_memory().unwrap();

        ensure_schema(&conn).unwrap();
        kv::upsert_value(&conn, "players", "[]").unwrap();
        ensure_schema(&conn).unwrap();

        assert_eq!(kv::find_value(&conn, "players").unwrap().as_deref(), Some("[]"));
    }
}
