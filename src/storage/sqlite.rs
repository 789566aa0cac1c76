use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::KeyValueStore;
use crate::database::{self, DbPool, kv};

/// Keys live in one `kv_store` table. Multi-key writes share a transaction.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let pool = database::create_pool(path)?;
        let conn = database::get_connection(&pool)?;
        database::setup::ensure_schema(&conn)?;
        Ok(Self { pool })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = database::get_connection(&self.pool)?;
        kv::find_value(&conn, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = database::get_connection(&self.pool)?;
        kv::upsert_value(&conn, key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = database::get_connection(&self.pool)?;
        kv::delete_value(&conn, key)
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to begin store transaction")?;

        for (key, value) in entries {
            kv::upsert_value(&tx, key, value)?;
        }

        tx.commit().context("Failed to commit store transaction")?;
        debug!("Committed {} keys in one transaction", entries.len());
        Ok(())
    }
}
