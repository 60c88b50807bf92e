//! Durable slot storage backed by redb.
//!
//! One table, `slots`, maps slot names to text. Every mutation runs in its own
//! write transaction, so a slot is either fully written or untouched.

use crate::core::db::error::DatabaseError;
use crate::core::slots::SlotStore;
use crate::types::{Config, SlotKey};
use redb::{ReadableDatabase, ReadableTable, TableDefinition};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum DatabaseError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }
}

/// Slot table: slot name → text value
const SLOTS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("slots");

/// The durable slot database wrapping redb.
pub struct Database {
    db: redb::Database,
}

impl Database {
    /// Creates or opens the database at the path from the config.
    pub fn new(config: &Config) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SLOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }
}

impl SlotStore for Database {
    type Error = DatabaseError;

    fn get(&self, key: &SlotKey) -> Result<Option<String>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SLOTS_TABLE)?;

        let value = table.get(key.as_str())?.map(|guard| guard.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &SlotKey, value: &str) -> Result<(), DatabaseError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SLOTS_TABLE)?;
            table.insert(key.as_str(), value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &SlotKey) -> Result<(), DatabaseError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SLOTS_TABLE)?;
            table.remove(key.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
