//! SQLite-backed list store
//!
//! One `items` table holds every sender's list; per-owner ordering is
//! the rowid. The read-then-delete commands (`drain`, `remove_at`) run
//! inside an IMMEDIATE transaction so a concurrent command for the same
//! owner sees either the pre-delete list or the post-delete list, never
//! a partial one.

use async_trait::async_trait;
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::path::Path;
use tokio::sync::Mutex;

use crate::application::errors::StorageError;
use crate::domain::entities::Item;
use crate::domain::traits::ListStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::init_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Private in-memory database, used by tests and throwaway runs.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::init_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_tables(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_items_owner ON items(owner)",
            [],
        )?;

        Ok(())
    }

    fn items_for(conn: &Connection, owner: &str) -> rusqlite::Result<Vec<Item>> {
        let mut stmt = conn.prepare(
            "SELECT id, owner, body, created_at FROM items WHERE owner = ?1 ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([owner], row_to_item)?;

        let mut items = Vec::new();
        for item in rows {
            items.push(item?);
        }
        Ok(items)
    }
}

fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        owner: row.get(1)?,
        text: row.get(2)?,
        created_at: row.get(3)?,
    })
}

#[async_trait]
impl ListStore for SqliteStore {
    async fn append(&self, owner: &str, text: &str) -> Result<Item, StorageError> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO items (owner, body) VALUES (?1, ?2)",
            params![owner, text],
        )?;

        let id = conn.last_insert_rowid();
        let item = conn.query_row(
            "SELECT id, owner, body, created_at FROM items WHERE id = ?1",
            [id],
            row_to_item,
        )?;
        Ok(item)
    }

    async fn items(&self, owner: &str) -> Result<Vec<Item>, StorageError> {
        let conn = self.conn.lock().await;
        Ok(Self::items_for(&conn, owner)?)
    }

    async fn drain(&self, owner: &str) -> Result<Vec<Item>, StorageError> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let items = Self::items_for(&tx, owner)?;
        // Deleting zero rows is still a successful drain.
        tx.execute("DELETE FROM items WHERE owner = ?1", [owner])?;
        tx.commit()?;

        Ok(items)
    }

    async fn clear(&self, owner: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM items WHERE owner = ?1", [owner])?;
        Ok(())
    }

    async fn remove_at(&self, owner: &str, position: usize) -> Result<Option<Item>, StorageError> {
        if position < 1 {
            return Ok(None);
        }

        let mut conn = self.conn.lock().await;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        // Position is resolved against the list as read inside this
        // transaction, not any earlier snapshot.
        let items = Self::items_for(&tx, owner)?;
        if position > items.len() {
            return Ok(None);
        }

        let victim = items[position - 1].clone();
        tx.execute("DELETE FROM items WHERE id = ?1", [victim.id])?;
        tx.commit()?;

        Ok(Some(victim))
    }
}
