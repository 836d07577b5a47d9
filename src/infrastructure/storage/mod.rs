//! In-memory list store for development and tests

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::application::errors::StorageError;
use crate::domain::entities::Item;
use crate::domain::traits::ListStore;

/// HashMap-backed store. The write lock is held across each
/// read-then-delete, which gives the same atomicity contract as the
/// SQLite store's transactions.
pub struct MemoryStore {
    lists: RwLock<HashMap<String, Vec<Item>>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            lists: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn append(&self, owner: &str, text: &str) -> Result<Item, StorageError> {
        let mut lists = self.lists.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        // Same textual format SQLite's datetime('now') produces.
        let created_at = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let item = Item::new(id, owner, text, created_at);
        lists
            .entry(owner.to_string())
            .or_insert_with(Vec::new)
            .push(item.clone());
        Ok(item)
    }

    async fn items(&self, owner: &str) -> Result<Vec<Item>, StorageError> {
        let lists = self.lists.read().await;
        Ok(lists.get(owner).cloned().unwrap_or_default())
    }

    async fn drain(&self, owner: &str) -> Result<Vec<Item>, StorageError> {
        let mut lists = self.lists.write().await;
        Ok(lists.remove(owner).unwrap_or_default())
    }

    async fn clear(&self, owner: &str) -> Result<(), StorageError> {
        let mut lists = self.lists.write().await;
        lists.remove(owner);
        Ok(())
    }

    async fn remove_at(&self, owner: &str, position: usize) -> Result<Option<Item>, StorageError> {
        let mut lists = self.lists.write().await;
        let Some(items) = lists.get_mut(owner) else {
            return Ok(None);
        };
        if position < 1 || position > items.len() {
            return Ok(None);
        }
        Ok(Some(items.remove(position - 1)))
    }
}
