use async_trait::async_trait;

use crate::application::errors::StorageError;
use crate::domain::entities::Item;

/// ListStore trait - abstraction for per-owner list persistence.
///
/// Every operation is scoped to one `owner`; no call ever observes or
/// touches another owner's items. The read-then-delete operations
/// (`drain`, `remove_at`) must execute as a single atomic unit with
/// respect to concurrent calls for the same owner: a second caller sees
/// either the full pre-delete list or the post-delete list, never a
/// partial one. All concurrency safety lives behind this trait; the
/// executor takes no locks of its own.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Insert one item at the end of the owner's list and return it with
    /// its store-assigned id and timestamp.
    async fn append(&self, owner: &str, text: &str) -> Result<Item, StorageError>;

    /// All items for the owner, in insertion order. Empty list if none.
    async fn items(&self, owner: &str) -> Result<Vec<Item>, StorageError>;

    /// Read the owner's items and delete them all, atomically. Returns
    /// the items as read before the delete; empty if there were none
    /// (deleting zero rows is success, so re-issuing after a failure of
    /// unknown outcome cannot double-drain).
    async fn drain(&self, owner: &str) -> Result<Vec<Item>, StorageError>;

    /// Delete everything for the owner. Succeeds when already empty.
    async fn clear(&self, owner: &str) -> Result<(), StorageError>;

    /// Remove the item at 1-based `position` in the owner's current
    /// ordering, resolving the position and deleting in one atomic unit.
    /// Returns `None` when the position is out of range, leaving the
    /// list untouched.
    async fn remove_at(&self, owner: &str, position: usize) -> Result<Option<Item>, StorageError>;
}
