use crate::application::errors::StorageError;
use crate::application::messaging::{classify, render};
use crate::domain::entities::{Command, Outcome};
use crate::domain::traits::ListStore;

/// Service executing classified commands against a sender's list.
///
/// Each inbound message is processed independently; the only state is
/// the stored list. The service itself takes no locks - atomicity of the
/// read-then-delete commands is the store's contract, so concurrent
/// messages from the same sender serialize on the store, and messages
/// from different senders never interact.
pub struct ListService<S: ListStore> {
    store: S,
}

impl<S: ListStore> ListService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply one command to the given owner's list.
    pub async fn execute(&self, owner: &str, command: Command) -> Result<Outcome, StorageError> {
        match command {
            Command::Prompt => Ok(Outcome::NeedsInput),
            Command::Help => Ok(Outcome::HelpText),
            Command::ListOnly => Ok(Outcome::ItemsSnapshot(self.store.items(owner).await?)),
            Command::ListAndDrain => {
                let drained = self.store.drain(owner).await?;
                if drained.is_empty() {
                    Ok(Outcome::EmptyList)
                } else {
                    Ok(Outcome::DrainedSnapshot(drained))
                }
            }
            Command::ClearAll => {
                self.store.clear(owner).await?;
                Ok(Outcome::Cleared)
            }
            Command::DeleteAt(position) => {
                if position < 1 {
                    return Ok(Outcome::InvalidPosition);
                }
                match self.store.remove_at(owner, position).await? {
                    Some(item) => Ok(Outcome::Deleted(item.text)),
                    None => Ok(Outcome::InvalidPosition),
                }
            }
            Command::AddItem(text) => {
                let item = self.store.append(owner, &text).await?;
                Ok(Outcome::Added(item.text))
            }
        }
    }

    /// The single operation exposed to transports: classify the raw
    /// body, execute it for the sender, render the reply.
    pub async fn handle(&self, sender_id: &str, body: &str) -> Result<String, StorageError> {
        let command = classify(body);
        tracing::debug!("[{}] command: {}", sender_id, command.name());

        let outcome = self.execute(sender_id, command).await?;
        tracing::info!("[{}] outcome: {}", sender_id, outcome.name());

        Ok(render(&outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::messaging::render::FAILURE_REPLY;
    use crate::domain::entities::Item;
    use crate::infrastructure::storage::MemoryStore;
    use async_trait::async_trait;

    #[tokio::test]
    async fn test_add_then_drain() {
        let service = ListService::new(MemoryStore::new());

        let outcome = service
            .execute("o1", Command::AddItem("eggs".to_string()))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Added("eggs".to_string()));

        let outcome = service.execute("o1", Command::ListAndDrain).await.unwrap();
        match outcome {
            Outcome::DrainedSnapshot(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].text, "eggs");
            }
            other => panic!("expected drained snapshot, got {:?}", other),
        }

        // Drained list is gone; a second drain reports empty.
        let outcome = service.execute("o1", Command::ListAndDrain).await.unwrap();
        assert_eq!(outcome, Outcome::EmptyList);
    }

    #[tokio::test]
    async fn test_delete_at_zero_is_invalid() {
        let service = ListService::new(MemoryStore::new());
        service
            .execute("o1", Command::AddItem("a".to_string()))
            .await
            .unwrap();

        let outcome = service.execute("o1", Command::DeleteAt(0)).await.unwrap();
        assert_eq!(outcome, Outcome::InvalidPosition);

        // List untouched.
        match service.execute("o1", Command::ListOnly).await.unwrap() {
            Outcome::ItemsSnapshot(items) => assert_eq!(items.len(), 1),
            other => panic!("expected snapshot, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_end_to_end() {
        let service = ListService::new(MemoryStore::new());

        let reply = service.handle("+15550001111", "eggs").await.unwrap();
        assert!(reply.contains("Added: eggs"));

        let reply = service.handle("+15550001111", "SEND").await.unwrap();
        assert!(reply.contains("1) eggs"));
    }

    /// Store whose every operation fails, for error propagation checks.
    struct BrokenStore;

    #[async_trait]
    impl ListStore for BrokenStore {
        async fn append(&self, _owner: &str, _text: &str) -> Result<Item, StorageError> {
            Err(StorageError::Database(
                rusqlite::Error::InvalidQuery,
            ))
        }
        async fn items(&self, _owner: &str) -> Result<Vec<Item>, StorageError> {
            Err(StorageError::Database(rusqlite::Error::InvalidQuery))
        }
        async fn drain(&self, _owner: &str) -> Result<Vec<Item>, StorageError> {
            Err(StorageError::Database(rusqlite::Error::InvalidQuery))
        }
        async fn clear(&self, _owner: &str) -> Result<(), StorageError> {
            Err(StorageError::Database(rusqlite::Error::InvalidQuery))
        }
        async fn remove_at(
            &self,
            _owner: &str,
            _position: usize,
        ) -> Result<Option<Item>, StorageError> {
            Err(StorageError::Database(rusqlite::Error::InvalidQuery))
        }
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let service = ListService::new(BrokenStore);
        let result = service.handle("o1", "eggs").await;
        assert!(result.is_err());
        // The transport maps this to the generic failure reply.
        assert!(!FAILURE_REPLY.is_empty());
    }

    #[tokio::test]
    async fn test_prompt_and_help_skip_the_store() {
        // BrokenStore errors on any access, so these passing proves
        // neither command touches it.
        let service = ListService::new(BrokenStore);
        assert_eq!(
            service.execute("o1", Command::Prompt).await.unwrap(),
            Outcome::NeedsInput
        );
        assert_eq!(
            service.execute("o1", Command::Help).await.unwrap(),
            Outcome::HelpText
        );
    }
}
