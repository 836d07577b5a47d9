//! Console adapter for development/testing

use std::io::Write;

use crate::application::errors::ListrError;
use crate::application::messaging::render::FAILURE_REPLY;
use crate::application::services::ListService;
use crate::domain::traits::ListStore;

/// Line-oriented local session impersonating one sender.
pub struct ConsoleAdapter {
    sender_id: String,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self {
            sender_id: "console".to_string(),
        }
    }

    pub fn with_sender(mut self, sender_id: impl Into<String>) -> Self {
        self.sender_id = sender_id.into();
        self
    }

    pub async fn run<S: ListStore>(&self, service: &ListService<S>) -> Result<(), ListrError> {
        tracing::info!(
            "Starting console session (dev mode) as sender '{}'",
            self.sender_id
        );
        println!("Text an item, or 'help'. Ctrl-D quits.");

        loop {
            print!("> ");
            std::io::stdout()
                .flush()
                .map_err(|e| ListrError::Transport(e.to_string()))?;

            let mut input = String::new();
            let read = std::io::stdin()
                .read_line(&mut input)
                .map_err(|e| ListrError::Transport(e.to_string()))?;
            if read == 0 {
                break;
            }

            let reply = match service.handle(&self.sender_id, &input).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::error!("[{}] request failed: {}", self.sender_id, e);
                    FAILURE_REPLY.to_string()
                }
            };
            println!("[LISTR] {}", reply);
        }

        Ok(())
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}
