//! Reply rendering - Maps an execution Outcome to the reply text
//!
//! Replies are deterministic and never empty; the transport sends them
//! back verbatim (the wire envelope is the transport's concern).

use crate::domain::entities::{Item, Outcome};

pub const PROMPT_REPLY: &str = "Text an item (like 'eggs'). When ready, text 'send'.";

pub const EMPTY_LIST_REPLY: &str =
    "Your Listr is empty. Text items first, then text 'send'.";

pub const HELP_REPLY: &str = "Listr commands:\n\
- text anything to add it to your list\n\
- 'list' to see your list (kept)\n\
- 'send' to get your list and start fresh\n\
- 'del 2' to remove item 2\n\
- 'clear' to wipe your list\n\
- 'help' to show this message";

/// Sent by the transport when a command failed on the storage side.
pub const FAILURE_REPLY: &str =
    "Sorry, something went wrong on our end. Please try again.";

/// Render one outcome as the reply text.
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::NeedsInput => PROMPT_REPLY.to_string(),
        Outcome::HelpText => HELP_REPLY.to_string(),
        Outcome::ItemsSnapshot(items) => {
            if items.is_empty() {
                EMPTY_LIST_REPLY.to_string()
            } else {
                format!(
                    "Your Listr:\n{}\nStill saved. Text 'send' to get it and start fresh.",
                    numbered(items)
                )
            }
        }
        Outcome::EmptyList => EMPTY_LIST_REPLY.to_string(),
        Outcome::DrainedSnapshot(items) => {
            format!("Your Listr:\n{}\nSent and cleared. ✅", numbered(items))
        }
        Outcome::Cleared => "List cleared. Text an item to start a new one.".to_string(),
        Outcome::Deleted(text) => format!("Deleted: {}", text),
        Outcome::InvalidPosition => {
            "No item at that position. Text 'list' to check the numbering.".to_string()
        }
        Outcome::Added(text) => format!("Added: {} ✅ (Text 'send' when ready)", text),
    }
}

/// `1) eggs\n2) milk\n` - 1-based, list order.
fn numbered(items: &[Item]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{}) {}\n", i + 1, item.text));
    }
    out
}
