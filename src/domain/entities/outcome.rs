use super::Item;

/// Result of executing one [`super::Command`] against a sender's list.
///
/// Every variant renders to a non-empty reply; `InvalidPosition` and
/// `NeedsInput` are ordinary outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The message was blank - the sender should text an item.
    NeedsInput,
    /// The fixed help text.
    HelpText,
    /// Read-only view of the list, possibly empty. Nothing was deleted.
    ItemsSnapshot(Vec<Item>),
    /// A drain was requested but the list had nothing to send.
    EmptyList,
    /// The items that were read and then deleted, in list order.
    DrainedSnapshot(Vec<Item>),
    /// The whole list was deleted (succeeds on an empty list too).
    Cleared,
    /// The named item was removed by position.
    Deleted(String),
    /// The requested position was outside the current list.
    InvalidPosition,
    /// The text was stored as a new item.
    Added(String),
}

impl Outcome {
    /// Short label for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Outcome::NeedsInput => "needs-input",
            Outcome::HelpText => "help-text",
            Outcome::ItemsSnapshot(_) => "items-snapshot",
            Outcome::EmptyList => "empty-list",
            Outcome::DrainedSnapshot(_) => "drained-snapshot",
            Outcome::Cleared => "cleared",
            Outcome::Deleted(_) => "deleted",
            Outcome::InvalidPosition => "invalid-position",
            Outcome::Added(_) => "added",
        }
    }
}
