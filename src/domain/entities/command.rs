/// A classified inbound message.
///
/// Classification never fails: anything that is not a recognized keyword
/// becomes `AddItem`, so the permissive fallthrough is visible in the
/// type instead of hiding in an error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty message - ask the sender to text an item.
    Prompt,
    /// `help` - show the command vocabulary.
    Help,
    /// `list` - read-only snapshot, the list is kept.
    ListOnly,
    /// `send` - read the list, then clear it, as one unit.
    ListAndDrain,
    /// `clear` - delete everything for this sender.
    ClearAll,
    /// `del N` / `delete N` - remove the item at 1-based position N.
    DeleteAt(usize),
    /// Anything else - store the trimmed text as a new item.
    AddItem(String),
}

impl Command {
    /// Short label for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Prompt => "prompt",
            Command::Help => "help",
            Command::ListOnly => "list",
            Command::ListAndDrain => "send",
            Command::ClearAll => "clear",
            Command::DeleteAt(_) => "delete-at",
            Command::AddItem(_) => "add-item",
        }
    }
}
