//! Message classifier - Maps raw message text to a typed Command

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::domain::entities::Command;

/// `del 3` / `delete 3`, case-insensitive, trailing content ignored.
static DELETE_AT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(?:del|delete)\s+(\d+)").unwrap());

/// Classify an untrimmed inbound message body.
///
/// Matching is case-insensitive on the trimmed body; highest-priority
/// match wins. Anything non-empty that is not a recognized keyword is an
/// item to add, original case preserved - including `del` forms whose
/// position is missing or does not parse. Classification never fails.
pub fn classify(raw: &str) -> Command {
    let body = raw.trim();
    if body.is_empty() {
        return Command::Prompt;
    }

    match body.to_lowercase().as_str() {
        "help" => return Command::Help,
        "list" => return Command::ListOnly,
        "send" => return Command::ListAndDrain,
        "clear" => return Command::ClearAll,
        _ => {}
    }

    if let Some(caps) = DELETE_AT.captures(body) {
        // A run of digits can still overflow usize; that falls through
        // to AddItem like any other unparseable position.
        if let Ok(position) = caps[1].parse::<usize>() {
            return Command::DeleteAt(position);
        }
    }

    Command::AddItem(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_messages_prompt() {
        assert_eq!(classify(""), Command::Prompt);
        assert_eq!(classify("   "), Command::Prompt);
        assert_eq!(classify("\n\t"), Command::Prompt);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(classify("help"), Command::Help);
        assert_eq!(classify("HELP"), Command::Help);
        assert_eq!(classify("list"), Command::ListOnly);
        assert_eq!(classify("List"), Command::ListOnly);
        assert_eq!(classify("send"), Command::ListAndDrain);
        assert_eq!(classify("Send"), Command::ListAndDrain);
        assert_eq!(classify("SEND"), Command::ListAndDrain);
        assert_eq!(classify(" send "), Command::ListAndDrain);
        assert_eq!(classify("clear"), Command::ClearAll);
        assert_eq!(classify("CLEAR"), Command::ClearAll);
    }

    #[test]
    fn test_keyword_needs_exact_match() {
        // Longer words that merely start with a keyword are items.
        assert_eq!(classify("sending"), Command::AddItem("sending".to_string()));
        assert_eq!(classify("clears"), Command::AddItem("clears".to_string()));
        assert_eq!(
            classify("send it later"),
            Command::AddItem("send it later".to_string())
        );
    }

    #[test]
    fn test_delete_forms() {
        assert_eq!(classify("del 2"), Command::DeleteAt(2));
        assert_eq!(classify("delete 10"), Command::DeleteAt(10));
        assert_eq!(classify("DEL 1"), Command::DeleteAt(1));
        assert_eq!(classify("Delete  7"), Command::DeleteAt(7));
        // Trailing content after the position is ignored.
        assert_eq!(classify("del 3 eggs"), Command::DeleteAt(3));
    }

    #[test]
    fn test_delete_zero_is_a_position() {
        // 0 parses as digits; the executor rejects it as out of range.
        assert_eq!(classify("del 0"), Command::DeleteAt(0));
    }

    #[test]
    fn test_bad_delete_falls_through_to_add() {
        assert_eq!(classify("del"), Command::AddItem("del".to_string()));
        assert_eq!(classify("delete"), Command::AddItem("delete".to_string()));
        assert_eq!(classify("del x"), Command::AddItem("del x".to_string()));
        assert_eq!(
            classify("del -1"),
            Command::AddItem("del -1".to_string())
        );
        // Way past usize::MAX.
        let huge = "del 99999999999999999999999999";
        assert_eq!(classify(huge), Command::AddItem(huge.to_string()));
    }

    #[test]
    fn test_items_keep_original_case() {
        assert_eq!(
            classify("  Buy Milk  "),
            Command::AddItem("Buy Milk".to_string())
        );
        assert_eq!(
            classify("toilet paper"),
            Command::AddItem("toilet paper".to_string())
        );
    }
}
