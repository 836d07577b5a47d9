//! Listr - a per-sender text-list manager driven by inbound SMS webhooks.
//!
//! Each sender (keyed by phone number) accumulates a list of free-text
//! items and drives it with a small command vocabulary: text anything to
//! add it, `list` to peek, `send` to receive the list and start fresh,
//! `del N` to remove one item, `clear` to wipe everything.

pub mod application;
pub mod domain;
pub mod infrastructure;
