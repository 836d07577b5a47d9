//! Transport adapters
//!
//! The webhook adapter is the production surface; the console adapter is
//! a local stand-in that impersonates a single sender.

pub mod console;
pub mod http;
