//! Application services - Business logic orchestration

pub mod list_service;

pub use list_service::ListService;
