//! Shared utilities for API access, configuration, errors, and token storage.
//!
//! Feature clients go through [`api::ApiClient`] so every request gets the same
//! base URL handling, user agent, and error mapping. None of these helpers log
//! token or password material.

pub mod api;
pub mod config;
pub mod errors;
pub mod storage;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::AppError;
pub use storage::{FileStorage, LocalStorage, MemoryStorage};
