//! Shared types for the campus desk
//!
//! Domain models, the unified error type and small utilities used by the
//! directory, the request store and any UI shell built on top of them.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
