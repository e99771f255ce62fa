//! Data models
//!
//! Shared between the desk core and whatever UI shell drives it.
//! All ids are opaque strings.

pub mod analytics;
pub mod service_request;
pub mod user;

// Re-exports
pub use analytics::*;
pub use service_request::*;
pub use user::*;
