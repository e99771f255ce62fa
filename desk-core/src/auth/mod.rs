//! 认证与权限
//!
//! Credentials are checked by [`UserDirectory::authenticate`](crate::directory::UserDirectory::authenticate);
//! this module decides what an authenticated profile may do.

pub mod permissions;

pub use permissions::{require_admin, require_staff_or_admin, require_student};
