//! 工单模块 - 提交、状态流转、查询
//!
//! - [`RequestStore`] owns every [`ServiceRequest`](shared::models::ServiceRequest)
//! - [`Viewer`] scopes listings by role
//! - [`RequestFilter`] narrows listings by status and free text

mod query;
mod store;

#[cfg(test)]
mod tests;

pub use query::{RequestFilter, Viewer};
pub use store::RequestStore;
