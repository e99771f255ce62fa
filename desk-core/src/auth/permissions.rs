//! Role checks
//!
//! The stores never look at roles; callers gate each operation here first.
//!
//! | Operation          | Student | Staff | Admin |
//! |--------------------|---------|-------|-------|
//! | submit             | yes     |       |       |
//! | update status      |         | yes   | yes   |
//! | list (own only)    | yes     |       |       |
//! | list (all)         |         | yes   | yes   |
//! | analytics summary  |         |       | yes   |

use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Role, UserProfile};

/// 仅学生可提交工单
pub fn require_student(actor: &UserProfile) -> AppResult<()> {
    require(actor, actor.role == Role::Student, ErrorCode::StudentRequired)
}

/// 工作人员或管理员
pub fn require_staff_or_admin(actor: &UserProfile) -> AppResult<()> {
    require(actor, actor.role.is_staff_or_admin(), ErrorCode::StaffRequired)
}

/// 仅管理员
pub fn require_admin(actor: &UserProfile) -> AppResult<()> {
    require(actor, actor.role == Role::Admin, ErrorCode::AdminRequired)
}

fn require(actor: &UserProfile, allowed: bool, code: ErrorCode) -> AppResult<()> {
    if allowed {
        return Ok(());
    }
    tracing::warn!(
        user_id = %actor.id,
        user_role = %actor.role,
        required = %code,
        "Permission denied"
    );
    Err(AppError::new(code)
        .with_detail("user_id", actor.id.clone())
        .with_detail("role", actor.role.as_str()))
}
