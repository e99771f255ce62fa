//! 查询条件 - 可见范围与过滤

use crate::utils::{AppError, AppResult};
use shared::models::{RequestStatus, Role, ServiceRequest, UserProfile};

/// Whose view a listing is computed for
///
/// Students only ever see their own tickets; staff and admins see all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Student(String),
    Staff,
    Admin,
}

impl Viewer {
    pub fn for_profile(profile: &UserProfile) -> Self {
        match profile.role {
            Role::Student => Viewer::Student(profile.id.clone()),
            Role::Staff => Viewer::Staff,
            Role::Admin => Viewer::Admin,
        }
    }

    /// Build a scope from a bare role and optional user id.
    ///
    /// A student scope without a user id is rejected rather than widened.
    pub fn from_role(role: Role, user_id: Option<&str>) -> AppResult<Self> {
        match role {
            Role::Student => user_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(|id| Viewer::Student(id.to_string()))
                .ok_or_else(|| AppError::required("user_id")),
            Role::Staff => Ok(Viewer::Staff),
            Role::Admin => Ok(Viewer::Admin),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Viewer::Student(_) => Role::Student,
            Viewer::Staff => Role::Staff,
            Viewer::Admin => Role::Admin,
        }
    }

    pub fn can_see(&self, request: &ServiceRequest) -> bool {
        match self {
            Viewer::Student(id) => request.student_id == *id,
            Viewer::Staff | Viewer::Admin => true,
        }
    }
}

/// Optional listing filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    /// Case-insensitive substring over student name, service type and id
    pub search: Option<String>,
}

impl RequestFilter {
    /// No filtering
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub(crate) fn matcher(&self) -> impl Fn(&ServiceRequest) -> bool + '_ {
        let needle = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        move |req: &ServiceRequest| {
            self.status.is_none_or(|s| req.status == s)
                && needle.as_deref().is_none_or(|n| req.matches_search(n))
        }
    }
}
