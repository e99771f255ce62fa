use std::sync::Arc;

use shared::models::{
    AnalyticsSummary, RequestStatus, RequestSubmit, ServiceRequest, ServiceType, UserProfile,
};

use crate::auth::{require_admin, require_staff_or_admin, require_student};
use crate::core::Config;
use crate::directory::UserDirectory;
use crate::requests::{RequestFilter, RequestStore, Viewer};
use crate::seed::SeedData;
use crate::utils::AppResult;

/// Desk 状态 - 持有目录与工单存储的共享引用
///
/// Clones share the same directory and store, so a cloned handle can be
/// passed to every consumer (UI shell, report job, tests).
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | directory | Arc<UserDirectory> | 用户档案 |
/// | requests | Arc<RequestStore> | 工单存储 |
/// | top_category_limit | usize | 报表分类数量 |
///
/// The `*_as` methods apply the role checks from [`crate::auth`] before
/// delegating; the stores themselves never look at roles.
#[derive(Clone, Debug)]
pub struct DeskState {
    pub directory: Arc<UserDirectory>,
    pub requests: Arc<RequestStore>,
    pub top_category_limit: usize,
}

impl DeskState {
    pub fn new(directory: UserDirectory, requests: RequestStore, top_category_limit: usize) -> Self {
        Self {
            directory: Arc::new(directory),
            requests: Arc::new(requests),
            top_category_limit,
        }
    }

    /// 初始化 Desk 状态
    ///
    /// 加载种子数据 (SEED_FILE 或内置数据) 并构建目录与工单存储
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let seed = match &config.seed_file {
            Some(path) => SeedData::from_json_file(path)?,
            None => SeedData::builtin(),
        };

        let directory = UserDirectory::with_users(seed.users)?;
        let requests = RequestStore::with_requests(seed.requests)?;

        tracing::info!(
            environment = %config.environment,
            users = directory.len(),
            requests = requests.len(),
            "Desk state initialized"
        );
        Ok(Self::new(directory, requests, config.top_category_limit))
    }

    /// Submit a ticket on behalf of a student, snapshotting their current name.
    pub fn submit_as(
        &self,
        actor: &UserProfile,
        service_type: ServiceType,
        description: &str,
        location: Option<&str>,
    ) -> AppResult<ServiceRequest> {
        require_student(actor)?;
        self.requests.submit(RequestSubmit {
            student_id: actor.id.clone(),
            student_name: actor.name.clone(),
            service_type,
            description: description.to_string(),
            location: location.map(str::to_string),
        })
    }

    pub fn update_status_as(
        &self,
        actor: &UserProfile,
        id: &str,
        status: RequestStatus,
        remarks: Option<&str>,
    ) -> AppResult<ServiceRequest> {
        require_staff_or_admin(actor)?;
        let updated = self
            .requests
            .update_status(id, status, remarks.map(str::to_string))?;
        tracing::debug!(request_id = %id, actor_id = %actor.id, "Status change applied");
        Ok(updated)
    }

    /// Students get their own tickets; staff and admins get everything.
    pub fn list_visible_to(
        &self,
        actor: &UserProfile,
        filter: &RequestFilter,
    ) -> Vec<ServiceRequest> {
        self.requests.list_for(&Viewer::for_profile(actor), filter)
    }

    /// Analytics over every ticket, admin only
    pub fn summary_for(&self, actor: &UserProfile) -> AppResult<AnalyticsSummary> {
        require_admin(actor)?;
        Ok(self.summary())
    }

    /// Analytics over every ticket without a role check
    pub fn summary(&self) -> AnalyticsSummary {
        self.requests.aggregate(self.top_category_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;
    use shared::models::Role;

    fn create_test_state() -> DeskState {
        DeskState::initialize(&Config::builtin()).unwrap()
    }

    fn profile(state: &DeskState, id: &str) -> UserProfile {
        state.directory.get(id).unwrap()
    }

    #[test]
    fn test_initialize_builtin() {
        let state = create_test_state();
        assert_eq!(state.directory.len(), 3);
        assert_eq!(state.requests.len(), 3);
        assert_eq!(state.top_category_limit, 5);
    }

    #[test]
    fn test_initialize_missing_seed_file() {
        let config = Config::with_seed_file("/nonexistent/seed.json");
        let err = DeskState::initialize(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::SeedLoadFailed);
    }

    #[test]
    fn test_clones_share_store() {
        let state = create_test_state();
        let handle = state.clone();
        let student = profile(&state, "s1");

        handle
            .submit_as(&student, ServiceType::Parking, "No bike stands", None)
            .unwrap();
        assert_eq!(state.requests.len(), 4);
    }

    #[test]
    fn test_submit_as_requires_student() {
        let state = create_test_state();
        let staff = profile(&state, "st1");

        let err = state
            .submit_as(&staff, ServiceType::Other, "Projector broken", None)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StudentRequired);
        assert_eq!(state.requests.len(), 3);
    }

    #[test]
    fn test_submit_as_snapshots_actor() {
        let state = create_test_state();
        let student = profile(&state, "s1");

        let created = state
            .submit_as(&student, ServiceType::Erp, "Marks missing", Some("Lab 2"))
            .unwrap();
        assert_eq!(created.student_id, "s1");
        assert_eq!(created.student_name, "Rahul Sharma");
        assert_eq!(created.location.as_deref(), Some("Lab 2"));
    }

    #[test]
    fn test_update_status_as_requires_staff() {
        let state = create_test_state();
        let student = profile(&state, "s1");
        let staff = profile(&state, "st1");
        let admin = profile(&state, "a1");

        let err = state
            .update_status_as(&student, "req1", RequestStatus::Resolved, None)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StaffRequired);
        assert_eq!(state.requests.get("req1").unwrap().status, RequestStatus::Submitted);

        state
            .update_status_as(&staff, "req1", RequestStatus::InProgress, Some("On it"))
            .unwrap();
        state
            .update_status_as(&admin, "req1", RequestStatus::Resolved, None)
            .unwrap();

        let req = state.requests.get("req1").unwrap();
        assert_eq!(req.status, RequestStatus::Resolved);
        assert_eq!(req.remarks.as_deref(), Some("On it"));
    }

    #[test]
    fn test_list_visible_to_scopes_by_role() {
        let state = create_test_state();
        for user in state.directory.list() {
            let listed = state.list_visible_to(&user, &RequestFilter::all());
            match user.role {
                Role::Student => assert!(listed.iter().all(|r| r.student_id == user.id)),
                Role::Staff | Role::Admin => assert_eq!(listed.len(), 3),
            }
        }
    }

    #[test]
    fn test_summary_for_admin_only() {
        let state = create_test_state();
        let admin = profile(&state, "a1");
        let staff = profile(&state, "st1");

        let summary = state.summary_for(&admin).unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.resolved, 1);

        assert_eq!(
            state.summary_for(&staff).unwrap_err().code,
            ErrorCode::AdminRequired
        );
    }
}
