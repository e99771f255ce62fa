//! RequestStore - single source of truth for service tickets
//!
//! # Operation Flow
//!
//! ```text
//! submit(input)
//!     ├─ 1. Validate fields (nothing is locked yet)
//!     ├─ 2. Take the write lock
//!     ├─ 3. Allocate an id unused by any stored ticket
//!     └─ 4. Insert at the head (index 0 = most recent)
//!
//! update_status(id, status, remarks)
//!     ├─ 1. Validate remarks
//!     ├─ 2. Take the write lock, find the ticket
//!     └─ 3. Set status, overwrite remarks when non-blank
//!
//! list_for(viewer, filter)
//!     ├─ 1. Take the read lock, clone the visible matches in stored order
//!     └─ 2. Stable sort by date descending
//!
//! aggregate(top_n)
//!     └─ Fold the stored tickets under the read lock
//! ```

use super::query::{RequestFilter, Viewer};
use crate::analytics;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, normalize_optional, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use chrono::NaiveDate;
use parking_lot::RwLock;
use shared::models::{AnalyticsSummary, RequestStatus, RequestSubmit, ServiceRequest};
use shared::util::{prefixed_id, today};
use std::collections::HashSet;

/// In-memory ticket store
///
/// Mutations are serialized by the write lock. Reads clone under the read
/// lock, so they never observe a half-applied write.
#[derive(Debug, Default)]
pub struct RequestStore {
    /// Index 0 is the most recently inserted ticket
    requests: RwLock<Vec<ServiceRequest>>,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from preloaded tickets (first = most recently inserted),
    /// rejecting duplicate ids.
    pub fn with_requests(requests: Vec<ServiceRequest>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for req in &requests {
            if !seen.insert(req.id.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::DuplicateId,
                    format!("Duplicate request id: {}", req.id),
                )
                .with_detail("id", req.id.clone()));
            }
        }
        Ok(Self {
            requests: RwLock::new(requests),
        })
    }

    /// Create a ticket dated today with status `Submitted`.
    pub fn submit(&self, input: RequestSubmit) -> AppResult<ServiceRequest> {
        self.submit_dated(input, today())
    }

    pub(crate) fn submit_dated(
        &self,
        input: RequestSubmit,
        date: NaiveDate,
    ) -> AppResult<ServiceRequest> {
        validate_required_text(&input.student_id, "student_id", MAX_NAME_LEN)?;
        validate_required_text(&input.student_name, "student_name", MAX_NAME_LEN)?;
        validate_required_text(&input.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&input.location, "location", MAX_NOTE_LEN)?;

        let mut requests = self.requests.write();
        let id = prefixed_id("req", |candidate| {
            requests.iter().any(|r| r.id == candidate)
        });
        let request = ServiceRequest {
            id,
            student_id: input.student_id.trim().to_string(),
            student_name: input.student_name.trim().to_string(),
            service_type: input.service_type,
            location: normalize_optional(input.location),
            description: input.description.trim().to_string(),
            status: RequestStatus::Submitted,
            date,
            remarks: None,
        };
        requests.insert(0, request.clone());

        tracing::info!(
            request_id = %request.id,
            student_id = %request.student_id,
            service_type = %request.service_type,
            "Service request submitted"
        );
        Ok(request)
    }

    /// Move a ticket to `status`, overwriting remarks when non-blank ones are
    /// supplied.
    ///
    /// Every status is accepted from every status. Who may call this is the
    /// caller's concern.
    pub fn update_status(
        &self,
        id: &str,
        status: RequestStatus,
        remarks: Option<String>,
    ) -> AppResult<ServiceRequest> {
        let remarks = normalize_optional(remarks);
        validate_optional_text(&remarks, "remarks", MAX_NOTE_LEN)?;

        let mut requests = self.requests.write();
        let request = requests.iter_mut().find(|r| r.id == id).ok_or_else(|| {
            tracing::warn!(request_id = %id, "Status update for unknown request");
            AppError::request_not_found(id)
        })?;

        let previous = request.status;
        if previous.is_terminal() && !status.is_terminal() {
            // Reopening is allowed but unconfirmed as intended behavior
            tracing::warn!(request_id = %id, from = %previous, to = %status, "Resolved request reopened");
        }

        request.status = status;
        if remarks.is_some() {
            request.remarks = remarks;
        }

        tracing::info!(request_id = %id, from = %previous, to = %status, "Request status updated");
        Ok(request.clone())
    }

    /// Tickets visible to `viewer` that pass `filter`, newest date first.
    /// Same-date tickets keep insertion order (most recent first).
    pub fn list_for(&self, viewer: &Viewer, filter: &RequestFilter) -> Vec<ServiceRequest> {
        let matches = filter.matcher();
        let mut out: Vec<ServiceRequest> = self
            .requests
            .read()
            .iter()
            .filter(|r| viewer.can_see(*r) && matches(*r))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.date.cmp(&a.date));
        out
    }

    /// Analytics over every stored ticket, computed under one read lock
    pub fn aggregate(&self, top_n: usize) -> AnalyticsSummary {
        analytics::aggregate(&self.requests.read(), top_n)
    }

    pub fn get(&self, id: &str) -> Option<ServiceRequest> {
        self.requests.read().iter().find(|r| r.id == id).cloned()
    }

    /// Consistent copy of every ticket in stored order
    pub fn snapshot(&self) -> Vec<ServiceRequest> {
        self.requests.read().clone()
    }

    pub fn len(&self) -> usize {
        self.requests.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.read().is_empty()
    }
}
