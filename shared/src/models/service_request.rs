//! Service Request Model (工单)

use crate::error::{AppError, ErrorCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Service Type
// ============================================================================

/// Fixed set of campus issue categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Drinking Water Issue")]
    DrinkingWater,
    #[serde(rename = "ID Card Issue")]
    IdCard,
    #[serde(rename = "ERP Related Issue")]
    Erp,
    #[serde(rename = "Water Related Issue")]
    WaterRelated,
    #[serde(rename = "Cleanliness in Classroom")]
    ClassroomCleanliness,
    #[serde(rename = "Parking Related Issue")]
    Parking,
    #[serde(rename = "Canteen Issue")]
    Canteen,
    #[serde(rename = "Ragging / Harassment")]
    RaggingHarassment,
    Other,
}

impl ServiceType {
    /// Display order used by the submission form
    pub const ALL: [ServiceType; 9] = [
        ServiceType::DrinkingWater,
        ServiceType::IdCard,
        ServiceType::Erp,
        ServiceType::WaterRelated,
        ServiceType::ClassroomCleanliness,
        ServiceType::Parking,
        ServiceType::Canteen,
        ServiceType::RaggingHarassment,
        ServiceType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::DrinkingWater => "Drinking Water Issue",
            ServiceType::IdCard => "ID Card Issue",
            ServiceType::Erp => "ERP Related Issue",
            ServiceType::WaterRelated => "Water Related Issue",
            ServiceType::ClassroomCleanliness => "Cleanliness in Classroom",
            ServiceType::Parking => "Parking Related Issue",
            ServiceType::Canteen => "Canteen Issue",
            ServiceType::RaggingHarassment => "Ragging / Harassment",
            ServiceType::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Err(AppError::required("service_type"));
        }
        ServiceType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidServiceType,
                    format!("Unknown service type: {}", s),
                )
                .with_detail("field", "service_type")
            })
    }
}

// ============================================================================
// Status
// ============================================================================

/// Ticket lifecycle status
///
/// `Submitted` is entered only at creation. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Submitted,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Submitted,
        RequestStatus::InProgress,
        RequestStatus::Resolved,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Submitted => "Submitted",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Resolved => "Resolved",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Resolved)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RequestStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RequestStatus::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::InvalidStatus, format!("Unknown status: {}", s))
                    .with_detail("field", "status")
            })
    }
}

// ============================================================================
// Service Request
// ============================================================================

/// A reported campus issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: String,
    /// Owning student's profile id (never dereferenced by the store)
    pub student_id: String,
    /// Submitter's name as it was at submission time
    pub student_name: String,
    pub service_type: ServiceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub description: String,
    pub status: RequestStatus,
    /// Submission date (YYYY-MM-DD)
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl ServiceRequest {
    /// Case-insensitive substring match against student name, service type
    /// label and id. `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.student_name.to_lowercase().contains(needle)
            || self.service_type.label().to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }
}

/// Submit request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSubmit {
    pub student_id: String,
    /// Snapshot of the submitter's display name
    pub student_name: String,
    pub service_type: ServiceType,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
}
