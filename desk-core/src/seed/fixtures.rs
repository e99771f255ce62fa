use chrono::NaiveDate;
use shared::models::{RequestStatus, Role, ServiceRequest, ServiceType, UserProfile};

const AVATAR_STUDENT: &str =
    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?auto=format&fit=crop&q=80&w=100";
const AVATAR_STAFF: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=100";
const AVATAR_ADMIN: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=100";

pub fn builtin_users() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: "s1".to_string(),
            name: "Rahul Sharma".to_string(),
            email: "rahul.s@college.edu".to_string(),
            role: Role::Student,
            enrollment_number: Some("CS2023001".to_string()),
            department: Some("Computer Science".to_string()),
            avatar_url: Some(AVATAR_STUDENT.to_string()),
            password_hash: None,
        },
        UserProfile {
            id: "st1".to_string(),
            name: "Prof. Anjali Gupta".to_string(),
            email: "anjali.g@college.edu".to_string(),
            role: Role::Staff,
            enrollment_number: None,
            department: None,
            avatar_url: Some(AVATAR_STAFF.to_string()),
            password_hash: None,
        },
        UserProfile {
            id: "a1".to_string(),
            name: "System Admin".to_string(),
            email: "admin@college.edu".to_string(),
            role: Role::Admin,
            enrollment_number: None,
            department: None,
            avatar_url: Some(AVATAR_ADMIN.to_string()),
            password_hash: None,
        },
    ]
}

/// Stored order, most recently inserted first
pub fn builtin_requests() -> Vec<ServiceRequest> {
    vec![
        ServiceRequest {
            id: "req1".to_string(),
            student_id: "s1".to_string(),
            student_name: "Rahul Sharma".to_string(),
            service_type: ServiceType::DrinkingWater,
            location: Some("Block A, 2nd Floor".to_string()),
            description: "Water cooler is leaking.".to_string(),
            status: RequestStatus::Submitted,
            date: date(2023, 10, 25),
            remarks: None,
        },
        // s2 has no directory profile; tickets keep their own snapshot
        ServiceRequest {
            id: "req2".to_string(),
            student_id: "s2".to_string(),
            student_name: "Priya Patel".to_string(),
            service_type: ServiceType::ClassroomCleanliness,
            location: Some("Room 304".to_string()),
            description: "Dustbins are full.".to_string(),
            status: RequestStatus::InProgress,
            date: date(2023, 10, 24),
            remarks: None,
        },
        ServiceRequest {
            id: "req3".to_string(),
            student_id: "s1".to_string(),
            student_name: "Rahul Sharma".to_string(),
            service_type: ServiceType::IdCard,
            location: None,
            description: "Lost my ID card, need replacement.".to_string(),
            status: RequestStatus::Resolved,
            date: date(2023, 10, 20),
            remarks: Some("Collect from Admin block".to_string()),
        },
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
