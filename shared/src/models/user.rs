//! User Profile Model

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission class of a profile (fixed at creation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Staff,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Staff, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// Staff and admin see every ticket and may change status
    pub fn is_staff_or_admin(&self) -> bool {
        matches!(self, Role::Staff | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::InvalidFormat, format!("Unknown role: {}", s))
                    .with_detail("field", "role")
            })
    }
}

/// Identity record held by the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// argon2 PHC string; seeded demo profiles carry none
    #[serde(default, skip_serializing)]
    pub password_hash: Option<String>,
}

/// Self-service student registration payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentRegistration {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub enrollment_number: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub confirm_password: Option<String>,
}

/// Update profile payload
///
/// Unset fields are left untouched. Role is deliberately absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!(" Admin ".parse::<Role>().unwrap(), Role::Admin);
        let err = "dean".parse::<Role>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.is_validation());
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"staff\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let profile = UserProfile {
            id: "s1".to_string(),
            name: "Rahul Sharma".to_string(),
            email: "rahul.s@college.edu".to_string(),
            role: Role::Student,
            enrollment_number: Some("CS2023001".to_string()),
            department: None,
            avatar_url: None,
            password_hash: Some("$argon2id$secret".to_string()),
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("department"));
        assert!(json.contains("\"enrollment_number\":\"CS2023001\""));
    }
}
