//! Seed/bootstrap loader
//!
//! Supplies the initial profiles and tickets at process start, either from
//! the builtin demo fixtures or from a JSON file:
//!
//! ```json
//! { "users": [ ... ], "requests": [ ... ] }
//! ```
//!
//! Request order in the file is the stored order: the first entry counts as
//! the most recently inserted.

mod fixtures;

pub use fixtures::{builtin_requests, builtin_users};

use crate::directory::password;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_email, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use shared::models::{ServiceRequest, UserProfile};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Seed loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<SeedError> for AppError {
    fn from(err: SeedError) -> Self {
        let path = match &err {
            SeedError::Io { path, .. } | SeedError::Json { path, .. } => path.display().to_string(),
        };
        tracing::error!(error = %err, "Seed loading failed");
        AppError::with_message(ErrorCode::SeedLoadFailed, err.to_string()).with_detail("path", path)
    }
}

/// Initial directory and store contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<UserProfile>,
    #[serde(default)]
    pub requests: Vec<ServiceRequest>,
}

impl SeedData {
    /// The demo campus: one student, one staff member, one admin, three tickets
    pub fn builtin() -> Self {
        Self {
            users: builtin_users(),
            requests: builtin_requests(),
        }
    }

    /// Load and validate fixtures from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: SeedData = serde_json::from_str(&raw).map_err(|source| SeedError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        seed.validate()?;

        tracing::info!(
            path = %path.display(),
            users = seed.users.len(),
            requests = seed.requests.len(),
            "Seed file loaded"
        );
        Ok(seed)
    }

    /// Check id uniqueness per collection, email and enrollment uniqueness
    /// across users, stored password hashes, and the fields the store would
    /// have required at creation time.
    pub fn validate(&self) -> AppResult<()> {
        check_unique("user", self.users.iter().map(|u| u.id.as_str()))?;
        check_unique("request", self.requests.iter().map(|r| r.id.as_str()))?;

        let mut emails = HashSet::new();
        let mut enrollments = HashSet::new();
        for user in &self.users {
            validate_required_text(&user.id, "id", MAX_NAME_LEN)?;
            validate_required_text(&user.name, "name", MAX_NAME_LEN)?;
            validate_email(&user.email)?;

            // login identifiers must be unambiguous
            if !emails.insert(user.email.trim().to_lowercase()) {
                return Err(AppError::new(ErrorCode::EmailAlreadyRegistered)
                    .with_detail("email", user.email.clone())
                    .with_detail("id", user.id.clone()));
            }
            if let Some(enrollment) = user.enrollment_number.as_deref()
                && !enrollments.insert(enrollment.trim().to_lowercase())
            {
                return Err(AppError::new(ErrorCode::EnrollmentAlreadyRegistered)
                    .with_detail("enrollment_number", enrollment)
                    .with_detail("id", user.id.clone()));
            }
            if let Some(hash) = &user.password_hash {
                password::check_stored_hash(hash)
                    .map_err(|e| e.with_detail("id", user.id.clone()))?;
            }
        }
        for req in &self.requests {
            validate_required_text(&req.id, "id", MAX_NAME_LEN)?;
            validate_required_text(&req.student_id, "student_id", MAX_NAME_LEN)?;
            validate_required_text(&req.description, "description", MAX_DESCRIPTION_LEN)?;
        }
        Ok(())
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::with_message(
                ErrorCode::DuplicateId,
                format!("Duplicate {} id in seed data: {}", kind, id),
            )
            .with_detail("id", id));
        }
    }
    Ok(())
}
