//! User Directory - identity records for students, staff and admins
//!
//! Profiles are created by self-service registration (students) or by the
//! seed loader (everyone), edited in place, and never deleted. The directory
//! does not know about tickets.

pub mod password;

use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, normalize_optional, validate_email,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use parking_lot::RwLock;
use shared::models::{ProfileUpdate, Role, StudentRegistration, UserProfile};
use shared::util::prefixed_id;
use std::collections::HashSet;

/// In-memory user directory
///
/// Profiles are kept in registration order. Writers are serialized by the
/// lock; readers get cloned profiles.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: RwLock<Vec<UserProfile>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from preloaded profiles, rejecting duplicate ids.
    pub fn with_users(users: Vec<UserProfile>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(user.id.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::DuplicateId,
                    format!("Duplicate user id: {}", user.id),
                )
                .with_detail("id", user.id.clone()));
            }
        }
        Ok(Self {
            users: RwLock::new(users),
        })
    }

    /// Register a new student profile.
    ///
    /// Role is always [`Role::Student`]. Name and email are required, as is
    /// the enrollment number students log in with. A password, when given,
    /// must satisfy the strength policy and match its confirmation.
    pub fn register(&self, input: StudentRegistration) -> AppResult<UserProfile> {
        validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
        validate_email(&input.email)?;
        validate_required_text(
            input.enrollment_number.as_deref().unwrap_or_default(),
            "enrollment_number",
            MAX_SHORT_TEXT_LEN,
        )?;
        validate_optional_text(&input.department, "department", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&input.avatar_url, "avatar_url", MAX_URL_LEN)?;

        // Hash outside the lock, argon2 is slow on purpose
        let password_hash = match input.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => {
                password::validate_new_password(password, input.confirm_password.as_deref())?;
                Some(password::hash_password(password)?)
            }
            None => None,
        };

        let email = input.email.trim().to_string();
        let enrollment_number = normalize_optional(input.enrollment_number);

        let mut users = self.users.write();
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&email)) {
            return Err(AppError::new(ErrorCode::EmailAlreadyRegistered).with_detail("email", email));
        }
        if let Some(enrollment) = &enrollment_number
            && users.iter().any(|u| {
                u.enrollment_number
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(enrollment))
            })
        {
            return Err(AppError::new(ErrorCode::EnrollmentAlreadyRegistered)
                .with_detail("enrollment_number", enrollment.clone()));
        }

        let id = prefixed_id("s", |candidate| users.iter().any(|u| u.id == candidate));
        let profile = UserProfile {
            id,
            name: input.name.trim().to_string(),
            email,
            role: Role::Student,
            enrollment_number,
            department: normalize_optional(input.department),
            avatar_url: normalize_optional(input.avatar_url),
            password_hash,
        };
        users.push(profile.clone());

        tracing::info!(user_id = %profile.id, role = %profile.role, "Student registered");
        Ok(profile)
    }

    /// Resolve a login attempt to the stored profile.
    ///
    /// Students are looked up by enrollment number, staff and admins by email
    /// or id. Only profiles with the requested role match. Credentials are
    /// checked only for profiles that carry a password hash.
    pub fn authenticate(
        &self,
        identifier: &str,
        role: Role,
        credentials: Option<&str>,
    ) -> AppResult<UserProfile> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(AppError::required("identifier"));
        }

        let profile = {
            let users = self.users.read();
            users
                .iter()
                .find(|u| u.role == role && matches_identifier(u, identifier))
                .cloned()
        }
        .ok_or_else(|| {
            tracing::warn!(%identifier, %role, "Login attempt for unknown account");
            AppError::with_message(
                ErrorCode::UserNotFound,
                format!("No {} account matches {}", role, identifier),
            )
            .with_detail("identifier", identifier)
        })?;

        if let Some(hash) = &profile.password_hash {
            let valid = match credentials {
                Some(password) => password::verify_password(hash, password)?,
                None => false,
            };
            if !valid {
                tracing::warn!(user_id = %profile.id, "Login rejected: invalid credentials");
                return Err(AppError::invalid_credentials());
            }
        }

        tracing::info!(user_id = %profile.id, role = %profile.role, "User logged in");
        Ok(profile)
    }

    /// Merge the supplied fields into an existing profile.
    pub fn update_profile(&self, id: &str, update: ProfileUpdate) -> AppResult<UserProfile> {
        if let Some(name) = &update.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        validate_optional_text(&update.department, "department", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&update.avatar_url, "avatar_url", MAX_URL_LEN)?;

        let mut users = self.users.write();
        let idx = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::user_not_found(id))?;

        if let Some(email) = &update.email {
            let email = email.trim();
            if users
                .iter()
                .any(|u| u.id != id && u.email.eq_ignore_ascii_case(email))
            {
                return Err(AppError::new(ErrorCode::EmailAlreadyRegistered)
                    .with_detail("email", email.to_string()));
            }
        }

        let profile = &mut users[idx];

        if let Some(name) = update.name {
            profile.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            profile.email = email.trim().to_string();
        }
        if update.department.is_some() {
            profile.department = normalize_optional(update.department);
        }
        if update.avatar_url.is_some() {
            profile.avatar_url = normalize_optional(update.avatar_url);
        }

        tracing::info!(user_id = %id, "Profile updated");
        Ok(profile.clone())
    }

    pub fn get(&self, id: &str) -> Option<UserProfile> {
        self.users.read().iter().find(|u| u.id == id).cloned()
    }

    /// All profiles in registration order
    pub fn list(&self) -> Vec<UserProfile> {
        self.users.read().clone()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

fn matches_identifier(user: &UserProfile, identifier: &str) -> bool {
    match user.role {
        Role::Student => user
            .enrollment_number
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case(identifier)),
        Role::Staff | Role::Admin => {
            user.email.eq_ignore_ascii_case(identifier) || user.id == identifier
        }
    }
}
