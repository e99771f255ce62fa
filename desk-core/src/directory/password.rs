//! Password policy and hashing for self-registered students

use crate::utils::validation::MAX_PASSWORD_LEN;
use crate::utils::{AppError, AppResult, ErrorCode};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Which strength criteria a candidate password meets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub symbol: bool,
}

impl PasswordStrength {
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LEN,
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.length && self.lowercase && self.uppercase && self.symbol
    }

    /// Names of the unmet criteria, for the error details
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.length, "length"),
            (self.lowercase, "lowercase"),
            (self.uppercase, "uppercase"),
            (self.symbol, "symbol"),
        ]
        .into_iter()
        .filter(|(met, _)| !met)
        .map(|(_, name)| name)
        .collect()
    }
}

/// Check a new password against the policy and its confirmation
pub fn validate_new_password(password: &str, confirm: Option<&str>) -> AppResult<()> {
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("password is too long (max {MAX_PASSWORD_LEN})"),
        )
        .with_detail("field", "password"));
    }

    let strength = PasswordStrength::check(password);
    if !strength.is_satisfied() {
        return Err(AppError::new(ErrorCode::PasswordTooWeak)
            .with_detail("field", "password")
            .with_detail("missing", strength.missing()));
    }

    if let Some(confirm) = confirm
        && confirm != password
    {
        return Err(AppError::new(ErrorCode::PasswordMismatch).with_detail("field", "confirm_password"));
    }
    Ok(())
}

/// Hash password using argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))
}

/// Check that a stored hash is a well-formed PHC string
pub fn check_stored_hash(hash: &str) -> AppResult<()> {
    PasswordHash::new(hash).map(|_| ()).map_err(|e| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("Stored password hash is invalid: {}", e),
        )
        .with_detail("field", "password_hash")
    })
}

/// Verify password using argon2
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("Stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_stored_hash() {
        let hash = hash_password("Campus#1").unwrap();
        assert!(check_stored_hash(&hash).is_ok());

        let err = check_stored_hash("plaintext-password").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.detail_str("field"), Some("password_hash"));
    }

    #[test]
    fn test_strength_criteria() {
        let s = PasswordStrength::check("abc");
        assert!(!s.is_satisfied());
        assert_eq!(s.missing(), vec!["length", "uppercase", "symbol"]);

        assert!(PasswordStrength::check("Campus#1").is_satisfied());
        assert!(PasswordStrength::check("Ab cdef").is_satisfied()); // space counts as symbol
    }

    #[test]
    fn test_validate_new_password() {
        assert!(validate_new_password("Campus#1", Some("Campus#1")).is_ok());
        assert!(validate_new_password("Campus#1", None).is_ok());

        let err = validate_new_password("campus1", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::PasswordTooWeak);

        let err = validate_new_password("Campus#1", Some("Campus#2")).unwrap_err();
        assert_eq!(err.code, ErrorCode::PasswordMismatch);
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Campus#1").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "Campus#1").unwrap());
        assert!(!verify_password(&hash, "campus#1").unwrap());
        assert!(verify_password("not-a-phc-string", "x").is_err());
    }
}
