//! Password policy enforcement for new passwords.

use hostel_core::config::AuthConfig;
use hostel_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
    /// Whether a zxcvbn score of at least three is required.
    require_strong: bool,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            require_strong: config.require_strong_passwords,
        }
    }

    /// Validates a password against the configured policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if self.require_strong {
            let estimate = zxcvbn::zxcvbn(password, &[]);
            if estimate.score() < zxcvbn::Score::Three {
                return Err(AppError::validation(
                    "Password is too weak. Please use a stronger password with more entropy.",
                ));
            }
        }

        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if old_password == new_password {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        let v = PasswordValidator::new(&AuthConfig::default());
        assert!(v.validate("12345").is_err());
        assert!(v.validate("123456").is_ok());
    }

    #[test]
    fn test_strength_only_when_required() {
        let cfg = AuthConfig {
            require_strong_passwords: true,
            ..AuthConfig::default()
        };
        let v = PasswordValidator::new(&cfg);
        assert!(v.validate("password").is_err());
        assert!(v.validate("correct-horse-battery-staple-91").is_ok());
    }

    #[test]
    fn test_not_same() {
        let v = PasswordValidator::new(&AuthConfig::default());
        assert!(v.validate_not_same("abcdef", "abcdef").is_err());
        assert!(v.validate_not_same("abcdef", "ghijkl").is_ok());
    }
}
