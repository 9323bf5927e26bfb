//! Form validation errors.
//!
//! Raised before any request is issued. A validation failure never reaches
//! the network layer.

use thiserror::Error;

/// Why a form submission was blocked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty (after trimming whitespace).
    #[error("required field '{field}' is empty")]
    EmptyField { field: &'static str },

    /// The e-mail field is not shaped like `local@domain`.
    #[error("'{value}' is not a valid e-mail address")]
    InvalidEmail { value: String },
}

impl ValidationError {
    /// Inline message shown under the offending field.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::EmptyField { .. } => "Заполните это поле".to_string(),
            ValidationError::InvalidEmail { .. } => {
                "Введите адрес электронной почты".to_string()
            }
        }
    }

    /// The field this error is attached to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::InvalidEmail { .. } => "email",
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { .. } => "E_VAL_EMPTY",
            ValidationError::InvalidEmail { .. } => "E_VAL_EMAIL",
        }
    }
}

/// Require `value` to be non-empty once trimmed.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(())
    }
}

/// Require `value` to look like an e-mail address.
///
/// Only the shape is checked: one `@` with a non-empty local part and a
/// domain containing a dot that is neither first nor last.
pub fn require_email(value: &str) -> Result<(), ValidationError> {
    require("email", value)?;
    let trimmed = value.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .find('.')
                    .is_some_and(|dot| dot > 0 && dot < domain.len() - 1)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail {
            value: trimmed.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_whitespace() {
        assert_eq!(
            require("title", "   "),
            Err(ValidationError::EmptyField { field: "title" })
        );
        assert!(require("title", " Тест ").is_ok());
    }

    #[test]
    fn test_require_email() {
        assert!(require_email("hero@rpgforum.com").is_ok());
        assert!(require_email("hero@localhost").is_err());
        assert!(require_email("@rpgforum.com").is_err());
        assert!(require_email("hero@.com").is_err());
        assert!(require_email("hero@rpgforum.").is_err());
        assert!(require_email("hero").is_err());
        assert_eq!(
            require_email(""),
            Err(ValidationError::EmptyField { field: "email" })
        );
    }

    #[test]
    fn test_field_and_message() {
        let err = ValidationError::EmptyField { field: "author" };
        assert_eq!(err.field(), "author");
        assert_eq!(err.user_message(), "Заполните это поле");
    }
}
