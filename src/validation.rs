//! Request-boundary validation for candidate passwords.

use secrecy::SecretString;
use thiserror::Error;

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_CHARS: usize = 1;
/// Maximum accepted password length in characters.
pub const MAX_PASSWORD_CHARS: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Query parameter 'password' is required")]
    Missing,
    #[error("Password must be between {min} and {max} characters, got {actual}")]
    Length {
        min: usize,
        max: usize,
        actual: usize,
    },
    #[error("Password cannot be empty or whitespace")]
    Blank,
    #[error("Query string could not be parsed")]
    Malformed,
}

impl ValidationError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Missing => "MISSING_PARAMETER",
            ValidationError::Length { .. } => "LENGTH_OUT_OF_RANGE",
            ValidationError::Blank => "BLANK_PASSWORD",
            ValidationError::Malformed => "INVALID_QUERY",
        }
    }
}

/// Whitespace for the blank check: Unicode `White_Space` plus the
/// information separators U+001C..=U+001F.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Validates a raw password parameter.
///
/// Checks run in order: presence, length in characters, then non-blank.
/// The blank check trims whitespace, but the returned secret holds the
/// original, untrimmed value.
///
/// # Errors
///
/// Returns error if:
/// - The parameter is absent
/// - The length is outside `MIN_PASSWORD_CHARS..=MAX_PASSWORD_CHARS`
/// - The value is whitespace only
pub fn validate_password(raw: Option<String>) -> Result<SecretString, ValidationError> {
    let raw = raw.ok_or(ValidationError::Missing)?;

    let actual = raw.chars().count();
    if !(MIN_PASSWORD_CHARS..=MAX_PASSWORD_CHARS).contains(&actual) {
        return Err(ValidationError::Length {
            min: MIN_PASSWORD_CHARS,
            max: MAX_PASSWORD_CHARS,
            actual,
        });
    }

    if raw.trim_matches(is_blank_char).is_empty() {
        return Err(ValidationError::Blank);
    }

    Ok(SecretString::new(raw.into_boxed_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_validate_missing() {
        assert_eq!(validate_password(None).unwrap_err(), ValidationError::Missing);
    }

    #[test]
    fn test_validate_empty_is_length_error() {
        let err = validate_password(Some(String::new())).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Length {
                min: 1,
                max: 100,
                actual: 0
            }
        );
        assert_eq!(err.code(), "LENGTH_OUT_OF_RANGE");
    }

    #[test]
    fn test_validate_too_long() {
        let err = validate_password(Some("a".repeat(101))).unwrap_err();
        assert!(matches!(err, ValidationError::Length { actual: 101, .. }));
    }

    #[test]
    fn test_validate_max_length_accepted() {
        assert!(validate_password(Some("a".repeat(100))).is_ok());
    }

    #[test]
    fn test_validate_length_counts_characters() {
        // 100 characters, 200 bytes
        assert!(validate_password(Some("é".repeat(100))).is_ok());
    }

    #[test]
    fn test_validate_blank() {
        let err = validate_password(Some("   ".to_string())).unwrap_err();
        assert_eq!(err, ValidationError::Blank);
        assert_eq!(err.code(), "BLANK_PASSWORD");
    }

    #[test]
    fn test_validate_blank_mixed_whitespace() {
        let err = validate_password(Some(" \t\n ".to_string())).unwrap_err();
        assert_eq!(err, ValidationError::Blank);
    }

    #[test]
    fn test_validate_blank_information_separators() {
        for sep in ["\u{1c}", "\u{1d}", "\u{1e}", "\u{1f}", " \u{1f}\t"] {
            let err = validate_password(Some(sep.to_string())).unwrap_err();
            assert_eq!(err, ValidationError::Blank, "{sep:?} should be blank");
        }
    }

    #[test]
    fn test_validate_separator_with_content_accepted() {
        let secret = validate_password(Some("\u{1f}x\u{1f}".to_string())).unwrap();
        assert_eq!(secret.expose_secret(), "\u{1f}x\u{1f}");
    }

    #[test]
    fn test_validate_keeps_original_value() {
        let secret = validate_password(Some("  padded  ".to_string())).unwrap();
        assert_eq!(secret.expose_secret(), "  padded  ");
    }

    #[test]
    fn test_error_messages_do_not_echo_input() {
        let err = validate_password(Some("x".repeat(150))).unwrap_err();
        assert!(!err.to_string().contains("xxx"));
    }
}
