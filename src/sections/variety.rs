//! Character variety sections - digits, uppercase and lowercase letters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks for at least one ASCII decimal digit.
pub fn digits_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Checks for at least one uppercase letter.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().any(|c| c.is_uppercase())
}

/// Checks for at least one lowercase letter.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().any(|c| c.is_lowercase())
}
