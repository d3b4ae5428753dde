//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Minimum number of characters for the length criterion.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length requirement.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().count() >= MIN_LENGTH
}
