//! Special character section - checks against a fixed character set.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// The only characters that count as special. Other punctuation such as
/// `_`, `-`, `~`, `[` or `]` does not.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Checks for at least one character from [`SPECIAL_CHARS`].
pub fn special_chars_section(password: &SecretString) -> SectionResult {
    password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(c))
}
