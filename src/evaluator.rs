//! Password strength evaluator - criteria evaluation and classification.

use secrecy::SecretString;

use crate::sections::{
    digits_section, length_section, lowercase_section, special_chars_section, uppercase_section,
};
use crate::types::{Criteria, PasswordResponse, PasswordStrength};

/// Evaluates every criterion against the full password.
///
/// Total over any string: an empty password simply fails all five criteria.
pub fn evaluate(password: &SecretString) -> Criteria {
    Criteria {
        length: length_section(password),
        digits: digits_section(password),
        uppercase: uppercase_section(password),
        lowercase: lowercase_section(password),
        special_chars: special_chars_section(password),
    }
}

/// Reduces criteria to a strength label based on how many are satisfied.
pub fn classify(criteria: &Criteria) -> PasswordStrength {
    PasswordStrength::from_score(criteria.score())
}

/// Evaluates and classifies a password in one step.
///
/// # Returns
/// A `PasswordResponse` with the strength label and per-criterion details.
pub fn check_password(password: &SecretString) -> PasswordResponse {
    let details = evaluate(password);
    PasswordResponse {
        strength: classify(&details),
        details,
    }
}
