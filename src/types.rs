//! Result types produced by the evaluator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of each criterion for a single password.
///
/// Serializes as an object with exactly the keys `length`, `digits`,
/// `uppercase`, `lowercase` and `special_chars`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Criteria {
    /// At least eight characters
    pub length: bool,
    /// At least one ASCII digit
    pub digits: bool,
    /// At least one uppercase letter
    pub uppercase: bool,
    /// At least one lowercase letter
    pub lowercase: bool,
    /// At least one character from the fixed special set
    pub special_chars: bool,
}

impl Criteria {
    /// Criterion names in serialization order.
    pub const NAMES: [&'static str; 5] =
        ["length", "digits", "uppercase", "lowercase", "special_chars"];

    /// Pairs each criterion name with its outcome.
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("length", self.length),
            ("digits", self.digits),
            ("uppercase", self.uppercase),
            ("lowercase", self.lowercase),
            ("special_chars", self.special_chars),
        ]
    }

    /// Number of satisfied criteria, 0 to 5.
    pub fn score(&self) -> usize {
        self.entries().iter().filter(|(_, met)| *met).count()
    }
}

/// Strength label derived from the number of satisfied criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum PasswordStrength {
    Strong,
    Moderate,
    Weak,
}

impl PasswordStrength {
    /// 5 is strong, 3 or 4 is moderate, anything lower is weak.
    pub fn from_score(score: usize) -> Self {
        match score {
            5.. => PasswordStrength::Strong,
            3 | 4 => PasswordStrength::Moderate,
            _ => PasswordStrength::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Strong => "Strong",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Weak => "Weak",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength label together with the criteria it was derived from.
///
/// Never carries the password itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PasswordResponse {
    pub strength: PasswordStrength,
    pub details: Criteria,
}
