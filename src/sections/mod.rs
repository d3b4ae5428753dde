//! Password criteria sections
//!
//! Each section checks one independent property of a password. Sections are
//! total: any string, including the empty one, is a valid input.

mod length;
mod special;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use special::{special_chars_section, SPECIAL_CHARS};
pub use variety::{digits_section, lowercase_section, uppercase_section};

/// Result of a single criterion check.
/// - `true` - criterion satisfied
/// - `false` - criterion not satisfied
pub type SectionResult = bool;
