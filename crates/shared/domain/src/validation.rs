//! Field-level business rules.

use crate::constants::{
    DELETABLE_ID_MARKER, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, MSG_ID_MARKER,
};
use crate::error::{DomainError, DomainResult};

/// Check the composite password rule.
///
/// 8 to 12 characters, none of them a line terminator, with at least one
/// ASCII lowercase letter, one ASCII uppercase letter, one ASCII digit and
/// one character outside `[A-Za-z0-9]`.
pub fn validate_password(password: &str) -> bool {
    let length = password.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return false;
    }

    if password.chars().any(is_line_terminator) {
        return false;
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    has_lower && has_upper && has_digit && has_special
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Only ids whose second character is the marker may be deleted.
pub fn ensure_deletable_id(id: &str) -> DomainResult<()> {
    match id.chars().nth(1) {
        Some(DELETABLE_ID_MARKER) => Ok(()),
        _ => Err(DomainError::not_found(MSG_ID_MARKER)),
    }
}
