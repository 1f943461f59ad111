//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a display name contains at least one non-whitespace character.
///
/// # Examples
///
/// ```ignore
/// validate_not_blank("Team Liquid") // Ok
/// validate_not_blank("   ")         // Err - whitespace only
/// validate_not_blank("")            // Err - empty
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("value must not be empty or whitespace only".into());
        return Err(err);
    }

    Ok(())
}
