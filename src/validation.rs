//! Input validation for session data.

use crate::error::{HuddleError, Result};

/// Maximum allowed length for a title (elements, nudges, prompts).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum allowed length for free text such as descriptions and suggestions.
pub const MAX_TEXT_LENGTH: usize = 2_000;

/// Maximum allowed length for an ID.
pub const MAX_ID_LENGTH: usize = 50;

/// Maximum allowed length for a tag.
pub const MAX_TAG_LENGTH: usize = 50;

/// Characters forbidden in IDs.
const FORBIDDEN_ID_CHARS: &[char] = &['/', '\\', '\0'];

/// Validates a title.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(HuddleError::Validation("Title cannot be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(HuddleError::Validation(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

/// Validates free text (descriptions, reasons, suggestions, examples).
pub fn validate_text(field: &str, text: &str) -> Result<()> {
    if text.len() > MAX_TEXT_LENGTH {
        return Err(HuddleError::Validation(format!(
            "{} exceeds maximum length of {} characters",
            field, MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}

/// Validates an element, nudge or prompt ID.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(HuddleError::Validation("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(HuddleError::Validation(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.chars().any(char::is_whitespace) {
        return Err(HuddleError::Validation(
            "ID cannot contain whitespace".to_string(),
        ));
    }
    for c in FORBIDDEN_ID_CHARS {
        if id.contains(*c) {
            return Err(HuddleError::Validation(format!(
                "ID cannot contain '{}'",
                c.escape_default()
            )));
        }
    }
    Ok(())
}

/// Validates a tag name.
pub fn validate_tag(tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(HuddleError::Validation("Tag cannot be empty".to_string()));
    }
    if tag.len() > MAX_TAG_LENGTH {
        return Err(HuddleError::Validation(format!(
            "Tag exceeds maximum length of {} characters",
            MAX_TAG_LENGTH
        )));
    }
    Ok(())
}
