//! Validation rules for catalog entities (publishers, categories, games).
//!
//! A single text-field validator backs every mutable text field; per-field
//! wrappers fix the field label and minimum length. Handlers call these
//! before persistence, so a row never reaches the database unvalidated.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Minimum length for a publisher or category name.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum length for a game title.
pub const MIN_TITLE_LEN: usize = 2;

/// Minimum length for a description, when one is provided.
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Inclusive star-rating bounds.
pub const MIN_STAR_RATING: f64 = 0.0;
pub const MAX_STAR_RATING: f64 = 5.0;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a text field against a minimum trimmed length.
///
/// - Absent value with `allow_missing` set passes.
/// - Absent value otherwise fails with "{field} cannot be empty".
/// - A value whose trimmed length is below `min_len` fails with
///   "{field} must be at least {min_len} characters".
///
/// The value itself is never trimmed or rewritten; callers persist it as
/// received.
pub fn validate_text_field(
    field: &str,
    value: Option<&str>,
    min_len: usize,
    allow_missing: bool,
) -> Result<(), CoreError> {
    let Some(value) = value else {
        if allow_missing {
            return Ok(());
        }
        return Err(CoreError::Validation(format!("{field} cannot be empty")));
    };

    if value.trim().chars().count() < min_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at least {min_len} characters"
        )));
    }
    Ok(())
}

/// Validate a publisher name: required, trimmed length >= 2.
pub fn validate_publisher_name(name: &str) -> Result<(), CoreError> {
    validate_text_field("Publisher name", Some(name), MIN_NAME_LEN, false)
}

/// Validate a category name: required, trimmed length >= 2.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    validate_text_field("Category name", Some(name), MIN_NAME_LEN, false)
}

/// Validate a game title: required, trimmed length >= 2.
pub fn validate_game_title(title: &str) -> Result<(), CoreError> {
    validate_text_field("Title", Some(title), MIN_TITLE_LEN, false)
}

/// Validate an optional description: when present, trimmed length >= 10.
pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    validate_text_field("Description", description, MIN_DESCRIPTION_LEN, true)
}

/// Validate an optional star rating: when present, within 0.0..=5.0.
pub fn validate_star_rating(rating: Option<f64>) -> Result<(), CoreError> {
    let Some(rating) = rating else {
        return Ok(());
    };
    if !(MIN_STAR_RATING..=MAX_STAR_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Star rating must be between {MIN_STAR_RATING} and {MAX_STAR_RATING}"
        )));
    }
    Ok(())
}
