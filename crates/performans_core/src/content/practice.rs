//! Affirmation phrasing for the practice module.

use crate::error::InvalidInputError;

/// Turns an intention into the affirmation shown after submission.
pub fn affirmation(intention: &str) -> Result<String, InvalidInputError> {
    let intention = intention.trim();
    if intention.is_empty() {
        return Err(InvalidInputError::EmptyIntention);
    }
    Ok(format!(
        "My intention '{intention}' is manifesting in quantum reality in accordance with the Will of the Absolute."
    ))
}
