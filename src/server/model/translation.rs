//! Shared handling of per-language translation input.

use std::collections::HashSet;

use crate::server::error::AppError;

/// Incoming translation for one language of a translatable entity.
pub trait TranslationInput: Send + Sync {
    fn language_code(&self) -> &str;

    /// Trims the input, checks required fields and fills a blank slug from the
    /// display text.
    fn normalize(&mut self) -> Result<(), AppError>;

    /// Slug to check for uniqueness within the language, if this kind of translation
    /// has one.
    fn slug(&self) -> Option<&str> {
        None
    }
}

/// Normalizes every translation and rejects two entries for the same language.
pub fn prepare<T: TranslationInput>(translations: &mut [T]) -> Result<(), AppError> {
    let mut seen = HashSet::new();

    for translation in translations.iter_mut() {
        translation.normalize()?;

        if !seen.insert(translation.language_code().to_string()) {
            return Err(AppError::BadRequest(format!(
                "Duplicate translation for language '{}'",
                translation.language_code()
            )));
        }
    }

    Ok(())
}

/// Trims `value` in place and fails when it is left empty.
pub fn require(field: &str, value: &mut String) -> Result<(), AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
    Ok(())
}
