use crate::server::error::AppError;

/// Converts human-readable text into a URL-safe slug.
///
/// Lowercases, replaces whitespace and punctuation runs with single hyphens and trims
/// hyphens from both ends.
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

/// Returns `slug` trimmed, or a slug derived from `source` when `slug` is blank.
///
/// Fails when neither yields a non-empty slug.
pub fn resolve_slug(slug: &str, source: &str) -> Result<String, AppError> {
    let resolved = match slug.trim() {
        "" => slugify(source),
        given => given.to_string(),
    };

    if resolved.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Cannot derive a slug from '{}'",
            source
        )));
    }

    Ok(resolved)
}
