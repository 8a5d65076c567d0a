//! Tag domain models and parameters.

use crate::{
    model::tag::{TagDto, TagTranslationDto, TagTranslationInputDto},
    server::{
        error::AppError,
        model::translation::{require, TranslationInput},
        util::slug::resolve_slug,
    },
};

/// A tag with the translations loaded for the current query.
#[derive(Debug, Clone)]
pub struct TagWithTranslations {
    pub tag: entity::tag::Model,
    pub translations: Vec<entity::tag_translation::Model>,
}

impl TagWithTranslations {
    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.tag.id,
            translations: self
                .translations
                .into_iter()
                .map(|t| TagTranslationDto {
                    language_code: t.language_code,
                    name: t.name,
                    slug: t.slug,
                })
                .collect(),
            created_at: self.tag.created_at,
            updated_at: self.tag.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TagTranslationParams {
    pub language_code: String,
    pub name: String,
    pub slug: String,
}

impl TagTranslationParams {
    pub fn from_dto(dto: TagTranslationInputDto) -> Self {
        Self {
            language_code: dto.language_code,
            name: dto.name,
            slug: dto.slug,
        }
    }
}

impl TranslationInput for TagTranslationParams {
    fn language_code(&self) -> &str {
        &self.language_code
    }

    fn normalize(&mut self) -> Result<(), AppError> {
        require("language_code", &mut self.language_code)?;
        require("name", &mut self.name)?;
        self.slug = resolve_slug(&self.slug, &self.name)?;
        Ok(())
    }

    fn slug(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

/// Filters for tag listings.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    /// Restricts the loaded translations to this language.
    pub language: Option<String>,
}
