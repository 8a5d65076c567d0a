//! Category domain models and parameters.
//!
//! Categories form a tree through a nullable `parent_id`. The service layer keeps the
//! tree acyclic; these types only carry data between layers.

use crate::{
    model::category::{CategoryDto, CategoryTranslationDto, CategoryTranslationInputDto},
    server::{
        error::AppError,
        model::translation::{require, TranslationInput},
        util::slug::resolve_slug,
    },
};

/// A category with its loaded translations and, when requested, its parent.
#[derive(Debug, Clone)]
pub struct CategoryWithTranslations {
    pub category: entity::category::Model,
    pub translations: Vec<entity::category_translation::Model>,
    pub parent: Option<Box<CategoryWithTranslations>>,
}

impl CategoryWithTranslations {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.category.id,
            parent_id: self.category.parent_id,
            translations: self
                .translations
                .into_iter()
                .map(|t| CategoryTranslationDto {
                    language_code: t.language_code,
                    name: t.name,
                    slug: t.slug,
                    description: t.description,
                })
                .collect(),
            parent: self.parent.map(|p| Box::new(p.into_dto())),
            created_at: self.category.created_at,
            updated_at: self.category.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryTranslationParams {
    pub language_code: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl CategoryTranslationParams {
    pub fn from_dto(dto: CategoryTranslationInputDto) -> Self {
        Self {
            language_code: dto.language_code,
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
        }
    }
}

impl TranslationInput for CategoryTranslationParams {
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

/// Base fields written on create and update.
#[derive(Debug, Clone, Default)]
pub struct CategoryParams {
    pub parent_id: Option<i32>,
}

/// Filters for category listings.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub language: Option<String>,
    pub parent_id: Option<i32>,
    /// Only categories without a parent.
    pub only_parents: bool,
    /// Embed each category's parent with its translations.
    pub include_parent: bool,
}
