use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr};
use std::collections::HashSet;

use crate::server::{
    data::category::CategoryRepository,
    error::{internal::InternalError, AppError},
    model::{
        category::{
            CategoryFilter, CategoryParams, CategoryTranslationParams, CategoryWithTranslations,
        },
        pagination::{Page, PageRequest, SortDirection},
    },
    service::{
        language::LanguageService,
        translatable::{TranslatableService, TranslatableStore},
    },
};

pub const CATEGORY_PAGE_SIZE: u64 = 20;

/// Translation hooks for categories, including the parent checks that keep the tree
/// acyclic.
pub struct CategoryStore;

impl CategoryStore {
    async fn require_parent(
        &self,
        txn: &DatabaseTransaction,
        parent_id: i32,
    ) -> Result<(), AppError> {
        if CategoryRepository::new(txn)
            .find_live(parent_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Parent category {} not found",
                parent_id
            )));
        }

        Ok(())
    }

    /// Walks up from `parent_id` and fails if `id` appears among its ancestors.
    async fn reject_cycle(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        parent_id: i32,
    ) -> Result<(), AppError> {
        if parent_id == id {
            return Err(AppError::Conflict(
                "A category cannot be its own parent".to_string(),
            ));
        }

        let repo = CategoryRepository::new(txn);
        let mut visited = HashSet::new();
        let mut current = Some(parent_id);

        while let Some(ancestor) = current {
            if ancestor == id {
                return Err(AppError::Conflict(format!(
                    "Category {} is a descendant of category {}",
                    parent_id, id
                )));
            }
            if !visited.insert(ancestor) {
                break;
            }

            current = repo.find_live(ancestor).await?.and_then(|c| c.parent_id);
        }

        Ok(())
    }
}

#[async_trait]
impl TranslatableStore for CategoryStore {
    type Create = CategoryParams;
    type Update = CategoryParams;
    type Translation = CategoryTranslationParams;

    const NAME: &'static str = "category";

    async fn validate_create(
        &self,
        txn: &DatabaseTransaction,
        params: &CategoryParams,
    ) -> Result<(), AppError> {
        if let Some(parent_id) = params.parent_id {
            self.require_parent(txn, parent_id).await?;
        }

        Ok(())
    }

    async fn validate_update(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        params: &CategoryParams,
    ) -> Result<(), AppError> {
        if let Some(parent_id) = params.parent_id {
            self.reject_cycle(txn, id, parent_id).await?;
            self.require_parent(txn, parent_id).await?;
        }

        Ok(())
    }

    async fn insert_base(
        &self,
        txn: &DatabaseTransaction,
        params: CategoryParams,
    ) -> Result<i32, AppError> {
        Ok(CategoryRepository::new(txn).create(params.parent_id).await?.id)
    }

    async fn update_base(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        params: CategoryParams,
    ) -> Result<(), AppError> {
        CategoryRepository::new(txn)
            .set_parent(id, params.parent_id)
            .await?;
        Ok(())
    }

    async fn is_live(&self, txn: &DatabaseTransaction, id: i32) -> Result<bool, DbErr> {
        Ok(CategoryRepository::new(txn).find_live(id).await?.is_some())
    }

    async fn save_translation(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        translation: &CategoryTranslationParams,
    ) -> Result<(), DbErr> {
        let repo = CategoryRepository::new(txn);

        match repo.find_translation(id, &translation.language_code).await? {
            Some(existing) => repo.update_translation(existing, translation).await?,
            None => repo.create_translation(id, translation).await?,
        };

        Ok(())
    }

    async fn slug_owner(
        &self,
        txn: &DatabaseTransaction,
        language_code: &str,
        slug: &str,
    ) -> Result<Option<i32>, DbErr> {
        CategoryRepository::new(txn)
            .slug_owner(language_code, slug)
            .await
    }

    async fn check_delete(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), AppError> {
        let repo = CategoryRepository::new(txn);

        if repo.has_children(id).await? {
            return Err(AppError::Conflict(format!(
                "Category {} still has child categories",
                id
            )));
        }

        if repo.is_linked(id).await? {
            return Err(AppError::Conflict(format!(
                "Category {} is still linked to articles",
                id
            )));
        }

        Ok(())
    }

    async fn delete_translations(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        CategoryRepository::new(txn).delete_translations(id).await
    }

    async fn tombstone(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        CategoryRepository::new(txn).tombstone(id).await
    }
}

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category with its translations and returns it with its parent
    pub async fn create(
        &self,
        params: CategoryParams,
        translations: Vec<CategoryTranslationParams>,
    ) -> Result<CategoryWithTranslations, AppError> {
        let id = TranslatableService::new(self.db, CategoryStore)
            .create(params, translations)
            .await?;

        CategoryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "category", id }.into())
    }

    /// Moves a category under `params.parent_id` and reconciles its translations
    pub async fn update(
        &self,
        id: i32,
        params: CategoryParams,
        translations: Vec<CategoryTranslationParams>,
    ) -> Result<CategoryWithTranslations, AppError> {
        TranslatableService::new(self.db, CategoryStore)
            .update(id, params, translations)
            .await?;

        self.get_by_id(id).await
    }

    /// Deletes a category without children or linked articles
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        TranslatableService::new(self.db, CategoryStore)
            .delete(id)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CategoryWithTranslations, AppError> {
        CategoryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn get_by_slug(
        &self,
        slug: &str,
        language: Option<String>,
    ) -> Result<CategoryWithTranslations, AppError> {
        let language = LanguageService::new(self.db).resolve_code(language).await?;

        CategoryRepository::new(self.db)
            .find_by_slug(slug, &language)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No category with slug '{}' in '{}'",
                    slug, language
                ))
            })
    }

    pub async fn get_paginated(
        &self,
        filter: CategoryFilter,
        direction: SortDirection,
        page: PageRequest,
    ) -> Result<Page<CategoryWithTranslations>, AppError> {
        let (categories, total) = CategoryRepository::new(self.db)
            .get_paginated(&filter, direction, page)
            .await?;

        Ok(Page::new(categories, total, page))
    }
}
