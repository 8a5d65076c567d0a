use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    category::{CategoryFilter, CategoryTranslationParams, CategoryWithTranslations},
    pagination::{PageRequest, SortDirection},
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a category by ID unless it has been tombstoned
    pub async fn find_live(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id)
            .filter(entity::category::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets a live category with every translation and its parent
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CategoryWithTranslations>, DbErr> {
        let Some(category) = self.find_live(id).await? else {
            return Ok(None);
        };

        Ok(self
            .with_translations(vec![category], None, true)
            .await?
            .pop())
    }

    /// Gets the live category whose slug matches in `language_code`, with its parent
    pub async fn find_by_slug(
        &self,
        slug: &str,
        language_code: &str,
    ) -> Result<Option<CategoryWithTranslations>, DbErr> {
        let Some(category_id) = self.slug_owner(language_code, slug).await? else {
            return Ok(None);
        };
        let Some(category) = self.find_live(category_id).await? else {
            return Ok(None);
        };

        Ok(self
            .with_translations(vec![category], Some(language_code), true)
            .await?
            .pop())
    }

    /// Gets a page of live categories ordered by creation time
    ///
    /// `only_parents` restricts the page to top-level categories and `parent_id` to the
    /// direct children of one category.
    pub async fn get_paginated(
        &self,
        filter: &CategoryFilter,
        direction: SortDirection,
        page: PageRequest,
    ) -> Result<(Vec<CategoryWithTranslations>, u64), DbErr> {
        let mut query = entity::prelude::Category::find()
            .filter(entity::category::Column::DeletedAt.is_null());

        if filter.only_parents {
            query = query.filter(entity::category::Column::ParentId.is_null());
        }
        if let Some(parent_id) = filter.parent_id {
            query = query.filter(entity::category::Column::ParentId.eq(parent_id));
        }

        let paginator = query
            .order_by(entity::category::Column::CreatedAt, direction.order())
            .order_by(entity::category::Column::Id, direction.order())
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let categories = paginator.fetch_page(page.index()).await?;

        let categories = self
            .with_translations(
                categories,
                filter.language.as_deref(),
                filter.include_parent,
            )
            .await?;

        Ok((categories, total))
    }

    /// Loads live categories by ID keyed by category ID, with translations limited to
    /// `language`
    pub async fn get_many(
        &self,
        ids: Vec<i32>,
        language: Option<&str>,
    ) -> Result<HashMap<i32, CategoryWithTranslations>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let categories = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids))
            .filter(entity::category::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(self
            .with_translations(categories, language, false)
            .await?
            .into_iter()
            .map(|c| (c.category.id, c))
            .collect())
    }

    /// Counts how many of the given IDs refer to live categories
    pub async fn count_live(&self, ids: &[i32]) -> Result<u64, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids.to_vec()))
            .filter(entity::category::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    async fn with_translations(
        &self,
        categories: Vec<entity::category::Model>,
        language: Option<&str>,
        include_parent: bool,
    ) -> Result<Vec<CategoryWithTranslations>, DbErr> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids: Vec<i32> = categories.iter().map(|c| c.id).collect();

        let mut parents: HashMap<i32, entity::category::Model> = HashMap::new();
        if include_parent {
            let parent_ids: Vec<i32> = categories.iter().filter_map(|c| c.parent_id).collect();
            if !parent_ids.is_empty() {
                parents = entity::prelude::Category::find()
                    .filter(entity::category::Column::Id.is_in(parent_ids))
                    .filter(entity::category::Column::DeletedAt.is_null())
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|p| (p.id, p))
                    .collect();
                ids.extend(parents.keys().copied());
            }
        }

        let mut query = entity::prelude::CategoryTranslation::find()
            .filter(entity::category_translation::Column::CategoryId.is_in(ids));
        if let Some(language) = language {
            query =
                query.filter(entity::category_translation::Column::LanguageCode.eq(language));
        }

        let mut translations: HashMap<i32, Vec<entity::category_translation::Model>> =
            HashMap::new();
        for translation in query
            .order_by_asc(entity::category_translation::Column::Id)
            .all(self.db)
            .await?
        {
            translations
                .entry(translation.category_id)
                .or_default()
                .push(translation);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let parent = category
                    .parent_id
                    .and_then(|id| parents.get(&id))
                    .map(|parent| {
                        Box::new(CategoryWithTranslations {
                            category: parent.clone(),
                            translations: translations.get(&parent.id).cloned().unwrap_or_default(),
                            parent: None,
                        })
                    });

                CategoryWithTranslations {
                    translations: translations.get(&category.id).cloned().unwrap_or_default(),
                    category,
                    parent,
                }
            })
            .collect())
    }

    /// Checks whether any live category has this one as its parent
    pub async fn has_children(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find()
            .filter(entity::category::Column::ParentId.eq(id))
            .filter(entity::category::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any article links to the category
    pub async fn is_linked(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ArticleCategory::find()
            .filter(entity::article_category::Column::CategoryId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, parent_id: Option<i32>) -> Result<entity::category::Model, DbErr> {
        let now = Utc::now();

        entity::category::ActiveModel {
            parent_id: ActiveValue::Set(parent_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn set_parent(&self, id: i32, parent_id: Option<i32>) -> Result<(), DbErr> {
        entity::prelude::Category::update_many()
            .col_expr(entity::category::Column::ParentId, Expr::value(parent_id))
            .col_expr(entity::category::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::category::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn tombstone(&self, id: i32) -> Result<(), DbErr> {
        let now = Utc::now();

        entity::prelude::Category::update_many()
            .col_expr(entity::category::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(entity::category::Column::UpdatedAt, Expr::value(now))
            .filter(entity::category::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_translation(
        &self,
        category_id: i32,
        language_code: &str,
    ) -> Result<Option<entity::category_translation::Model>, DbErr> {
        entity::prelude::CategoryTranslation::find()
            .filter(entity::category_translation::Column::CategoryId.eq(category_id))
            .filter(entity::category_translation::Column::LanguageCode.eq(language_code))
            .one(self.db)
            .await
    }

    /// Returns the ID of the category already using `slug` in the language, if any
    pub async fn slug_owner(&self, language_code: &str, slug: &str) -> Result<Option<i32>, DbErr> {
        Ok(entity::prelude::CategoryTranslation::find()
            .filter(entity::category_translation::Column::LanguageCode.eq(language_code))
            .filter(entity::category_translation::Column::Slug.eq(slug))
            .one(self.db)
            .await?
            .map(|t| t.category_id))
    }

    pub async fn create_translation(
        &self,
        category_id: i32,
        params: &CategoryTranslationParams,
    ) -> Result<entity::category_translation::Model, DbErr> {
        let now = Utc::now();

        entity::category_translation::ActiveModel {
            category_id: ActiveValue::Set(category_id),
            language_code: ActiveValue::Set(params.language_code.clone()),
            name: ActiveValue::Set(params.name.clone()),
            slug: ActiveValue::Set(params.slug.clone()),
            description: ActiveValue::Set(params.description.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update_translation(
        &self,
        translation: entity::category_translation::Model,
        params: &CategoryTranslationParams,
    ) -> Result<entity::category_translation::Model, DbErr> {
        let mut active_model: entity::category_translation::ActiveModel = translation.into();
        active_model.name = ActiveValue::Set(params.name.clone());
        active_model.slug = ActiveValue::Set(params.slug.clone());
        active_model.description = ActiveValue::Set(params.description.clone());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn delete_translations(&self, category_id: i32) -> Result<(), DbErr> {
        entity::prelude::CategoryTranslation::delete_many()
            .filter(entity::category_translation::Column::CategoryId.eq(category_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
