use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    pagination::{PageRequest, SortDirection},
    tag::{TagFilter, TagTranslationParams, TagWithTranslations},
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a tag by ID unless it has been tombstoned
    pub async fn find_live(&self, id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(id)
            .filter(entity::tag::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets a live tag with every translation
    pub async fn get_by_id(&self, id: i32) -> Result<Option<TagWithTranslations>, DbErr> {
        let Some(tag) = self.find_live(id).await? else {
            return Ok(None);
        };

        Ok(self.with_translations(vec![tag], None).await?.pop())
    }

    /// Gets the live tag whose slug matches in `language_code`
    ///
    /// Only the translation in that language is loaded.
    pub async fn find_by_slug(
        &self,
        slug: &str,
        language_code: &str,
    ) -> Result<Option<TagWithTranslations>, DbErr> {
        let Some(tag_id) = self.slug_owner(language_code, slug).await? else {
            return Ok(None);
        };
        let Some(tag) = self.find_live(tag_id).await? else {
            return Ok(None);
        };

        Ok(self
            .with_translations(vec![tag], Some(language_code))
            .await?
            .pop())
    }

    /// Gets a page of live tags ordered by creation time
    ///
    /// # Returns
    /// - `Ok((tags, total))` - Tags for the requested page and the total across all pages
    pub async fn get_paginated(
        &self,
        filter: &TagFilter,
        direction: SortDirection,
        page: PageRequest,
    ) -> Result<(Vec<TagWithTranslations>, u64), DbErr> {
        let paginator = entity::prelude::Tag::find()
            .filter(entity::tag::Column::DeletedAt.is_null())
            .order_by(entity::tag::Column::CreatedAt, direction.order())
            .order_by(entity::tag::Column::Id, direction.order())
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let tags = paginator.fetch_page(page.index()).await?;

        let tags = self
            .with_translations(tags, filter.language.as_deref())
            .await?;

        Ok((tags, total))
    }

    /// Loads live tags by ID keyed by tag ID, with translations limited to `language`
    pub async fn get_many(
        &self,
        ids: Vec<i32>,
        language: Option<&str>,
    ) -> Result<HashMap<i32, TagWithTranslations>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let tags = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids))
            .filter(entity::tag::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(self
            .with_translations(tags, language)
            .await?
            .into_iter()
            .map(|t| (t.tag.id, t))
            .collect())
    }

    /// Counts how many of the given IDs refer to live tags
    pub async fn count_live(&self, ids: &[i32]) -> Result<u64, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.to_vec()))
            .filter(entity::tag::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    async fn with_translations(
        &self,
        tags: Vec<entity::tag::Model>,
        language: Option<&str>,
    ) -> Result<Vec<TagWithTranslations>, DbErr> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = tags.iter().map(|t| t.id).collect();
        let mut query = entity::prelude::TagTranslation::find()
            .filter(entity::tag_translation::Column::TagId.is_in(ids));
        if let Some(language) = language {
            query = query.filter(entity::tag_translation::Column::LanguageCode.eq(language));
        }

        let mut translations: HashMap<i32, Vec<entity::tag_translation::Model>> = HashMap::new();
        for translation in query
            .order_by_asc(entity::tag_translation::Column::Id)
            .all(self.db)
            .await?
        {
            translations
                .entry(translation.tag_id)
                .or_default()
                .push(translation);
        }

        Ok(tags
            .into_iter()
            .map(|tag| TagWithTranslations {
                translations: translations.remove(&tag.id).unwrap_or_default(),
                tag,
            })
            .collect())
    }

    pub async fn create(&self) -> Result<entity::tag::Model, DbErr> {
        let now = Utc::now();

        entity::tag::ActiveModel {
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Bumps `updated_at` after a translation change
    pub async fn touch(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Tag::update_many()
            .col_expr(entity::tag::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::tag::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn tombstone(&self, id: i32) -> Result<(), DbErr> {
        let now = Utc::now();

        entity::prelude::Tag::update_many()
            .col_expr(entity::tag::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(entity::tag::Column::UpdatedAt, Expr::value(now))
            .filter(entity::tag::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether any article links to the tag
    pub async fn is_linked(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ArticleTag::find()
            .filter(entity::article_tag::Column::TagId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_translation(
        &self,
        tag_id: i32,
        language_code: &str,
    ) -> Result<Option<entity::tag_translation::Model>, DbErr> {
        entity::prelude::TagTranslation::find()
            .filter(entity::tag_translation::Column::TagId.eq(tag_id))
            .filter(entity::tag_translation::Column::LanguageCode.eq(language_code))
            .one(self.db)
            .await
    }

    /// Returns the ID of the tag already using `slug` in the language, if any
    pub async fn slug_owner(&self, language_code: &str, slug: &str) -> Result<Option<i32>, DbErr> {
        Ok(entity::prelude::TagTranslation::find()
            .filter(entity::tag_translation::Column::LanguageCode.eq(language_code))
            .filter(entity::tag_translation::Column::Slug.eq(slug))
            .one(self.db)
            .await?
            .map(|t| t.tag_id))
    }

    pub async fn create_translation(
        &self,
        tag_id: i32,
        params: &TagTranslationParams,
    ) -> Result<entity::tag_translation::Model, DbErr> {
        let now = Utc::now();

        entity::tag_translation::ActiveModel {
            tag_id: ActiveValue::Set(tag_id),
            language_code: ActiveValue::Set(params.language_code.clone()),
            name: ActiveValue::Set(params.name.clone()),
            slug: ActiveValue::Set(params.slug.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update_translation(
        &self,
        translation: entity::tag_translation::Model,
        params: &TagTranslationParams,
    ) -> Result<entity::tag_translation::Model, DbErr> {
        let mut active_model: entity::tag_translation::ActiveModel = translation.into();
        active_model.name = ActiveValue::Set(params.name.clone());
        active_model.slug = ActiveValue::Set(params.slug.clone());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn delete_translations(&self, tag_id: i32) -> Result<(), DbErr> {
        entity::prelude::TagTranslation::delete_many()
            .filter(entity::tag_translation::Column::TagId.eq(tag_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
