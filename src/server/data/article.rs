use chrono::{DateTime, Utc};
use entity::article::ArticleStatus;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::{BTreeSet, HashMap};

use crate::server::{
    data::{category::CategoryRepository, tag::TagRepository},
    model::{
        article::{
            ArticleFilter, ArticleTranslationParams, ArticleWithRelations, CreateArticleParams,
            PublishedQuery,
        },
        pagination::PageRequest,
    },
};

pub struct ArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds an article by ID unless it has been tombstoned
    pub async fn find_live(&self, id: i32) -> Result<Option<entity::article::Model>, DbErr> {
        entity::prelude::Article::find_by_id(id)
            .filter(entity::article::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets a live article with its author, every translation, tags and categories
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ArticleWithRelations>, DbErr> {
        let Some(article) = self.find_live(id).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![article], None).await?.pop())
    }

    /// Gets a page of live articles matching the filter
    ///
    /// A language filter keeps only articles translated into that language and loads
    /// only that language's translations. Rows are ordered by the requested column and
    /// then by ID in the same direction so pages never overlap.
    ///
    /// # Returns
    /// - `Ok((articles, total))` - Articles for the requested page and the total across
    ///   all pages
    pub async fn get_paginated(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> Result<(Vec<ArticleWithRelations>, u64), DbErr> {
        let mut query = entity::prelude::Article::find()
            .filter(entity::article::Column::DeletedAt.is_null());

        if let Some(status) = filter.status {
            query = query.filter(entity::article::Column::Status.eq(status));
        }

        if let Some(language) = &filter.language {
            query = query.filter(
                entity::article::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::article_translation::Column::ArticleId)
                        .from(entity::article_translation::Entity)
                        .and_where(
                            entity::article_translation::Column::LanguageCode.eq(language.as_str()),
                        )
                        .to_owned(),
                ),
            );
        }

        if let Some(tag_id) = filter.tag_id {
            query = query.filter(
                entity::article::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::article_tag::Column::ArticleId)
                        .from(entity::article_tag::Entity)
                        .and_where(entity::article_tag::Column::TagId.eq(tag_id))
                        .to_owned(),
                ),
            );
        }

        if let Some(category_id) = filter.category_id {
            query = query.filter(
                entity::article::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::article_category::Column::ArticleId)
                        .from(entity::article_category::Entity)
                        .and_where(entity::article_category::Column::CategoryId.eq(category_id))
                        .to_owned(),
                ),
            );
        }

        let order = filter.direction.order();
        let paginator = query
            .order_by(filter.sort.column(), order.clone())
            .order_by(entity::article::Column::Id, order)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let articles = paginator.fetch_page(page.index()).await?;

        let articles = self
            .with_relations(articles, filter.language.as_deref())
            .await?;

        Ok((articles, total))
    }

    /// Gets published articles for the featured, latest and by-category listings
    ///
    /// Ordered by `published_at` descending, newest first, with translations limited to
    /// the query's language.
    pub async fn get_published(
        &self,
        query: &PublishedQuery,
    ) -> Result<Vec<ArticleWithRelations>, DbErr> {
        let mut select = entity::prelude::Article::find()
            .filter(entity::article::Column::Status.eq(ArticleStatus::Published))
            .filter(entity::article::Column::DeletedAt.is_null());

        if query.featured_only {
            select = select.filter(entity::article::Column::IsFeatured.eq(true));
        }

        if let Some(slug) = &query.category_slug {
            let categories = Query::select()
                .column(entity::category_translation::Column::CategoryId)
                .from(entity::category_translation::Entity)
                .and_where(entity::category_translation::Column::Slug.eq(slug.as_str()))
                .and_where(
                    entity::category_translation::Column::LanguageCode
                        .eq(query.language.as_str()),
                )
                .to_owned();

            select = select.filter(
                entity::article::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::article_category::Column::ArticleId)
                        .from(entity::article_category::Entity)
                        .and_where(
                            entity::article_category::Column::CategoryId.in_subquery(categories),
                        )
                        .to_owned(),
                ),
            );
        }

        let articles = select
            .order_by_desc(entity::article::Column::PublishedAt)
            .order_by_desc(entity::article::Column::Id)
            .limit(query.limit)
            .all(self.db)
            .await?;

        self.with_relations(articles, Some(&query.language)).await
    }

    /// Finds a live, published article by the slug of one of its translations
    ///
    /// Only translations in `language_code` are loaded.
    pub async fn find_published_by_slug(
        &self,
        slug: &str,
        language_code: &str,
    ) -> Result<Option<ArticleWithRelations>, DbErr> {
        let Some(translation) = entity::prelude::ArticleTranslation::find()
            .filter(entity::article_translation::Column::Slug.eq(slug))
            .filter(entity::article_translation::Column::LanguageCode.eq(language_code))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let article = entity::prelude::Article::find_by_id(translation.article_id)
            .filter(entity::article::Column::Status.eq(ArticleStatus::Published))
            .filter(entity::article::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        let Some(article) = article else {
            return Ok(None);
        };

        Ok(self
            .with_relations(vec![article], Some(language_code))
            .await?
            .pop())
    }

    /// Adds one to the article's view count in a single statement
    pub async fn increment_view_count(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Article::update_many()
            .col_expr(
                entity::article::Column::ViewCount,
                Expr::col(entity::article::Column::ViewCount).add(1),
            )
            .filter(entity::article::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Attaches authors, translations, tags and categories to the given articles
    ///
    /// Each relation is loaded with one query for the whole batch. Tag and category
    /// translations follow the same language restriction as article translations.
    async fn with_relations(
        &self,
        articles: Vec<entity::article::Model>,
        language: Option<&str>,
    ) -> Result<Vec<ArticleWithRelations>, DbErr> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();

        // Fetch translations in one query
        let mut translation_query = entity::prelude::ArticleTranslation::find()
            .filter(entity::article_translation::Column::ArticleId.is_in(ids.clone()));
        if let Some(language) = language {
            translation_query = translation_query
                .filter(entity::article_translation::Column::LanguageCode.eq(language));
        }
        let mut translations: HashMap<i32, Vec<entity::article_translation::Model>> =
            HashMap::new();
        for translation in translation_query
            .order_by_asc(entity::article_translation::Column::Id)
            .all(self.db)
            .await?
        {
            translations
                .entry(translation.article_id)
                .or_default()
                .push(translation);
        }

        // Fetch authors in one query
        let author_ids: Vec<i32> = articles
            .iter()
            .map(|a| a.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let authors: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(author_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        // Fetch tag and category links
        let tag_links = entity::prelude::ArticleTag::find()
            .filter(entity::article_tag::Column::ArticleId.is_in(ids.clone()))
            .order_by_asc(entity::article_tag::Column::TagId)
            .all(self.db)
            .await?;
        let category_links = entity::prelude::ArticleCategory::find()
            .filter(entity::article_category::Column::ArticleId.is_in(ids))
            .order_by_asc(entity::article_category::Column::CategoryId)
            .all(self.db)
            .await?;

        let tags = TagRepository::new(self.db)
            .get_many(tag_links.iter().map(|l| l.tag_id).collect(), language)
            .await?;
        let categories = CategoryRepository::new(self.db)
            .get_many(
                category_links.iter().map(|l| l.category_id).collect(),
                language,
            )
            .await?;

        Ok(articles
            .into_iter()
            .map(|article| {
                let article_tags = tag_links
                    .iter()
                    .filter(|l| l.article_id == article.id)
                    .filter_map(|l| tags.get(&l.tag_id).cloned())
                    .collect();
                let article_categories = category_links
                    .iter()
                    .filter(|l| l.article_id == article.id)
                    .filter_map(|l| categories.get(&l.category_id).cloned())
                    .collect();

                ArticleWithRelations {
                    author: authors.get(&article.user_id).cloned(),
                    translations: translations.remove(&article.id).unwrap_or_default(),
                    tags: article_tags,
                    categories: article_categories,
                    article,
                }
            })
            .collect())
    }

    pub async fn create(
        &self,
        params: &CreateArticleParams,
        published_at: Option<DateTime<Utc>>,
    ) -> Result<entity::article::Model, DbErr> {
        let now = Utc::now();

        entity::article::ActiveModel {
            user_id: ActiveValue::Set(params.author_id),
            status: ActiveValue::Set(params.status),
            published_at: ActiveValue::Set(published_at),
            featured_image: ActiveValue::Set(params.featured_image.clone()),
            view_count: ActiveValue::Set(0),
            is_featured: ActiveValue::Set(params.is_featured),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Writes the base fields of an already-loaded article
    pub async fn update(
        &self,
        article: entity::article::Model,
        status: ArticleStatus,
        published_at: Option<DateTime<Utc>>,
        featured_image: Option<String>,
        is_featured: bool,
    ) -> Result<entity::article::Model, DbErr> {
        let mut active_model: entity::article::ActiveModel = article.into();
        active_model.status = ActiveValue::Set(status);
        active_model.published_at = ActiveValue::Set(published_at);
        active_model.featured_image = ActiveValue::Set(featured_image);
        active_model.is_featured = ActiveValue::Set(is_featured);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Replaces the article's tag links with `tag_ids`
    pub async fn replace_tags(&self, article_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::ArticleTag::delete_many()
            .filter(entity::article_tag::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        for tag_id in unique(tag_ids) {
            entity::article_tag::ActiveModel {
                article_id: ActiveValue::Set(article_id),
                tag_id: ActiveValue::Set(tag_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Replaces the article's category links with `category_ids`
    pub async fn replace_categories(
        &self,
        article_id: i32,
        category_ids: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::ArticleCategory::delete_many()
            .filter(entity::article_category::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        for category_id in unique(category_ids) {
            entity::article_category::ActiveModel {
                article_id: ActiveValue::Set(article_id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Marks the article deleted and drops its tag and category links
    pub async fn tombstone(&self, id: i32) -> Result<(), DbErr> {
        self.replace_tags(id, &[]).await?;
        self.replace_categories(id, &[]).await?;

        let now = Utc::now();
        entity::prelude::Article::update_many()
            .col_expr(entity::article::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(entity::article::Column::UpdatedAt, Expr::value(now))
            .filter(entity::article::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_translation(
        &self,
        article_id: i32,
        language_code: &str,
    ) -> Result<Option<entity::article_translation::Model>, DbErr> {
        entity::prelude::ArticleTranslation::find()
            .filter(entity::article_translation::Column::ArticleId.eq(article_id))
            .filter(entity::article_translation::Column::LanguageCode.eq(language_code))
            .one(self.db)
            .await
    }

    /// Returns the ID of the article already using `slug` in the language, if any
    pub async fn slug_owner(&self, language_code: &str, slug: &str) -> Result<Option<i32>, DbErr> {
        Ok(entity::prelude::ArticleTranslation::find()
            .filter(entity::article_translation::Column::LanguageCode.eq(language_code))
            .filter(entity::article_translation::Column::Slug.eq(slug))
            .one(self.db)
            .await?
            .map(|t| t.article_id))
    }

    pub async fn create_translation(
        &self,
        article_id: i32,
        params: &ArticleTranslationParams,
    ) -> Result<entity::article_translation::Model, DbErr> {
        let now = Utc::now();

        entity::article_translation::ActiveModel {
            article_id: ActiveValue::Set(article_id),
            language_code: ActiveValue::Set(params.language_code.clone()),
            title: ActiveValue::Set(params.title.clone()),
            slug: ActiveValue::Set(params.slug.clone()),
            excerpt: ActiveValue::Set(params.excerpt.clone()),
            content: ActiveValue::Set(params.content.clone()),
            meta_title: ActiveValue::Set(params.meta_title.clone()),
            meta_description: ActiveValue::Set(params.meta_description.clone()),
            meta_keywords: ActiveValue::Set(params.meta_keywords.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update_translation(
        &self,
        translation: entity::article_translation::Model,
        params: &ArticleTranslationParams,
    ) -> Result<entity::article_translation::Model, DbErr> {
        let mut active_model: entity::article_translation::ActiveModel = translation.into();
        active_model.title = ActiveValue::Set(params.title.clone());
        active_model.slug = ActiveValue::Set(params.slug.clone());
        active_model.excerpt = ActiveValue::Set(params.excerpt.clone());
        active_model.content = ActiveValue::Set(params.content.clone());
        active_model.meta_title = ActiveValue::Set(params.meta_title.clone());
        active_model.meta_description = ActiveValue::Set(params.meta_description.clone());
        active_model.meta_keywords = ActiveValue::Set(params.meta_keywords.clone());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn delete_translations(&self, article_id: i32) -> Result<(), DbErr> {
        entity::prelude::ArticleTranslation::delete_many()
            .filter(entity::article_translation::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

/// Deduplicates IDs while keeping a stable order
fn unique(ids: &[i32]) -> Vec<i32> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}
