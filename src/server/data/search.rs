//! Keyword search over published article translations.

use entity::article::ArticleStatus;
use sea_orm::{
    sea_query::Query, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    pagination::PageRequest,
    search::{SearchHit, SearchParams, SearchRow},
};

/// Maximum number of title suggestions returned for a weak query.
const SUGGESTION_LIMIT: u64 = 5;

pub struct SearchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SearchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Searches published article translations
    ///
    /// Every term must appear in the title, content or excerpt of the same translation.
    /// Hits are ordered by `published_at` descending, then article ID descending.
    ///
    /// # Returns
    /// - `Ok((hits, total))` - Hits for the requested page and the total across all pages
    pub async fn search(
        &self,
        params: &SearchParams,
        page: PageRequest,
    ) -> Result<(Vec<SearchHit>, u64), DbErr> {
        let mut condition = Condition::all()
            .add(entity::article::Column::Status.eq(ArticleStatus::Published))
            .add(entity::article::Column::DeletedAt.is_null());

        for term in params.terms() {
            condition = condition.add(
                Condition::any()
                    .add(entity::article_translation::Column::Title.contains(term))
                    .add(entity::article_translation::Column::Content.contains(term))
                    .add(entity::article_translation::Column::Excerpt.contains(term)),
            );
        }

        if let Some(language) = &params.language {
            condition = condition
                .add(entity::article_translation::Column::LanguageCode.eq(language.as_str()));
        }

        if let Some(slug) = &params.category_slug {
            condition = condition.add(
                entity::article_translation::Column::ArticleId.in_subquery(
                    Query::select()
                        .column(entity::article_category::Column::ArticleId)
                        .from(entity::article_category::Entity)
                        .and_where(
                            entity::article_category::Column::CategoryId.in_subquery(
                                Query::select()
                                    .column(entity::category_translation::Column::CategoryId)
                                    .from(entity::category_translation::Entity)
                                    .and_where(
                                        entity::category_translation::Column::Slug
                                            .eq(slug.as_str()),
                                    )
                                    .to_owned(),
                            ),
                        )
                        .to_owned(),
                ),
            );
        }

        if let Some(slug) = &params.tag_slug {
            condition = condition.add(
                entity::article_translation::Column::ArticleId.in_subquery(
                    Query::select()
                        .column(entity::article_tag::Column::ArticleId)
                        .from(entity::article_tag::Entity)
                        .and_where(
                            entity::article_tag::Column::TagId.in_subquery(
                                Query::select()
                                    .column(entity::tag_translation::Column::TagId)
                                    .from(entity::tag_translation::Entity)
                                    .and_where(
                                        entity::tag_translation::Column::Slug.eq(slug.as_str()),
                                    )
                                    .to_owned(),
                            ),
                        )
                        .to_owned(),
                ),
            );
        }

        let paginator = entity::prelude::ArticleTranslation::find()
            .select_only()
            .column(entity::article_translation::Column::ArticleId)
            .column(entity::article_translation::Column::Title)
            .column(entity::article_translation::Column::Slug)
            .column(entity::article_translation::Column::LanguageCode)
            .column(entity::article_translation::Column::Excerpt)
            .column(entity::article_translation::Column::Content)
            .column(entity::article::Column::FeaturedImage)
            .column(entity::article::Column::PublishedAt)
            .column(entity::article::Column::ViewCount)
            .column_as(entity::user::Column::Username, "author_name")
            .join(
                JoinType::InnerJoin,
                entity::article_translation::Relation::Article.def(),
            )
            .join(JoinType::LeftJoin, entity::article::Relation::User.def())
            .filter(condition)
            .order_by_desc(entity::article::Column::PublishedAt)
            .order_by_desc(entity::article::Column::Id)
            .order_by_asc(entity::article_translation::Column::Id)
            .into_model::<SearchRow>()
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.index()).await?;

        let hits = self.attach_category_names(rows).await?;

        Ok((hits, total))
    }

    /// Names one category per hit, preferring the hit's own language
    async fn attach_category_names(&self, rows: Vec<SearchRow>) -> Result<Vec<SearchHit>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let article_ids: Vec<i32> = rows.iter().map(|r| r.article_id).collect();
        let links = entity::prelude::ArticleCategory::find()
            .filter(entity::article_category::Column::ArticleId.is_in(article_ids))
            .filter(
                entity::article_category::Column::CategoryId.in_subquery(
                    Query::select()
                        .column(entity::category::Column::Id)
                        .from(entity::category::Entity)
                        .and_where(entity::category::Column::DeletedAt.is_null())
                        .to_owned(),
                ),
            )
            .order_by_asc(entity::article_category::Column::CategoryId)
            .all(self.db)
            .await?;

        let mut categories_by_article: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in &links {
            categories_by_article
                .entry(link.article_id)
                .or_default()
                .push(link.category_id);
        }

        let category_ids: Vec<i32> = links.iter().map(|l| l.category_id).collect();
        let mut names: HashMap<i32, Vec<entity::category_translation::Model>> = HashMap::new();
        if !category_ids.is_empty() {
            for translation in entity::prelude::CategoryTranslation::find()
                .filter(entity::category_translation::Column::CategoryId.is_in(category_ids))
                .order_by_asc(entity::category_translation::Column::Id)
                .all(self.db)
                .await?
            {
                names
                    .entry(translation.category_id)
                    .or_default()
                    .push(translation);
            }
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let category_name = categories_by_article
                    .get(&row.article_id)
                    .and_then(|ids| ids.first())
                    .and_then(|id| names.get(id))
                    .and_then(|translations| {
                        translations
                            .iter()
                            .find(|t| t.language_code == row.language_code)
                            .or_else(|| translations.first())
                    })
                    .map(|t| t.name.clone());

                SearchHit { row, category_name }
            })
            .collect())
    }

    /// Distinct titles of published translations containing `fragment`
    pub async fn suggest_titles(&self, fragment: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::ArticleTranslation::find()
            .select_only()
            .column(entity::article_translation::Column::Title)
            .distinct()
            .join(
                JoinType::InnerJoin,
                entity::article_translation::Relation::Article.def(),
            )
            .filter(entity::article::Column::Status.eq(ArticleStatus::Published))
            .filter(entity::article::Column::DeletedAt.is_null())
            .filter(entity::article_translation::Column::Title.contains(fragment))
            .order_by_asc(entity::article_translation::Column::Title)
            .limit(SUGGESTION_LIMIT)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
