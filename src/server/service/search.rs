use sea_orm::DatabaseConnection;

use crate::server::{
    data::search::SearchRepository,
    error::AppError,
    model::{
        pagination::Page,
        search::{SearchParams, SearchResults},
    },
};

/// Fewer hits than this triggers title suggestions.
const SUGGESTION_THRESHOLD: usize = 3;
/// Number of leading query characters matched against titles for suggestions.
const SUGGESTION_PREFIX_CHARS: usize = 3;

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs a keyword search over published articles
    ///
    /// When the page holds fewer than three hits and the query is longer than three
    /// characters, titles sharing the query's first three characters are offered as
    /// suggestions. A failing suggestion query is logged and yields no suggestions.
    pub async fn search(&self, mut params: SearchParams) -> Result<SearchResults, AppError> {
        params.query = params.query.trim().to_string();
        if params.query.is_empty() {
            return Err(AppError::BadRequest("Search query is required".to_string()));
        }

        let repo = SearchRepository::new(self.db);
        let (hits, total) = repo.search(&params, params.page).await?;

        let mut suggestions = Vec::new();
        if hits.len() < SUGGESTION_THRESHOLD
            && params.query.chars().count() > SUGGESTION_PREFIX_CHARS
        {
            let prefix: String = params.query.chars().take(SUGGESTION_PREFIX_CHARS).collect();

            match repo.suggest_titles(&prefix).await {
                Ok(titles) => suggestions = titles,
                Err(err) => tracing::warn!("Search suggestions for '{}' failed: {}", prefix, err),
            }
        }

        Ok(SearchResults {
            page: Page::new(hits, total, params.page),
            suggestions,
        })
    }
}
