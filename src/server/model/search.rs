//! Search parameters and result rows.

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;

use crate::{
    model::search::SearchResultDto,
    server::model::pagination::{Page, PageRequest},
};

/// Default number of hits per page.
pub const DEFAULT_SEARCH_PAGE_SIZE: u64 = 10;
/// Largest page size a search accepts; anything outside `1..=50` falls back to the default.
pub const MAX_SEARCH_PAGE_SIZE: i64 = 50;

#[derive(Debug, Clone)]
pub struct SearchParams {
    pub query: String,
    pub category_slug: Option<String>,
    pub tag_slug: Option<String>,
    pub language: Option<String>,
    pub page: PageRequest,
}

impl SearchParams {
    /// Page sizes outside `1..=50` fall back to 10.
    pub fn page_request(page: Option<i64>, page_size: Option<i64>) -> PageRequest {
        let page_size = page_size.filter(|s| (1..=MAX_SEARCH_PAGE_SIZE).contains(s));
        PageRequest::new(page, page_size, DEFAULT_SEARCH_PAGE_SIZE)
    }

    /// Whitespace-separated terms longer than two characters.
    pub fn terms(&self) -> Vec<&str> {
        self.query
            .split_whitespace()
            .filter(|term| term.chars().count() > 2)
            .collect()
    }
}

/// Flat projection of one matching translation joined with its article and author.
#[derive(Debug, Clone, FromQueryResult)]
pub struct SearchRow {
    pub article_id: i32,
    pub title: String,
    pub slug: String,
    pub language_code: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub author_name: Option<String>,
}

/// Search hit with the name of one of its categories attached.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub row: SearchRow,
    pub category_name: Option<String>,
}

impl SearchHit {
    pub fn into_dto(self) -> SearchResultDto {
        SearchResultDto {
            id: self.row.article_id,
            title: self.row.title,
            slug: self.row.slug,
            language_code: self.row.language_code,
            excerpt: self.row.excerpt,
            content: self.row.content,
            featured_image: self.row.featured_image,
            published_at: self.row.published_at,
            view_count: self.row.view_count,
            category_name: self.category_name,
            author_name: self.row.author_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResults {
    pub page: Page<SearchHit>,
    pub suggestions: Vec<String>,
}
