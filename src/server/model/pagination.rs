//! Page requests and paged results shared by every list query.

use sea_orm::Order;

use crate::{model::api::PaginationDto, server::error::AppError};

/// Upper bound applied to caller-supplied page sizes.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Largest page number accepted; keeps `offset()` within an `i64` SQL offset.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// Normalized page request.
///
/// `page` is 1-based. Both values are always at least 1, so offset and page-count
/// arithmetic never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Builds a request from raw query values.
    ///
    /// A missing or non-positive page becomes 1; pages past `MAX_PAGE` are capped. A
    /// missing or non-positive size becomes `default_size`; larger sizes are capped at
    /// `MAX_PAGE_SIZE`.
    pub fn new(page: Option<i64>, page_size: Option<i64>, default_size: u64) -> Self {
        let page = match page {
            Some(p) if p > 0 => (p as u64).min(MAX_PAGE),
            _ => 1,
        };
        let page_size = match page_size {
            Some(s) if s > 0 => (s as u64).min(MAX_PAGE_SIZE),
            _ => default_size.max(1),
        };

        Self { page, page_size }
    }

    /// Zero-based page index as used by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    pub fn offset(&self) -> u64 {
        self.index() * self.page_size
    }
}

/// One page of results plus the total row count across all pages.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// `ceil(total / page_size)`.
    pub fn total_page(&self) -> u64 {
        self.total.div_ceil(self.request.page_size)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }

    pub fn pagination_dto(&self) -> PaginationDto {
        PaginationDto {
            total: self.total,
            page: self.request.page,
            page_size: self.request.page_size,
            total_page: self.total_page(),
        }
    }
}

/// Direction of the caller-selected sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parses `asc`/`desc` case-insensitively; `None` yields the default (descending).
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(|v| v.to_ascii_lowercase()).as_deref() {
            None | Some("") => Ok(Self::default()),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(other) => Err(AppError::BadRequest(format!(
                "Unsupported sort direction '{}'",
                other
            ))),
        }
    }

    pub fn order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}
