use crate::server::{
    data::category::CategoryRepository,
    model::{
        category::CategoryFilter,
        pagination::{PageRequest, SortDirection},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_slug;
mod get_by_id;
