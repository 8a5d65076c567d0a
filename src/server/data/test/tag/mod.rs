use crate::server::{
    data::tag::TagRepository,
    model::{
        pagination::{PageRequest, SortDirection},
        tag::TagFilter,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_slug;
mod slug_owner;
