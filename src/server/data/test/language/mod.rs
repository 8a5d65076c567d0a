use crate::server::data::language::LanguageRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
