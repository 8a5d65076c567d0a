use crate::server::{
    error::AppError,
    model::language::{CreateLanguageParams, LanguageOrder, UpdateLanguageParams},
    service::language::LanguageService,
};
use entity::language::TextDirection;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod seed_defaults;

fn language(code: &str, is_default: bool) -> CreateLanguageParams {
    CreateLanguageParams {
        code: code.to_string(),
        name: code.to_uppercase(),
        native_name: code.to_string(),
        is_active: true,
        is_default,
        direction: TextDirection::Ltr,
        sort_order: 0,
    }
}
