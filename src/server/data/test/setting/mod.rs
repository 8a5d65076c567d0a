use crate::server::{
    data::setting::SettingRepository,
    model::setting::{CreateSettingParams, SettingTranslationParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_key;

fn setting(key: &str, group: &str, is_translatable: bool) -> CreateSettingParams {
    CreateSettingParams {
        key: key.to_string(),
        value: format!("{} value", key),
        value_type: "string".to_string(),
        group: group.to_string(),
        is_translatable,
    }
}
