use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SettingTranslationDto {
    pub language_code: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SettingDto {
    pub id: i32,
    pub key: String,
    pub value: String,
    pub value_type: String,
    pub group: String,
    pub is_translatable: bool,
    pub translations: Vec<SettingTranslationDto>,
    pub updated_at: DateTime<Utc>,
}

/// A setting value resolved for one language.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SettingValueDto {
    pub key: String,
    pub value: String,
    pub value_type: String,
    /// Language of the returned value, or `None` when the base value was used.
    pub language_code: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateSettingDto {
    pub key: String,
    pub value: String,
    #[serde(default = "default_value_type")]
    pub value_type: String,
    #[serde(default = "default_group")]
    pub group: String,
    #[serde(default)]
    pub is_translatable: bool,
    #[serde(default)]
    pub translations: Vec<SettingTranslationDto>,
}

/// Partial update; omitted fields keep their value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateSettingDto {
    pub value: Option<String>,
    pub value_type: Option<String>,
    pub group: Option<String>,
    pub is_translatable: Option<bool>,
    #[serde(default)]
    pub translations: Vec<SettingTranslationDto>,
}

fn default_value_type() -> String {
    "text".to_string()
}

fn default_group() -> String {
    "general".to_string()
}
