use chrono::{DateTime, Utc};
use entity::language::TextDirection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LanguageDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub is_active: bool,
    pub is_default: bool,
    #[schema(value_type = String, example = "ltr")]
    pub direction: TextDirection,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateLanguageDto {
    pub code: String,
    pub name: String,
    pub native_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_default: bool,
    #[schema(value_type = Option<String>, example = "ltr")]
    pub direction: Option<TextDirection>,
    #[serde(default)]
    pub sort_order: i32,
}

/// Partial update; omitted fields keep their current value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateLanguageDto {
    pub code: Option<String>,
    pub name: Option<String>,
    pub native_name: Option<String>,
    pub is_active: Option<bool>,
    pub is_default: Option<bool>,
    #[schema(value_type = Option<String>, example = "rtl")]
    pub direction: Option<TextDirection>,
    pub sort_order: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LanguageOrderItemDto {
    pub id: i32,
    pub sort_order: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LanguageOrderDto {
    pub languages: Vec<LanguageOrderItemDto>,
}

fn default_true() -> bool {
    true
}
