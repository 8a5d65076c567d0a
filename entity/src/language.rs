use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Script direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum TextDirection {
    #[sea_orm(string_value = "ltr")]
    Ltr,
    #[sea_orm(string_value = "rtl")]
    Rtl,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "language")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub is_active: bool,
    pub is_default: bool,
    pub direction: TextDirection,
    pub sort_order: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
