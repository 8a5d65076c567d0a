use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "setting_translation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub setting_id: i32,
    pub language_code: String,
    #[sea_orm(column_type = "Text")]
    pub value: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::setting::Entity",
        from = "Column::SettingId",
        to = "super::setting::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Setting,
}

impl Related<super::setting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Setting.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
