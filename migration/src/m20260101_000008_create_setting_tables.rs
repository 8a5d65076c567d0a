use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Setting::Table)
                    .if_not_exists()
                    .col(pk_auto(Setting::Id))
                    .col(string_len(Setting::Key, 100))
                    .col(text(Setting::Value))
                    .col(string_len(Setting::ValueType, 50).default("text"))
                    .col(string_len(Setting::Group, 50).default("general"))
                    .col(boolean(Setting::IsTranslatable).default(false))
                    .col(timestamp_with_time_zone(Setting::CreatedAt))
                    .col(timestamp_with_time_zone(Setting::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Setting::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SettingTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(SettingTranslation::Id))
                    .col(integer(SettingTranslation::SettingId))
                    .col(string_len(SettingTranslation::LanguageCode, 10))
                    .col(text(SettingTranslation::Value))
                    .col(timestamp_with_time_zone(SettingTranslation::CreatedAt))
                    .col(timestamp_with_time_zone(SettingTranslation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setting_translation_setting_id")
                            .from(SettingTranslation::Table, SettingTranslation::SettingId)
                            .to(Setting::Table, Setting::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_setting_translation_lang")
                    .table(SettingTranslation::Table)
                    .col(SettingTranslation::SettingId)
                    .col(SettingTranslation::LanguageCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SettingTranslation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Setting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Setting {
    Table,
    Id,
    Key,
    Value,
    ValueType,
    Group,
    IsTranslatable,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum SettingTranslation {
    Table,
    Id,
    SettingId,
    LanguageCode,
    Value,
    CreatedAt,
    UpdatedAt,
}
