pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_language_table;
mod m20260101_000003_create_category_tables;
mod m20260101_000004_create_tag_tables;
mod m20260101_000005_create_article_tables;
mod m20260101_000006_create_article_relation_tables;
mod m20260101_000007_create_image_table;
mod m20260101_000008_create_setting_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_language_table::Migration),
            Box::new(m20260101_000003_create_category_tables::Migration),
            Box::new(m20260101_000004_create_tag_tables::Migration),
            Box::new(m20260101_000005_create_article_tables::Migration),
            Box::new(m20260101_000006_create_article_relation_tables::Migration),
            Box::new(m20260101_000007_create_image_table::Migration),
            Box::new(m20260101_000008_create_setting_tables::Migration),
        ]
    }
}
