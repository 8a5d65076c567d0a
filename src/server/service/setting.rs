use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr};

use crate::server::{
    data::setting::SettingRepository,
    error::{internal::InternalError, AppError},
    model::setting::{
        CreateSettingParams, SettingTranslationParams, SettingWithTranslations,
        UpdateSettingParams,
    },
    service::translatable::{TranslatableService, TranslatableStore},
};

/// Translation hooks for settings. Keys are unique among live settings and a setting
/// may exist with its base value alone.
pub struct SettingStore;

#[async_trait]
impl TranslatableStore for SettingStore {
    type Create = CreateSettingParams;
    type Update = UpdateSettingParams;
    type Translation = SettingTranslationParams;

    const NAME: &'static str = "setting";
    const REQUIRES_TRANSLATION: bool = false;

    async fn validate_create(
        &self,
        txn: &DatabaseTransaction,
        params: &CreateSettingParams,
    ) -> Result<(), AppError> {
        if SettingRepository::new(txn)
            .find_by_key(&params.key)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Setting '{}' already exists",
                params.key
            )));
        }

        Ok(())
    }

    async fn insert_base(
        &self,
        txn: &DatabaseTransaction,
        params: CreateSettingParams,
    ) -> Result<i32, AppError> {
        Ok(SettingRepository::new(txn).create(&params).await?.id)
    }

    async fn update_base(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        params: UpdateSettingParams,
    ) -> Result<(), AppError> {
        let repo = SettingRepository::new(txn);

        let Some(setting) = repo.find_live(id).await? else {
            return Err(AppError::NotFound(format!("Setting {} not found", id)));
        };
        repo.update(setting, params).await?;

        Ok(())
    }

    async fn is_live(&self, txn: &DatabaseTransaction, id: i32) -> Result<bool, DbErr> {
        Ok(SettingRepository::new(txn).find_live(id).await?.is_some())
    }

    async fn save_translation(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        translation: &SettingTranslationParams,
    ) -> Result<(), DbErr> {
        let repo = SettingRepository::new(txn);

        match repo.find_translation(id, &translation.language_code).await? {
            Some(existing) => repo.update_translation(existing, translation).await?,
            None => repo.create_translation(id, translation).await?,
        };

        Ok(())
    }

    async fn delete_translations(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        SettingRepository::new(txn).delete_translations(id).await
    }

    async fn tombstone(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        SettingRepository::new(txn).tombstone(id).await
    }
}

pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateSettingParams,
        translations: Vec<SettingTranslationParams>,
    ) -> Result<SettingWithTranslations, AppError> {
        let id = TranslatableService::new(self.db, SettingStore)
            .create(params, translations)
            .await?;

        SettingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "setting", id }.into())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateSettingParams,
        translations: Vec<SettingTranslationParams>,
    ) -> Result<SettingWithTranslations, AppError> {
        TranslatableService::new(self.db, SettingStore)
            .update(id, params, translations)
            .await?;

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        TranslatableService::new(self.db, SettingStore)
            .delete(id)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<SettingWithTranslations, AppError> {
        SettingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Setting {} not found", id)))
    }

    pub async fn get_by_key(&self, key: &str) -> Result<SettingWithTranslations, AppError> {
        SettingRepository::new(self.db)
            .get_by_key(key)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Setting '{}' not found", key)))
    }

    /// Lists live settings, optionally restricted to one group
    pub async fn get_all(
        &self,
        group: Option<String>,
    ) -> Result<Vec<SettingWithTranslations>, AppError> {
        Ok(SettingRepository::new(self.db)
            .get_all(group.as_deref())
            .await?)
    }
}
