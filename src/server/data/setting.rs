use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::setting::{
    CreateSettingParams, SettingTranslationParams, SettingWithTranslations, UpdateSettingParams,
};

pub struct SettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a setting by ID unless it has been tombstoned
    pub async fn find_live(&self, id: i32) -> Result<Option<entity::setting::Model>, DbErr> {
        entity::prelude::Setting::find_by_id(id)
            .filter(entity::setting::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Finds a live setting by key
    pub async fn find_by_key(&self, key: &str) -> Result<Option<entity::setting::Model>, DbErr> {
        entity::prelude::Setting::find()
            .filter(entity::setting::Column::Key.eq(key))
            .filter(entity::setting::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SettingWithTranslations>, DbErr> {
        let Some(setting) = self.find_live(id).await? else {
            return Ok(None);
        };

        Ok(self.with_translations(vec![setting]).await?.pop())
    }

    pub async fn get_by_key(&self, key: &str) -> Result<Option<SettingWithTranslations>, DbErr> {
        let Some(setting) = self.find_by_key(key).await? else {
            return Ok(None);
        };

        Ok(self.with_translations(vec![setting]).await?.pop())
    }

    /// Lists live settings ordered by group then key
    pub async fn get_all(
        &self,
        group: Option<&str>,
    ) -> Result<Vec<SettingWithTranslations>, DbErr> {
        let mut query = entity::prelude::Setting::find()
            .filter(entity::setting::Column::DeletedAt.is_null());

        if let Some(group) = group {
            query = query.filter(entity::setting::Column::Group.eq(group));
        }

        let settings = query
            .order_by_asc(entity::setting::Column::Group)
            .order_by_asc(entity::setting::Column::Key)
            .all(self.db)
            .await?;

        self.with_translations(settings).await
    }

    async fn with_translations(
        &self,
        settings: Vec<entity::setting::Model>,
    ) -> Result<Vec<SettingWithTranslations>, DbErr> {
        if settings.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = settings.iter().map(|s| s.id).collect();
        let mut translations: HashMap<i32, Vec<entity::setting_translation::Model>> =
            HashMap::new();
        for translation in entity::prelude::SettingTranslation::find()
            .filter(entity::setting_translation::Column::SettingId.is_in(ids))
            .order_by_asc(entity::setting_translation::Column::Id)
            .all(self.db)
            .await?
        {
            translations
                .entry(translation.setting_id)
                .or_default()
                .push(translation);
        }

        Ok(settings
            .into_iter()
            .map(|setting| SettingWithTranslations {
                translations: translations.remove(&setting.id).unwrap_or_default(),
                setting,
            })
            .collect())
    }

    pub async fn create(
        &self,
        params: &CreateSettingParams,
    ) -> Result<entity::setting::Model, DbErr> {
        let now = Utc::now();

        entity::setting::ActiveModel {
            key: ActiveValue::Set(params.key.clone()),
            value: ActiveValue::Set(params.value.clone()),
            value_type: ActiveValue::Set(params.value_type.clone()),
            group: ActiveValue::Set(params.group.clone()),
            is_translatable: ActiveValue::Set(params.is_translatable),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies the supplied fields, leaving `None` fields untouched
    pub async fn update(
        &self,
        setting: entity::setting::Model,
        params: UpdateSettingParams,
    ) -> Result<entity::setting::Model, DbErr> {
        let mut active_model: entity::setting::ActiveModel = setting.into();

        if let Some(value) = params.value {
            active_model.value = ActiveValue::Set(value);
        }
        if let Some(value_type) = params.value_type {
            active_model.value_type = ActiveValue::Set(value_type);
        }
        if let Some(group) = params.group {
            active_model.group = ActiveValue::Set(group);
        }
        if let Some(is_translatable) = params.is_translatable {
            active_model.is_translatable = ActiveValue::Set(is_translatable);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn tombstone(&self, id: i32) -> Result<(), DbErr> {
        let now = Utc::now();

        entity::prelude::Setting::update_many()
            .col_expr(entity::setting::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(entity::setting::Column::UpdatedAt, Expr::value(now))
            .filter(entity::setting::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_translation(
        &self,
        setting_id: i32,
        language_code: &str,
    ) -> Result<Option<entity::setting_translation::Model>, DbErr> {
        entity::prelude::SettingTranslation::find()
            .filter(entity::setting_translation::Column::SettingId.eq(setting_id))
            .filter(entity::setting_translation::Column::LanguageCode.eq(language_code))
            .one(self.db)
            .await
    }

    pub async fn create_translation(
        &self,
        setting_id: i32,
        params: &SettingTranslationParams,
    ) -> Result<entity::setting_translation::Model, DbErr> {
        let now = Utc::now();

        entity::setting_translation::ActiveModel {
            setting_id: ActiveValue::Set(setting_id),
            language_code: ActiveValue::Set(params.language_code.clone()),
            value: ActiveValue::Set(params.value.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update_translation(
        &self,
        translation: entity::setting_translation::Model,
        params: &SettingTranslationParams,
    ) -> Result<entity::setting_translation::Model, DbErr> {
        let mut active_model: entity::setting_translation::ActiveModel = translation.into();
        active_model.value = ActiveValue::Set(params.value.clone());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn delete_translations(&self, setting_id: i32) -> Result<(), DbErr> {
        entity::prelude::SettingTranslation::delete_many()
            .filter(entity::setting_translation::Column::SettingId.eq(setting_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
