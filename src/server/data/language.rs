use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::language::{CreateLanguageParams, UpdateLanguageParams};

pub struct LanguageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LanguageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a live language by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::language::Model>, DbErr> {
        entity::prelude::Language::find_by_id(id)
            .filter(entity::language::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Finds a live language by its code
    pub async fn find_by_code(&self, code: &str) -> Result<Option<entity::language::Model>, DbErr> {
        entity::prelude::Language::find()
            .filter(entity::language::Column::Code.eq(code))
            .filter(entity::language::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Finds the current default language, if any
    pub async fn find_default(&self) -> Result<Option<entity::language::Model>, DbErr> {
        entity::prelude::Language::find()
            .filter(entity::language::Column::IsDefault.eq(true))
            .filter(entity::language::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Lists live languages ordered by sort order, then ID
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<entity::language::Model>, DbErr> {
        let mut query = entity::prelude::Language::find()
            .filter(entity::language::Column::DeletedAt.is_null());

        if active_only {
            query = query.filter(entity::language::Column::IsActive.eq(true));
        }

        query
            .order_by_asc(entity::language::Column::SortOrder)
            .order_by_asc(entity::language::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Language::find()
            .filter(entity::language::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: CreateLanguageParams,
    ) -> Result<entity::language::Model, DbErr> {
        let now = Utc::now();

        entity::language::ActiveModel {
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(params.name),
            native_name: ActiveValue::Set(params.native_name),
            is_active: ActiveValue::Set(params.is_active),
            is_default: ActiveValue::Set(params.is_default),
            direction: ActiveValue::Set(params.direction),
            sort_order: ActiveValue::Set(params.sort_order),
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
        language: entity::language::Model,
        params: UpdateLanguageParams,
    ) -> Result<entity::language::Model, DbErr> {
        let mut active_model: entity::language::ActiveModel = language.into();

        if let Some(code) = params.code {
            active_model.code = ActiveValue::Set(code);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(native_name) = params.native_name {
            active_model.native_name = ActiveValue::Set(native_name);
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        if let Some(is_default) = params.is_default {
            active_model.is_default = ActiveValue::Set(is_default);
        }
        if let Some(direction) = params.direction {
            active_model.direction = ActiveValue::Set(direction);
        }
        if let Some(sort_order) = params.sort_order {
            active_model.sort_order = ActiveValue::Set(sort_order);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Clears the default flag on every language except `keep`
    pub async fn clear_default_except(&self, keep: i32) -> Result<(), DbErr> {
        entity::prelude::Language::update_many()
            .col_expr(entity::language::Column::IsDefault, Expr::value(false))
            .col_expr(entity::language::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::language::Column::IsDefault.eq(true))
            .filter(entity::language::Column::Id.ne(keep))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_default(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Language::update_many()
            .col_expr(entity::language::Column::IsDefault, Expr::value(true))
            .col_expr(entity::language::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::language::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<(), DbErr> {
        entity::prelude::Language::update_many()
            .col_expr(entity::language::Column::IsActive, Expr::value(is_active))
            .col_expr(entity::language::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::language::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the sort order of a live language, returning the number of rows updated
    pub async fn set_sort_order(&self, id: i32, sort_order: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Language::update_many()
            .col_expr(entity::language::Column::SortOrder, Expr::value(sort_order))
            .col_expr(entity::language::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::language::Column::Id.eq(id))
            .filter(entity::language::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn tombstone(&self, id: i32) -> Result<(), DbErr> {
        let now = Utc::now();

        entity::prelude::Language::update_many()
            .col_expr(entity::language::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(entity::language::Column::IsActive, Expr::value(false))
            .col_expr(entity::language::Column::UpdatedAt, Expr::value(now))
            .filter(entity::language::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether any article, tag, category or setting translation uses the code
    pub async fn is_referenced(&self, code: &str) -> Result<bool, DbErr> {
        let articles = entity::prelude::ArticleTranslation::find()
            .filter(entity::article_translation::Column::LanguageCode.eq(code))
            .count(self.db)
            .await?;
        if articles > 0 {
            return Ok(true);
        }

        let tags = entity::prelude::TagTranslation::find()
            .filter(entity::tag_translation::Column::LanguageCode.eq(code))
            .count(self.db)
            .await?;
        if tags > 0 {
            return Ok(true);
        }

        let categories = entity::prelude::CategoryTranslation::find()
            .filter(entity::category_translation::Column::LanguageCode.eq(code))
            .count(self.db)
            .await?;
        if categories > 0 {
            return Ok(true);
        }

        let settings = entity::prelude::SettingTranslation::find()
            .filter(entity::setting_translation::Column::LanguageCode.eq(code))
            .count(self.db)
            .await?;

        Ok(settings > 0)
    }
}
