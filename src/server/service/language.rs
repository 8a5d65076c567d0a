//! Language registry: the set of languages translations may use, their display order
//! and the single default language.

use entity::language::TextDirection;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::language::LanguageRepository,
    error::AppError,
    model::language::{CreateLanguageParams, LanguageOrder, UpdateLanguageParams},
    service::translatable::finish,
};

pub struct LanguageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LanguageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists live languages by sort order, optionally only the active ones
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<entity::language::Model>, AppError> {
        Ok(LanguageRepository::new(self.db).get_all(active_only).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::language::Model, AppError> {
        LanguageRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Language {} not found", id)))
    }

    pub async fn get_by_code(&self, code: &str) -> Result<entity::language::Model, AppError> {
        LanguageRepository::new(self.db)
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Language '{}' not found", code)))
    }

    /// Returns the requested language or, when absent, the default language's code
    pub async fn resolve_code(&self, language: Option<String>) -> Result<String, AppError> {
        if let Some(language) = language.filter(|l| !l.trim().is_empty()) {
            return Ok(language);
        }

        LanguageRepository::new(self.db)
            .find_default()
            .await?
            .map(|l| l.code)
            .ok_or_else(|| {
                AppError::BadRequest(
                    "No default language is configured; pass a language code".to_string(),
                )
            })
    }

    /// Registers a language
    ///
    /// A language created as default replaces the current default in the same
    /// transaction. It must also be active.
    pub async fn create(
        &self,
        params: CreateLanguageParams,
    ) -> Result<entity::language::Model, AppError> {
        let txn = self.db.begin().await?;
        let result = self.create_in(&txn, params).await;
        finish(txn, result).await
    }

    async fn create_in(
        &self,
        txn: &DatabaseTransaction,
        params: CreateLanguageParams,
    ) -> Result<entity::language::Model, AppError> {
        let repo = LanguageRepository::new(txn);

        if repo.find_by_code(&params.code).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Language code '{}' is already registered",
                params.code
            )));
        }

        if params.is_default && !params.is_active {
            return Err(AppError::Conflict(
                "A disabled language cannot be the default".to_string(),
            ));
        }

        let language = repo.create(params).await?;
        if language.is_default {
            repo.clear_default_except(language.id).await?;
        }

        Ok(language)
    }

    /// Updates a language
    ///
    /// The default language cannot be disabled or un-defaulted here; another language
    /// has to become default first. A code still used by translations cannot change.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateLanguageParams,
    ) -> Result<entity::language::Model, AppError> {
        let txn = self.db.begin().await?;
        let result = self.update_in(&txn, id, params).await;
        finish(txn, result).await
    }

    async fn update_in(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        params: UpdateLanguageParams,
    ) -> Result<entity::language::Model, AppError> {
        let repo = LanguageRepository::new(txn);

        let Some(language) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Language {} not found", id)));
        };

        if let Some(code) = params.code.as_deref() {
            if code != language.code {
                if repo.find_by_code(code).await?.is_some() {
                    return Err(AppError::Conflict(format!(
                        "Language code '{}' is already registered",
                        code
                    )));
                }
                if repo.is_referenced(&language.code).await? {
                    return Err(AppError::Conflict(format!(
                        "Language code '{}' is used by translations and cannot change",
                        language.code
                    )));
                }
            }
        }

        let becomes_default = params.is_default.unwrap_or(language.is_default);
        let stays_active = params.is_active.unwrap_or(language.is_active);

        if language.is_default && !becomes_default {
            return Err(AppError::Conflict(
                "Set another language as default instead".to_string(),
            ));
        }
        if becomes_default && !stays_active {
            return Err(AppError::Conflict(
                "The default language cannot be disabled".to_string(),
            ));
        }

        let language = repo.update(language, params).await?;
        if language.is_default {
            repo.clear_default_except(language.id).await?;
        }

        Ok(language)
    }

    /// Tombstones a language that is neither the default nor used by any translation
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = self.delete_in(&txn, id).await;
        finish(txn, result).await
    }

    async fn delete_in(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), AppError> {
        let repo = LanguageRepository::new(txn);

        let Some(language) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Language {} not found", id)));
        };

        if language.is_default {
            return Err(AppError::Conflict(
                "The default language cannot be deleted".to_string(),
            ));
        }

        if repo.is_referenced(&language.code).await? {
            return Err(AppError::Conflict(format!(
                "Language '{}' is still used by translations",
                language.code
            )));
        }

        repo.tombstone(id).await?;

        Ok(())
    }

    /// Makes the language the only default
    ///
    /// Clearing the previous default and setting the new one happen in one transaction.
    pub async fn set_default(&self, id: i32) -> Result<entity::language::Model, AppError> {
        let txn = self.db.begin().await?;
        let result = self.set_default_in(&txn, id).await;
        finish(txn, result).await
    }

    async fn set_default_in(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
    ) -> Result<entity::language::Model, AppError> {
        let repo = LanguageRepository::new(txn);

        let Some(language) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Language {} not found", id)));
        };

        if !language.is_active {
            return Err(AppError::Conflict(
                "A disabled language cannot be the default".to_string(),
            ));
        }

        repo.clear_default_except(id).await?;
        repo.set_default(id).await?;

        self.reload(&repo, id).await
    }

    /// Flips `is_active`; the default language cannot be disabled
    pub async fn toggle_active(&self, id: i32) -> Result<entity::language::Model, AppError> {
        let txn = self.db.begin().await?;
        let result = self.toggle_active_in(&txn, id).await;
        finish(txn, result).await
    }

    async fn toggle_active_in(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
    ) -> Result<entity::language::Model, AppError> {
        let repo = LanguageRepository::new(txn);

        let Some(language) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Language {} not found", id)));
        };

        if language.is_active && language.is_default {
            return Err(AppError::Conflict(
                "The default language cannot be disabled".to_string(),
            ));
        }

        repo.set_active(id, !language.is_active).await?;

        self.reload(&repo, id).await
    }

    /// Applies every new sort order or none of them
    pub async fn reorder(
        &self,
        orders: Vec<LanguageOrder>,
    ) -> Result<Vec<entity::language::Model>, AppError> {
        let txn = self.db.begin().await?;
        let result = self.reorder_in(&txn, orders).await;
        finish(txn, result).await?;

        self.get_all(false).await
    }

    async fn reorder_in(
        &self,
        txn: &DatabaseTransaction,
        orders: Vec<LanguageOrder>,
    ) -> Result<(), AppError> {
        let repo = LanguageRepository::new(txn);

        for order in orders {
            if repo.set_sort_order(order.id, order.sort_order).await? == 0 {
                return Err(AppError::NotFound(format!(
                    "Language {} not found",
                    order.id
                )));
            }
        }

        Ok(())
    }

    /// Registers English as the default and Traditional Chinese when the registry is empty
    pub async fn seed_defaults(&self) -> Result<(), AppError> {
        let repo = LanguageRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(());
        }

        self.create(CreateLanguageParams {
            code: "en".to_string(),
            name: "English".to_string(),
            native_name: "English".to_string(),
            is_active: true,
            is_default: true,
            direction: TextDirection::Ltr,
            sort_order: 1,
        })
        .await?;

        self.create(CreateLanguageParams {
            code: "zh-TW".to_string(),
            name: "Traditional Chinese".to_string(),
            native_name: "繁體中文".to_string(),
            is_active: true,
            is_default: false,
            direction: TextDirection::Ltr,
            sort_order: 2,
        })
        .await?;

        tracing::info!("Seeded default languages");

        Ok(())
    }

    async fn reload(
        &self,
        repo: &LanguageRepository<'_, DatabaseTransaction>,
        id: i32,
    ) -> Result<entity::language::Model, AppError> {
        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Language {} not found", id)))
    }
}
