//! Generic write path shared by every entity with per-language translations.
//!
//! Articles, tags, categories and settings all follow the same shape: a base row plus
//! one translation row per language. `TranslatableStore` describes the entity-specific
//! pieces (how to write the base row, how to write a translation, which guards apply),
//! and `TranslatableService` runs the common create/update/delete flow around them
//! inside a single transaction.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::language::LanguageRepository,
    error::AppError,
    model::translation::{prepare, TranslationInput},
};

/// Entity-specific hooks for the shared translation write path.
///
/// Every method runs inside the transaction opened by `TranslatableService`, so any
/// error returned from a hook rolls back the whole operation.
#[async_trait]
pub trait TranslatableStore: Send + Sync {
    /// Base fields accepted on create.
    type Create: Send + Sync;
    /// Base fields accepted on update.
    type Update: Send + Sync;
    type Translation: TranslationInput;

    /// Entity name used in error messages.
    const NAME: &'static str;

    /// Whether a create request must carry at least one translation.
    const REQUIRES_TRANSLATION: bool = true;

    /// Checks references and uniqueness of the base fields before anything is written.
    async fn validate_create(
        &self,
        _txn: &DatabaseTransaction,
        _params: &Self::Create,
    ) -> Result<(), AppError> {
        Ok(())
    }

    /// Checks references and uniqueness of the base fields of a live entity.
    async fn validate_update(
        &self,
        _txn: &DatabaseTransaction,
        _id: i32,
        _params: &Self::Update,
    ) -> Result<(), AppError> {
        Ok(())
    }

    /// Inserts the base row and its relations, returning the new ID.
    async fn insert_base(
        &self,
        txn: &DatabaseTransaction,
        params: Self::Create,
    ) -> Result<i32, AppError>;

    async fn update_base(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        params: Self::Update,
    ) -> Result<(), AppError>;

    /// Whether the entity exists and is not tombstoned.
    async fn is_live(&self, txn: &DatabaseTransaction, id: i32) -> Result<bool, DbErr>;

    /// Writes one translation, updating the row for its language if one exists and
    /// inserting it otherwise.
    async fn save_translation(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        translation: &Self::Translation,
    ) -> Result<(), DbErr>;

    /// ID of the entity already using `slug` in the language.
    async fn slug_owner(
        &self,
        _txn: &DatabaseTransaction,
        _language_code: &str,
        _slug: &str,
    ) -> Result<Option<i32>, DbErr> {
        Ok(None)
    }

    /// Blocks deletion while the entity is still referenced.
    async fn check_delete(&self, _txn: &DatabaseTransaction, _id: i32) -> Result<(), AppError> {
        Ok(())
    }

    async fn delete_translations(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr>;

    /// Marks the base row deleted and removes any links it owns.
    async fn tombstone(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr>;
}

/// Runs the create, update and delete flow of a translatable entity.
pub struct TranslatableService<'a, S: TranslatableStore> {
    db: &'a DatabaseConnection,
    store: S,
}

impl<'a, S: TranslatableStore> TranslatableService<'a, S> {
    pub fn new(db: &'a DatabaseConnection, store: S) -> Self {
        Self { db, store }
    }

    /// Creates the base row and every translation in one transaction.
    ///
    /// Blank slugs are derived from the translation's name or title before anything is
    /// written.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the created entity
    /// - `Err(AppError::BadRequest)` - Invalid or duplicate translation, or unknown language
    /// - `Err(AppError::Conflict)` - A slug is already used in that language
    /// - `Err(AppError::NotFound)` - A referenced entity does not exist
    pub async fn create(
        &self,
        params: S::Create,
        mut translations: Vec<S::Translation>,
    ) -> Result<i32, AppError> {
        prepare(&mut translations)?;

        if S::REQUIRES_TRANSLATION && translations.is_empty() {
            return Err(AppError::BadRequest(format!(
                "A {} needs at least one translation",
                S::NAME
            )));
        }

        let txn = self.db.begin().await?;
        let result = self.create_in(&txn, params, &translations).await;
        finish(txn, result).await
    }

    async fn create_in(
        &self,
        txn: &DatabaseTransaction,
        params: S::Create,
        translations: &[S::Translation],
    ) -> Result<i32, AppError> {
        self.store.validate_create(txn, &params).await?;

        let id = self.store.insert_base(txn, params).await?;
        self.save_translations(txn, id, translations).await?;

        Ok(id)
    }

    /// Updates the base row and reconciles translations in one transaction.
    ///
    /// Translations present in the request are updated in place or inserted; languages
    /// missing from the request are left untouched.
    ///
    /// # Returns
    /// - `Ok(())` - Entity updated
    /// - `Err(AppError::NotFound)` - Entity is missing or tombstoned
    /// - `Err(AppError::BadRequest)` - Invalid or duplicate translation, or unknown language
    /// - `Err(AppError::Conflict)` - A slug is already used in that language by another entity
    pub async fn update(
        &self,
        id: i32,
        params: S::Update,
        mut translations: Vec<S::Translation>,
    ) -> Result<(), AppError> {
        prepare(&mut translations)?;

        let txn = self.db.begin().await?;
        let result = self.update_in(&txn, id, params, &translations).await;
        finish(txn, result).await
    }

    async fn update_in(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        params: S::Update,
        translations: &[S::Translation],
    ) -> Result<(), AppError> {
        if !self.store.is_live(txn, id).await? {
            return Err(self.not_found(id));
        }

        self.store.validate_update(txn, id, &params).await?;
        self.store.update_base(txn, id, params).await?;
        self.save_translations(txn, id, translations).await?;

        Ok(())
    }

    /// Deletes translations and tombstones the base row in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Entity deleted
    /// - `Err(AppError::NotFound)` - Entity is missing or already tombstoned
    /// - `Err(AppError::Conflict)` - A delete guard refused the operation
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = self.delete_in(&txn, id).await;
        finish(txn, result).await
    }

    async fn delete_in(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), AppError> {
        if !self.store.is_live(txn, id).await? {
            return Err(self.not_found(id));
        }

        self.store.check_delete(txn, id).await?;
        self.store.delete_translations(txn, id).await?;
        self.store.tombstone(txn, id).await?;

        Ok(())
    }

    async fn save_translations(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        translations: &[S::Translation],
    ) -> Result<(), AppError> {
        let languages = LanguageRepository::new(txn);

        for translation in translations {
            let code = translation.language_code();

            if languages.find_by_code(code).await?.is_none() {
                return Err(AppError::BadRequest(format!("Unknown language '{}'", code)));
            }

            if let Some(slug) = translation.slug() {
                if let Some(owner) = self.store.slug_owner(txn, code, slug).await? {
                    if owner != id {
                        return Err(AppError::Conflict(format!(
                            "Slug '{}' is already used by another {} in '{}'",
                            slug,
                            S::NAME,
                            code
                        )));
                    }
                }
            }

            self.store.save_translation(txn, id, translation).await?;
        }

        Ok(())
    }

    fn not_found(&self, id: i32) -> AppError {
        AppError::NotFound(format!("{} {} not found", capitalize(S::NAME), id))
    }
}

/// Commits on success and rolls back on failure, returning the operation's result.
///
/// A failed rollback is logged; the original error is still returned.
pub async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
