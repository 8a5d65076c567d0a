//! Setting domain models and parameters.

use crate::{
    model::setting::{
        CreateSettingDto, SettingDto, SettingTranslationDto, SettingValueDto, UpdateSettingDto,
    },
    server::{
        error::AppError,
        model::translation::{require, TranslationInput},
    },
};

#[derive(Debug, Clone)]
pub struct SettingWithTranslations {
    pub setting: entity::setting::Model,
    pub translations: Vec<entity::setting_translation::Model>,
}

impl SettingWithTranslations {
    /// Picks the translated value for `language` when the setting is translatable and a
    /// translation exists, otherwise the base value.
    pub fn resolve(self, language: Option<&str>) -> SettingValueDto {
        let translated = match (self.setting.is_translatable, language) {
            (true, Some(code)) => self
                .translations
                .into_iter()
                .find(|t| t.language_code == code),
            _ => None,
        };

        match translated {
            Some(t) => SettingValueDto {
                key: self.setting.key,
                value: t.value,
                value_type: self.setting.value_type,
                language_code: Some(t.language_code),
            },
            None => SettingValueDto {
                key: self.setting.key,
                value: self.setting.value,
                value_type: self.setting.value_type,
                language_code: None,
            },
        }
    }

    pub fn into_dto(self) -> SettingDto {
        SettingDto {
            id: self.setting.id,
            key: self.setting.key,
            value: self.setting.value,
            value_type: self.setting.value_type,
            group: self.setting.group,
            is_translatable: self.setting.is_translatable,
            translations: self
                .translations
                .into_iter()
                .map(|t| SettingTranslationDto {
                    language_code: t.language_code,
                    value: t.value,
                })
                .collect(),
            updated_at: self.setting.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingTranslationParams {
    pub language_code: String,
    pub value: String,
}

impl SettingTranslationParams {
    pub fn from_dto(dto: SettingTranslationDto) -> Self {
        Self {
            language_code: dto.language_code,
            value: dto.value,
        }
    }
}

impl TranslationInput for SettingTranslationParams {
    fn language_code(&self) -> &str {
        &self.language_code
    }

    fn normalize(&mut self) -> Result<(), AppError> {
        require("language_code", &mut self.language_code)
    }
}

#[derive(Debug, Clone)]
pub struct CreateSettingParams {
    pub key: String,
    pub value: String,
    pub value_type: String,
    pub group: String,
    pub is_translatable: bool,
}

impl CreateSettingParams {
    pub fn from_dto(
        dto: CreateSettingDto,
    ) -> Result<(Self, Vec<SettingTranslationParams>), AppError> {
        let mut params = Self {
            key: dto.key,
            value: dto.value,
            value_type: dto.value_type,
            group: dto.group,
            is_translatable: dto.is_translatable,
        };
        require("key", &mut params.key)?;

        let translations = dto
            .translations
            .into_iter()
            .map(SettingTranslationParams::from_dto)
            .collect();

        Ok((params, translations))
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSettingParams {
    pub value: Option<String>,
    pub value_type: Option<String>,
    pub group: Option<String>,
    pub is_translatable: Option<bool>,
}

impl UpdateSettingParams {
    pub fn from_dto(dto: UpdateSettingDto) -> (Self, Vec<SettingTranslationParams>) {
        (
            Self {
                value: dto.value,
                value_type: dto.value_type,
                group: dto.group,
                is_translatable: dto.is_translatable,
            },
            dto.translations
                .into_iter()
                .map(SettingTranslationParams::from_dto)
                .collect(),
        )
    }
}
