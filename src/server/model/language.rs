//! Language registry parameters.

use entity::language::TextDirection;

use crate::{
    model::language::{CreateLanguageDto, LanguageDto, UpdateLanguageDto},
    server::{error::AppError, model::translation::require},
};

impl From<entity::language::Model> for LanguageDto {
    fn from(model: entity::language::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            native_name: model.native_name,
            is_active: model.is_active,
            is_default: model.is_default,
            direction: model.direction,
            sort_order: model.sort_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLanguageParams {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub is_active: bool,
    pub is_default: bool,
    pub direction: TextDirection,
    pub sort_order: i32,
}

impl CreateLanguageParams {
    pub fn from_dto(dto: CreateLanguageDto) -> Result<Self, AppError> {
        let mut params = Self {
            code: dto.code,
            name: dto.name,
            native_name: dto.native_name,
            is_active: dto.is_active,
            is_default: dto.is_default,
            direction: dto.direction.unwrap_or(TextDirection::Ltr),
            sort_order: dto.sort_order,
        };
        require("code", &mut params.code)?;
        require("name", &mut params.name)?;
        require("native_name", &mut params.native_name)?;
        Ok(params)
    }
}

/// Partial update; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateLanguageParams {
    pub code: Option<String>,
    pub name: Option<String>,
    pub native_name: Option<String>,
    pub is_active: Option<bool>,
    pub is_default: Option<bool>,
    pub direction: Option<TextDirection>,
    pub sort_order: Option<i32>,
}

impl UpdateLanguageParams {
    pub fn from_dto(dto: UpdateLanguageDto) -> Result<Self, AppError> {
        let mut params = Self {
            code: dto.code,
            name: dto.name,
            native_name: dto.native_name,
            is_active: dto.is_active,
            is_default: dto.is_default,
            direction: dto.direction,
            sort_order: dto.sort_order,
        };
        if let Some(code) = params.code.as_mut() {
            require("code", code)?;
        }
        if let Some(name) = params.name.as_mut() {
            require("name", name)?;
        }
        if let Some(native_name) = params.native_name.as_mut() {
            require("native_name", native_name)?;
        }
        Ok(params)
    }
}

/// New position for one language in a bulk reorder.
#[derive(Debug, Clone, Copy)]
pub struct LanguageOrder {
    pub id: i32,
    pub sort_order: i32,
}
