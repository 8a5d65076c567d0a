use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    image::{ImageFilter, NewImageParams, UpdateImageParams},
    pagination::{PageRequest, SortDirection},
};

pub struct ImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a stored file
    pub async fn create(&self, params: NewImageParams) -> Result<entity::image::Model, DbErr> {
        let now = Utc::now();

        entity::image::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            file_name: ActiveValue::Set(params.file_name),
            file_path: ActiveValue::Set(params.file_path),
            file_size: ActiveValue::Set(params.file_size),
            width: ActiveValue::Set(None),
            height: ActiveValue::Set(None),
            content_type: ActiveValue::Set(params.content_type),
            alt: ActiveValue::Set(params.alt),
            title: ActiveValue::Set(params.title),
            usage: ActiveValue::Set(params.usage),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an image by ID unless it has been tombstoned
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::image::Model>, DbErr> {
        entity::prelude::Image::find_by_id(id)
            .filter(entity::image::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets a page of live images, newest first by default
    pub async fn get_paginated(
        &self,
        filter: &ImageFilter,
        direction: SortDirection,
        page: PageRequest,
    ) -> Result<(Vec<entity::image::Model>, u64), DbErr> {
        let mut query = entity::prelude::Image::find()
            .filter(entity::image::Column::DeletedAt.is_null());

        if let Some(usage) = &filter.usage {
            query = query.filter(entity::image::Column::Usage.eq(usage.as_str()));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::image::Column::UserId.eq(user_id));
        }

        let paginator = query
            .order_by(entity::image::Column::CreatedAt, direction.order())
            .order_by(entity::image::Column::Id, direction.order())
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let images = paginator.fetch_page(page.index()).await?;

        Ok((images, total))
    }

    /// Applies the supplied metadata, leaving `None` fields untouched
    pub async fn update(
        &self,
        image: entity::image::Model,
        params: UpdateImageParams,
    ) -> Result<entity::image::Model, DbErr> {
        let mut active_model: entity::image::ActiveModel = image.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(Some(title));
        }
        if let Some(alt) = params.alt {
            active_model.alt = ActiveValue::Set(Some(alt));
        }
        if let Some(usage) = params.usage {
            active_model.usage = ActiveValue::Set(Some(usage));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn tombstone(&self, id: i32) -> Result<(), DbErr> {
        let now = Utc::now();

        entity::prelude::Image::update_many()
            .col_expr(entity::image::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(entity::image::Column::UpdatedAt, Expr::value(now))
            .filter(entity::image::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
