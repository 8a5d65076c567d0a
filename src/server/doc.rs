//! OpenAPI document for the HTTP API.
//!
//! Paths are registered from the controller layer; the request and response schemas
//! they reference are collected from their `utoipa::path` annotations. Protected
//! endpoints use the `bearer` scheme added by [`SecurityAddon`].

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::model::api::ErrorDto;
use crate::server::controller::{
    article, auth, category, image, language, search, setting, tag, user, util,
};

/// Adds the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token returned by POST /api/v1/auth/login."))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Babelpress API",
        description = "Multilingual content management backend."
    ),
    paths(
        auth::register,
        auth::login,
        user::get_user,
        util::health,
        util::generate_slug,
        article::get_articles,
        article::get_article_by_id,
        article::get_article_by_slug,
        article::get_featured_articles,
        article::get_latest_articles,
        article::get_articles_by_category,
        article::create_article,
        article::update_article,
        article::delete_article,
        tag::get_tags,
        tag::get_tag_by_id,
        tag::get_tag_by_slug,
        tag::create_tag,
        tag::update_tag,
        tag::delete_tag,
        category::get_categories,
        category::get_category_by_id,
        category::get_category_by_slug,
        category::create_category,
        category::update_category,
        category::delete_category,
        language::get_languages,
        language::get_language_by_id,
        language::get_language_by_code,
        language::create_language,
        language::update_language,
        language::delete_language,
        language::set_default_language,
        language::toggle_language,
        language::reorder_languages,
        image::get_images,
        image::get_image_by_id,
        image::upload_image,
        image::update_image,
        image::delete_image,
        search::search,
        setting::get_settings,
        setting::get_setting_value,
        setting::create_setting,
        setting::update_setting,
        setting::delete_setting,
    ),
    components(schemas(ErrorDto)),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "The authenticated account"),
        (name = "article", description = "Articles and their translations"),
        (name = "tag", description = "Tags and their translations"),
        (name = "category", description = "Category tree"),
        (name = "language", description = "Language registry"),
        (name = "image", description = "Uploaded images"),
        (name = "search", description = "Keyword search"),
        (name = "setting", description = "Site settings"),
        (name = "util", description = "Utilities and health")
    )
)]
pub struct ApiDoc;
