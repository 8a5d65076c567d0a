use std::path::Path;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{article, auth, category, image, language, search, setting, tag, user, util},
    doc::ApiDoc,
    state::AppState,
};

/// Builds every route of the service.
///
/// Versioned JSON endpoints live under `/api/v1`. Stored uploads are served from
/// `upload_dir` under `/uploads`, and the OpenAPI document is browsable at `/swagger-ui`.
pub fn router(upload_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/health", get(util::health))
        .nest("/api/v1", api())
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

fn api() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/user", get(user::get_user))
        .route("/utils/generate-slug", post(util::generate_slug))
        // Articles
        .route("/articles", get(article::get_articles))
        .route("/articles/featured", get(article::get_featured_articles))
        .route("/articles/latest", get(article::get_latest_articles))
        .route("/articles/slug/{slug}", get(article::get_article_by_slug))
        .route(
            "/articles/category/{slug}",
            get(article::get_articles_by_category),
        )
        .route("/articles/{id}", get(article::get_article_by_id))
        .route("/admin/articles", post(article::create_article))
        .route(
            "/admin/articles/{id}",
            put(article::update_article).delete(article::delete_article),
        )
        // Tags
        .route("/tags", get(tag::get_tags))
        .route("/tags/slug/{slug}", get(tag::get_tag_by_slug))
        .route("/tags/{id}", get(tag::get_tag_by_id))
        .route("/admin/tags", post(tag::create_tag))
        .route(
            "/admin/tags/{id}",
            put(tag::update_tag).delete(tag::delete_tag),
        )
        // Categories
        .route("/categories", get(category::get_categories))
        .route(
            "/categories/slug/{slug}",
            get(category::get_category_by_slug),
        )
        .route("/categories/{id}", get(category::get_category_by_id))
        .route("/admin/categories", post(category::create_category))
        .route(
            "/admin/categories/{id}",
            put(category::update_category).delete(category::delete_category),
        )
        // Languages
        .route("/languages", get(language::get_languages))
        .route("/languages/{id}", get(language::get_language_by_id))
        .route("/languages/code/{code}", get(language::get_language_by_code))
        .route("/admin/languages", post(language::create_language))
        .route("/admin/languages/order", put(language::reorder_languages))
        .route(
            "/admin/languages/{id}",
            put(language::update_language).delete(language::delete_language),
        )
        .route(
            "/admin/languages/{id}/default",
            put(language::set_default_language),
        )
        .route("/admin/languages/{id}/toggle", put(language::toggle_language))
        // Images
        .route(
            "/images",
            get(image::get_images).post(image::upload_image),
        )
        .route(
            "/images/{id}",
            get(image::get_image_by_id)
                .put(image::update_image)
                .delete(image::delete_image),
        )
        // Search and settings
        .route("/search", get(search::search))
        .route("/settings", get(setting::get_settings))
        .route("/settings/{key}", get(setting::get_setting_value))
        .route("/admin/settings", post(setting::create_setting))
        .route(
            "/admin/settings/{id}",
            put(setting::update_setting).delete(setting::delete_setting),
        )
}
