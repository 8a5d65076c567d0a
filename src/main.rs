mod model;
mod server;

use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    router, startup,
};

/// Room left for the non-file parts of a multipart upload.
const MULTIPART_OVERHEAD: u64 = 64 * 1024;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_languages(&db).await?;

    let body_limit = (config.upload_max_size + MULTIPART_OVERHEAD) as usize;
    let app = router::router(&config.upload_dir)
        .with_state(startup::build_state(db, &config))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(InternalError::from)?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .await
        .map_err(InternalError::from)?;

    Ok(())
}
