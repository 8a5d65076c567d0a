use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_UPLOAD_MAX_SIZE: u64 = 10 * 1024 * 1024;
const JWT_ISSUER: &str = "babelpress";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_issuer: String,

    pub upload_dir: PathBuf,
    pub upload_max_size: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_issuer: JWT_ISSUER.to_string(),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            upload_max_size: match std::env::var("UPLOAD_MAX_SIZE") {
                Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "UPLOAD_MAX_SIZE".to_string(),
                    value,
                })?,
                Err(_) => DEFAULT_UPLOAD_MAX_SIZE,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
