//! Unified application error type.
//! All modules (catalog, store, core, cli, utils) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / encoding
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Catalog / progress files
    // ---------------------------
    #[error("Missing catalog file: {0}")]
    CatalogNotFound(String),

    #[error("Invalid catalog file: {0}")]
    CatalogFormat(String),

    #[error("Invalid progress file: {0}")]
    ProgressFormat(String),

    // ---------------------------
    // Lookup / logic errors
    // ---------------------------
    #[error("No peak matches '{0}'")]
    PeakNotFound(String),

    #[error("'{query}' matches several peaks: {}", candidates.join(", "))]
    AmbiguousPeak {
        query: String,
        candidates: Vec<String>,
    },

    #[error("{0} is not marked as summited yet")]
    NotBagged(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD or 'today')")]
    InvalidDate(String),

    #[error("Invalid activity link: {0} (expected an http(s) URL)")]
    InvalidLink(String),

    // ---------------------------
    // Photo store
    // ---------------------------
    #[error("Photo error: {0}")]
    Photo(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
