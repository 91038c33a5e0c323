use std::path::PathBuf;

use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read image {1}: {0}")]
    ImageRead(std::io::Error, PathBuf),
    #[error("Unsupported image format: {0} (expected PNG or JPEG)")]
    UnsupportedFormat(String),
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("UI Error: {0}")]
    Ui(String),
}

// Recipe catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {1}: {0}")]
    ReadError(std::io::Error, PathBuf),
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Catalog is empty")]
    Empty,
}
