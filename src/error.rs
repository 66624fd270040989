use thiserror::Error;

use crate::automation::AutomationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load PDF '{path}': {reason}")]
    PdfLoad { path: String, reason: String },

    #[error("Failed to read presentation container '{path}': {reason}")]
    Container { path: String, reason: String },

    #[error(transparent)]
    Automation(#[from] AutomationError),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Rename '{from}' -> '{to}' failed: {reason}")]
    Rename {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
