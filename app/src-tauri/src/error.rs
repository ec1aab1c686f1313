//! FILENAME: app/src-tauri/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Window '{label}' could not be created: {reason}")]
    Window { label: String, reason: String },

    #[error("Lock error: {0}")]
    Lock(String),
}
