//! FILENAME: app/src-tauri/src/config.rs
// PURPOSE: Fixed window configuration record and the document the shell loads.
// CONTEXT: Built in code only. No config file, arguments or environment variables are read.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

// ============================================================================
// DEFAULTS
// ============================================================================

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;
pub const DEFAULT_DOCUMENT: &str = "index.html";
pub const DEFAULT_LABEL_PREFIX: &str = "main";

// ============================================================================
// WINDOW CONFIGURATION
// ============================================================================

/// How `width`/`height` are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentSizing {
    /// Dimensions describe the content area in logical pixels, native chrome excluded.
    Exact,
}

/// What the loaded document is allowed to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentPrivileges {
    /// The document gets no plugin permissions.
    Isolated,
    /// The document additionally gets the shell and dialog plugins.
    FullNativeAccess,
}

/// The window record every created window is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub content_sizing: ContentSizing,
    pub resizable: bool,
    /// `false` strips any menu bar from the window after creation.
    pub menu: bool,
    pub content_privileges: ContentPrivileges,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            content_sizing: ContentSizing::Exact,
            resizable: false,
            menu: false,
            content_privileges: ContentPrivileges::Isolated,
        }
    }
}

impl WindowConfig {
    pub fn to_json(&self) -> Result<String, ShellError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn grants_native_access(&self) -> bool {
        self.content_privileges == ContentPrivileges::FullNativeAccess
    }
}

// ============================================================================
// SHELL CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    pub window: WindowConfig,
    /// Path of the local document, relative to the bundled frontend directory.
    pub document: PathBuf,
    pub label_prefix: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            window: WindowConfig::default(),
            document: PathBuf::from(DEFAULT_DOCUMENT),
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }
}

impl ShellConfig {
    /// Label for the n-th window created by this process (1-based).
    /// Tauri rejects duplicate labels, so re-created windows get a suffix.
    pub fn window_label(&self, ordinal: usize) -> String {
        if ordinal <= 1 {
            self.label_prefix.clone()
        } else {
            format!("{}-{}", self.label_prefix, ordinal)
        }
    }
}
