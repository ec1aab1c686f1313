//! FILENAME: app/src-tauri/src/host.rs
// PURPOSE: The seam between the lifecycle table and the window framework.
// CONTEXT: `TauriHost` is the production implementation. Lifecycle tests use a
//          recording implementation; `TauriHost` itself is tested on the mock runtime.

use std::path::Path;

use tauri::ipc::CapabilityBuilder;
use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindowBuilder};

use crate::config::WindowConfig;
use crate::error::ShellError;
use crate::{log_debug, log_warn};

/// Plugin permissions handed to documents that run with full native access.
pub const NATIVE_ACCESS_PERMISSIONS: &[&str] = &["shell:default", "dialog:default"];

/// Window operations the bootstrapper needs from the framework.
pub trait WindowHost {
    /// Number of windows currently open.
    fn open_window_count(&self) -> usize;

    /// Create one window from `config` and load `document` into it.
    fn create_window(
        &mut self,
        label: &str,
        config: &WindowConfig,
        document: &Path,
    ) -> Result<(), ShellError>;

    /// End the process with `code`.
    fn quit(&mut self, code: i32);
}

// ============================================================================
// TAURI IMPLEMENTATION
// ============================================================================

pub struct TauriHost<'a, R: Runtime> {
    app: &'a AppHandle<R>,
}

impl<'a, R: Runtime> TauriHost<'a, R> {
    pub fn new(app: &'a AppHandle<R>) -> Self {
        TauriHost { app }
    }

    fn grant_native_access(&self, label: &str) -> Result<(), ShellError> {
        log_warn!(
            "HOST",
            "window '{}' granted full native access: {:?}",
            label,
            NATIVE_ACCESS_PERMISSIONS
        );
        let capability = NATIVE_ACCESS_PERMISSIONS
            .iter()
            .fold(
                CapabilityBuilder::new(format!("{}-native-access", label)).window(label),
                |builder, permission| builder.permission(*permission),
            );
        self.app.add_capability(capability)?;
        Ok(())
    }
}

impl<R: Runtime> WindowHost for TauriHost<'_, R> {
    fn open_window_count(&self) -> usize {
        self.app.webview_windows().len()
    }

    fn create_window(
        &mut self,
        label: &str,
        config: &WindowConfig,
        document: &Path,
    ) -> Result<(), ShellError> {
        if config.grants_native_access() {
            self.grant_native_access(label)?;
        }

        // Inner size is the content area in logical pixels.
        let window =
            WebviewWindowBuilder::new(self.app, label, WebviewUrl::App(document.to_path_buf()))
                .inner_size(config.width, config.height)
                .resizable(config.resizable)
                .build()
                .map_err(|e| ShellError::Window {
                    label: label.to_string(),
                    reason: e.to_string(),
                })?;

        if !config.menu {
            window.remove_menu()?;
        }

        log_debug!(
            "HOST",
            "window '{}' created, document={}",
            label,
            document.display()
        );
        Ok(())
    }

    fn quit(&mut self, code: i32) {
        self.app.exit(code);
    }
}
