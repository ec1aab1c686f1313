//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri Bridge).
// CONTEXT: Wires logging, plugins and the lifecycle reaction table into Tauri's event loop.
//          The `Lifecycle` context is owned by the run-event closure.

use tauri::{Manager, RunEvent};

pub mod config;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod logging;
pub mod platform;

pub use config::{ContentPrivileges, ContentSizing, ShellConfig, WindowConfig};
pub use error::ShellError;
pub use host::{TauriHost, WindowHost};
pub use lifecycle::{Lifecycle, LifecycleEvent, LifecycleState, Reaction};
pub use logging::{init_log_file, next_seq, write_log, write_log_raw};
pub use platform::Platform;


// ============================================================================
// STARTUP
// ============================================================================

fn init_logging(app: &tauri::App) {
    let result = app
        .path()
        .app_log_dir()
        .map_err(ShellError::from)
        .and_then(|dir| init_log_file(&dir));

    match result {
        Ok(path) => {
            log_info!("SYS", "Shell starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }
}

fn framework_log_plugin<R: tauri::Runtime>() -> tauri::plugin::TauriPlugin<R> {
    tauri_plugin_log::Builder::new()
        .clear_targets()
        .target(tauri_plugin_log::Target::new(
            tauri_plugin_log::TargetKind::Stdout,
        ))
        .level(log::LevelFilter::Warn)
        .build()
}

/// Process entry. Blocks on Tauri's event loop for the lifetime of the process.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let shell_config = ShellConfig::default();
    let native_access = shell_config.window.grants_native_access();
    let mut lifecycle = Lifecycle::new(shell_config, Platform::current());

    let app = tauri::Builder::default()
        .plugin(framework_log_plugin())
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(move |app| {
            init_logging(app);
            if native_access {
                log_warn!("SYS", "Loaded content runs with full native access");
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(move |app_handle, event| {
        let Some(lifecycle_event) = Lifecycle::translate(&event) else {
            return;
        };

        let mut host = TauriHost::new(app_handle);
        match lifecycle.handle(lifecycle_event, &mut host) {
            Ok(reaction) => {
                if Lifecycle::should_prevent_exit(&reaction) {
                    if let RunEvent::ExitRequested { api, .. } = &event {
                        api.prevent_exit();
                    }
                }
            }
            // Failures are left to the framework's own defaults.
            Err(e) => {
                log_error!("SYS", "{:?} handler failed: {}", lifecycle_event, e);
            }
        }
    });
}
