//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for shell lifecycle integration tests.

use std::path::{Path, PathBuf};

use shell_lib::{
    Lifecycle, LifecycleEvent, Platform, Reaction, ShellConfig, ShellError, WindowConfig,
    WindowHost,
};

/// A window as the recording host saw it being created.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWindow {
    pub label: String,
    pub config: WindowConfig,
    pub document: PathBuf,
    pub open: bool,
}

/// In-memory stand-in for the window framework.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub windows: Vec<RecordedWindow>,
    pub quit_codes: Vec<i32>,
    /// When set, the next `create_window` call fails with this reason.
    pub fail_next_create: Option<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user closing every open window.
    pub fn close_all(&mut self) {
        for window in &mut self.windows {
            window.open = false;
        }
    }
}

impl WindowHost for RecordingHost {
    fn open_window_count(&self) -> usize {
        self.windows.iter().filter(|w| w.open).count()
    }

    fn create_window(
        &mut self,
        label: &str,
        config: &WindowConfig,
        document: &Path,
    ) -> Result<(), ShellError> {
        if let Some(reason) = self.fail_next_create.take() {
            return Err(ShellError::Window {
                label: label.to_string(),
                reason,
            });
        }
        self.windows.push(RecordedWindow {
            label: label.to_string(),
            config: config.clone(),
            document: document.to_path_buf(),
            open: true,
        });
        Ok(())
    }

    fn quit(&mut self, code: i32) {
        self.quit_codes.push(code);
    }
}

/// Test harness pairing a lifecycle table with a recording host.
pub struct TestHarness {
    pub lifecycle: Lifecycle,
    pub host: RecordingHost,
}

impl TestHarness {
    /// Harness for a platform where closing the last window ends the process.
    pub fn new() -> Self {
        Self::on(Platform::Linux)
    }

    /// Harness for the platform that stays resident without windows.
    pub fn resident() -> Self {
        Self::on(Platform::MacOs)
    }

    pub fn on(platform: Platform) -> Self {
        Self::with_config(ShellConfig::default(), platform)
    }

    pub fn with_config(config: ShellConfig, platform: Platform) -> Self {
        TestHarness {
            lifecycle: Lifecycle::new(config, platform),
            host: RecordingHost::new(),
        }
    }

    pub fn send(&mut self, event: LifecycleEvent) -> Result<Reaction, ShellError> {
        self.lifecycle.handle(event, &mut self.host)
    }

    /// Send an event that is expected to succeed.
    pub fn dispatch(&mut self, event: LifecycleEvent) -> Reaction {
        self.send(event).unwrap()
    }

    pub fn open_window_count(&self) -> usize {
        self.host.open_window_count()
    }
}
