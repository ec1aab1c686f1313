//! FILENAME: app/src-tauri/src/lifecycle.rs
// PURPOSE: Application bootstrapper. Reacts to framework lifecycle events.
// CONTEXT: One explicit reaction table over three events (ready, activate,
//          window-all-closed). State lives in the `Lifecycle` context object
//          which `run` owns and threads through Tauri's event callback.

use tauri::RunEvent;

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::host::WindowHost;
use crate::platform::Platform;
use crate::{log_debug, log_enter, log_exit, log_info};

// ============================================================================
// TYPES
// ============================================================================

/// Framework events the bootstrapper reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Ready,
    Activate,
    WindowAllClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Waiting for the framework's ready signal. No window may be created yet.
    Starting,
    Running,
    /// All windows closed, process kept alive awaiting activation.
    Resident,
    Quitting,
}

/// What a handler did in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    WindowCreated { label: String },
    StayResident,
    Quit { code: i32 },
    Ignored,
}

// ============================================================================
// LIFECYCLE CONTEXT
// ============================================================================

pub struct Lifecycle {
    config: ShellConfig,
    platform: Platform,
    state: LifecycleState,
    windows_created: usize,
}

impl Lifecycle {
    pub fn new(config: ShellConfig, platform: Platform) -> Self {
        Lifecycle {
            config,
            platform,
            state: LifecycleState::Starting,
            windows_created: 0,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Total windows this process has created, including closed ones.
    pub fn windows_created(&self) -> usize {
        self.windows_created
    }

    /// Map a Tauri run event onto the reaction table's vocabulary.
    pub fn translate(event: &RunEvent) -> Option<LifecycleEvent> {
        match event {
            RunEvent::Ready => Some(LifecycleEvent::Ready),
            #[cfg(target_os = "macos")]
            RunEvent::Reopen {
                has_visible_windows,
                ..
            } => Self::reopen_event(*has_visible_windows),
            RunEvent::ExitRequested { code, .. } => Self::exit_request_event(*code),
            _ => None,
        }
    }

    /// A dock reopen only counts as activation when no window is visible.
    pub fn reopen_event(has_visible_windows: bool) -> Option<LifecycleEvent> {
        if has_visible_windows {
            None
        } else {
            Some(LifecycleEvent::Activate)
        }
    }

    /// `code` is only None when the framework exits because the last window closed.
    /// An explicit `exit(code)`, including the shell's own quit, is not fed back.
    pub fn exit_request_event(code: Option<i32>) -> Option<LifecycleEvent> {
        match code {
            None => Some(LifecycleEvent::WindowAllClosed),
            Some(_) => None,
        }
    }

    /// Whether the exit request that produced `reaction` must be cancelled.
    pub fn should_prevent_exit(reaction: &Reaction) -> bool {
        matches!(reaction, Reaction::StayResident)
    }

    /// The reaction table.
    pub fn handle<H: WindowHost>(
        &mut self,
        event: LifecycleEvent,
        host: &mut H,
    ) -> Result<Reaction, ShellError> {
        log_enter!("LIFECYCLE", "handle", "event={:?} state={:?}", event, self.state);

        let reaction = match event {
            LifecycleEvent::Ready => self.on_ready(host)?,
            LifecycleEvent::Activate => self.on_activate(host)?,
            LifecycleEvent::WindowAllClosed => self.on_window_all_closed(host),
        };

        log_exit!("LIFECYCLE", "handle", "reaction={:?} state={:?}", reaction, self.state);
        Ok(reaction)
    }

    fn on_ready<H: WindowHost>(&mut self, host: &mut H) -> Result<Reaction, ShellError> {
        if self.state != LifecycleState::Starting {
            log_debug!("LIFECYCLE", "duplicate ready signal ignored");
            return Ok(Reaction::Ignored);
        }

        log_info!(
            "LIFECYCLE",
            "ready on {}, window config {}",
            self.platform,
            self.config.window.to_json()?
        );
        let reaction = self.create_window(host)?;
        self.state = LifecycleState::Running;
        Ok(reaction)
    }

    fn on_activate<H: WindowHost>(&mut self, host: &mut H) -> Result<Reaction, ShellError> {
        if self.state == LifecycleState::Starting || self.state == LifecycleState::Quitting {
            return Ok(Reaction::Ignored);
        }

        let open = host.open_window_count();
        if open > 0 {
            log_debug!("LIFECYCLE", "activate with {} open window(s), nothing to do", open);
            return Ok(Reaction::Ignored);
        }

        let reaction = self.create_window(host)?;
        self.state = LifecycleState::Running;
        Ok(reaction)
    }

    fn on_window_all_closed<H: WindowHost>(&mut self, host: &mut H) -> Reaction {
        if self.platform.keeps_running_without_windows() {
            self.state = LifecycleState::Resident;
            log_info!("LIFECYCLE", "all windows closed, staying resident on {}", self.platform);
            return Reaction::StayResident;
        }

        self.state = LifecycleState::Quitting;
        log_info!("LIFECYCLE", "all windows closed, quitting");
        host.quit(0);
        Reaction::Quit { code: 0 }
    }

    /// Single window creation routine shared by ready and activate.
    fn create_window<H: WindowHost>(&mut self, host: &mut H) -> Result<Reaction, ShellError> {
        let label = self.config.window_label(self.windows_created + 1);
        host.create_window(&label, &self.config.window, &self.config.document)?;
        self.windows_created += 1;
        log_info!("LIFECYCLE", "created window '{}'", label);
        Ok(Reaction::WindowCreated { label })
    }
}
