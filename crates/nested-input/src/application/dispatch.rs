//! Event dispatch: the body of the input loop.
//!
//! [`EventDispatcher::run`] blocks on the host event source and routes every
//! event it receives:
//!
//! | Host event          | Action                                                   |
//! |---------------------|----------------------------------------------------------|
//! | pointer motion      | forward `(dx, dy, time)`                                 |
//! | button down / up    | translate the button id, forward `(code, pressed, time)` |
//! | wheel               | forward `(-dx, -dy, time)`                               |
//! | key down / up       | translate the scancode; hotkey check; else forward       |
//! | window shown, moved | re-read the display refresh rate                         |
//! | window resized      | store the new size, then re-read the refresh rate        |
//! | anything else       | ignored                                                  |
//!
//! Every forward takes the downstream lock immediately before the injection
//! call and releases it immediately after.  The lock is never held while the
//! loop waits for the next host event.

use std::sync::{Arc, Mutex};

use nested_input_core::{KeyMapper, OutputState};
use tracing::{info, trace, warn};

use crate::application::hotkeys::{self, HotkeyBindings};
use crate::application::output_mode::DisplayModeTracker;
use crate::infrastructure::host::{HostBackend, HostError, HostEvent, WindowEvent};
use crate::infrastructure::sink::{inject_locked, DownstreamSink};

/// Why the input loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopExit {
    /// The event source was closed (shutdown requested).
    Closed,
    /// The event source failed; the message is the host error.
    Failed(String),
}

/// Routes host events to the downstream sink, the hotkey handler and the
/// display mode tracker.
pub struct EventDispatcher<H, S: ?Sized> {
    host: H,
    sink: Arc<Mutex<S>>,
    tracker: DisplayModeTracker,
    hotkeys: HotkeyBindings,
}

impl<H, S> EventDispatcher<H, S>
where
    H: HostBackend,
    S: DownstreamSink + ?Sized,
{
    pub fn new(
        host: H,
        sink: Arc<Mutex<S>>,
        output: Arc<OutputState>,
        hotkeys: HotkeyBindings,
    ) -> Self {
        Self {
            host,
            sink,
            tracker: DisplayModeTracker::new(output),
            hotkeys,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handles one host event.
    pub fn dispatch(&mut self, event: HostEvent) {
        match event {
            HostEvent::PointerMotion { dx, dy, time_ms } => {
                inject_locked(&self.sink, "motion", |s| s.inject_motion(dx, dy, time_ms));
            }
            HostEvent::Button { button, pressed, time_ms } => {
                let code = KeyMapper::button_to_evdev(button);
                inject_locked(&self.sink, "button", |s| s.inject_button(code, pressed, time_ms));
            }
            HostEvent::Wheel { dx, dy, time_ms } => {
                let (dx, dy) = (dx.saturating_neg(), dy.saturating_neg());
                inject_locked(&self.sink, "wheel", |s| s.inject_wheel(dx, dy, time_ms));
            }
            HostEvent::Key { scancode, pressed, time_ms } => {
                let modifiers = self.host.modifier_state();
                let key = KeyMapper::scancode_to_evdev(scancode);
                if let Some(action) = self.hotkeys.action_for(key, pressed, modifiers) {
                    hotkeys::apply(action, self.tracker.output(), &mut self.host);
                    return;
                }
                let code = key.code();
                inject_locked(&self.sink, "key", |s| s.inject_key(code, pressed, time_ms));
            }
            HostEvent::Window(WindowEvent::Moved | WindowEvent::Shown) => {
                self.tracker.refresh(&self.host);
            }
            HostEvent::Window(WindowEvent::Resized { width, height }) => {
                self.tracker.resize(width, height, &self.host);
            }
            HostEvent::Window(WindowEvent::Other) | HostEvent::Other => {
                trace!(?event, "ignored host event");
            }
        }
    }

    /// Runs until the host event source closes or fails.
    pub fn run(mut self) -> LoopExit {
        info!("input loop running");
        loop {
            match self.host.wait_event() {
                Ok(event) => self.dispatch(event),
                Err(HostError::Closed) => {
                    info!("host event source closed; input loop exiting");
                    return LoopExit::Closed;
                }
                Err(e) => {
                    warn!("host event source failed; input loop exiting: {e}");
                    return LoopExit::Failed(e.to_string());
                }
            }
        }
    }
}
