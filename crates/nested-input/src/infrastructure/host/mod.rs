//! Host windowing/input subsystem adapters.
//!
//! The input loop consumes a blocking stream of [`HostEvent`]s and makes a
//! handful of display queries against the window it is tracking.  Both sides
//! are abstracted here so the loop can run against SDL in production and
//! against a scripted source in tests.
//!
//! # Threading
//!
//! A host backend is constructed *on* the loop thread (SDL requires its video
//! subsystem to be driven from the thread that initialised it), so backends
//! do not need to be `Send`.  The only piece that crosses threads is the
//! [`HostCloser`], which the owner of the loop uses to make the blocking
//! [`HostEventSource::wait_event`] return.

use nested_input_core::ModifierState;
use thiserror::Error;

pub mod mock;

#[cfg(feature = "sdl")]
pub mod sdl;

/// Error type for host operations.
#[derive(Debug, Error)]
pub enum HostError {
    /// Subsystem initialisation failed (video, events, relative mouse).
    #[error("host initialisation failed: {0}")]
    Init(String),
    /// The event source was closed; no more events will arrive.
    #[error("host event source closed")]
    Closed,
    /// Waiting for the next event failed.
    #[error("host event source failed: {0}")]
    EventSource(String),
    /// A display or mode query failed.
    #[error("display query failed: {0}")]
    Query(String),
    /// There is no window to query or act on yet.
    #[error("no tracked window")]
    NoWindow,
    /// A window operation (e.g. fullscreen) failed.
    #[error("window operation failed: {0}")]
    Window(String),
}

/// A window state change the loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Moved,
    Shown,
    Resized { width: u32, height: u32 },
    /// Any other window notification (focus, expose, ...).
    Other,
}

/// One event dequeued from the host.
///
/// Timestamps are host milliseconds, passed through to the compositor as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Relative pointer motion.
    PointerMotion { dx: i32, dy: i32, time_ms: u32 },
    /// Mouse button press or release; `button` is the host button id.
    Button { button: u8, pressed: bool, time_ms: u32 },
    /// Wheel scroll in host convention (positive y = away from the user).
    Wheel { dx: i32, dy: i32, time_ms: u32 },
    /// Key press or release; `scancode` is the host scancode.
    Key { scancode: u32, pressed: bool, time_ms: u32 },
    Window(WindowEvent),
    /// Anything the loop does not handle.
    Other,
}

/// Unblocks a running [`HostEventSource::wait_event`] from another thread.
pub trait HostCloser: Send {
    /// Requests that the event source report [`HostError::Closed`].
    ///
    /// Must be safe to call more than once and after the source is gone.
    fn close(&self);
}

/// Blocking source of host input events.
pub trait HostEventSource {
    /// Blocks until the next event is available.
    ///
    /// # Errors
    ///
    /// Returns an error only when the source has been closed or has failed;
    /// the input loop stops on the first error.
    fn wait_event(&mut self) -> Result<HostEvent, HostError>;

    /// Returns the modifiers held right now.
    fn modifier_state(&self) -> ModifierState;

    /// Switches the pointer to relative-motion capture.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Init`] if the host refuses relative mode.
    fn enable_relative_mouse(&mut self) -> Result<(), HostError>;

    /// Returns a handle that can close this source from another thread.
    fn closer(&self) -> Box<dyn HostCloser>;
}

/// Display queries and window control for the tracked window.
pub trait HostDisplay {
    /// Index of the display currently backing the tracked window.
    fn window_display_index(&self) -> Result<i32, HostError>;

    /// Refresh rate (Hz) of the given display's current desktop mode.
    fn display_refresh_rate(&self, display_index: i32) -> Result<u32, HostError>;

    /// Enters (`true`) or leaves (`false`) desktop fullscreen.
    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), HostError>;
}

/// A complete host: event source plus display control.
pub trait HostBackend: HostEventSource + HostDisplay {}

impl<T: HostEventSource + HostDisplay> HostBackend for T {}
