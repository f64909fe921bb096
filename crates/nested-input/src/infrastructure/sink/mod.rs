//! Downstream compositor injection interface.
//!
//! The input loop hands every forwarded event to a [`DownstreamSink`] shared
//! as `Arc<Mutex<S>>`.  The mutex is the compositor's global lock: the loop
//! takes it immediately before one injection call and drops it immediately
//! after, so compositor threads are never starved while the loop waits for
//! host input.
//!
//! # Sub-modules
//!
//! - **`log`** – [`LogSink`](log::LogSink), emits one tracing event per
//!   injection.  Used by the binary when no compositor is attached.
//! - **`mock`** – [`RecordingSink`](mock::RecordingSink), records calls for
//!   test assertions.

use std::sync::Mutex;

use thiserror::Error;
use tracing::warn;

pub mod log;
pub mod mock;

/// Error type for injection calls.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The compositor rejected the event.
    #[error("injection rejected: {0}")]
    Rejected(String),
    /// The compositor is shutting down and no longer accepts input.
    #[error("compositor is not accepting input")]
    Unavailable,
}

/// Input-injection interface of the downstream compositor.
///
/// Every method corresponds to one forwarded host event.  Codes are already
/// in evdev space and timestamps are host milliseconds.
pub trait DownstreamSink: Send {
    /// Relative pointer motion.
    fn inject_motion(&mut self, dx: i32, dy: i32, time_ms: u32) -> Result<(), SinkError>;

    /// Pointer button; `code` is a `BTN_*` code, or 0 for unmapped buttons.
    fn inject_button(&mut self, code: u32, pressed: bool, time_ms: u32) -> Result<(), SinkError>;

    /// Scroll, already in compositor sign convention.
    fn inject_wheel(&mut self, dx: i32, dy: i32, time_ms: u32) -> Result<(), SinkError>;

    /// Key; `code` is a `KEY_*` code, 0 for unmapped scancodes.
    fn inject_key(&mut self, code: u32, pressed: bool, time_ms: u32) -> Result<(), SinkError>;
}

/// Runs one injection call with the downstream lock held.
///
/// The guard lives only for the duration of `call`.  A poisoned lock is
/// recovered and logged.  Injection errors are logged and swallowed; the
/// loop keeps running.
pub fn inject_locked<S, F>(sink: &Mutex<S>, what: &'static str, call: F)
where
    S: DownstreamSink + ?Sized,
    F: FnOnce(&mut S) -> Result<(), SinkError>,
{
    let mut guard = sink.lock().unwrap_or_else(|poisoned| {
        warn!("downstream lock was poisoned; recovering");
        poisoned.into_inner()
    });
    if let Err(e) = call(&mut *guard) {
        warn!(event = what, "downstream injection failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::mock::RecordingSink;
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_inject_locked_releases_lock_after_call() {
        // Arrange
        let sink = Arc::new(Mutex::new(RecordingSink::new()));

        // Act
        inject_locked(&sink, "motion", |s| s.inject_motion(3, -4, 7));

        // Assert
        assert!(sink.try_lock().is_ok(), "lock must be free after the call");
        assert_eq!(sink.lock().unwrap().motions(), vec![(3, -4, 7)]);
    }

    #[test]
    fn test_inject_locked_swallows_sink_errors() {
        let mut failing = RecordingSink::new();
        failing.should_fail = true;
        let sink = Mutex::new(failing);

        inject_locked(&sink, "key", |s| s.inject_key(30, true, 0));

        assert!(sink.lock().unwrap().calls.is_empty());
    }

    #[test]
    fn test_inject_locked_recovers_poisoned_lock() {
        // Arrange: poison the mutex by panicking while holding it
        let sink = Arc::new(Mutex::new(RecordingSink::new()));
        let clone = Arc::clone(&sink);
        let _ = std::thread::spawn(move || {
            let _guard = clone.lock().unwrap();
            panic!("injector panicked");
        })
        .join();
        assert!(sink.is_poisoned());

        // Act
        inject_locked(&sink, "button", |s| s.inject_button(0x110, true, 1));

        // Assert
        let guard = sink.lock().unwrap_or_else(|p| p.into_inner());
        assert_eq!(guard.calls.len(), 1);
    }
}
