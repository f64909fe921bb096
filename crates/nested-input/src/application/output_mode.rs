//! Display mode tracking for the window the input loop is attached to.
//!
//! The refresh rate advertised to the compositor follows whichever display
//! the host window currently sits on.  The loop calls [`DisplayModeTracker::refresh`]
//! when the window is shown or moved, and [`DisplayModeTracker::resize`] when
//! its size changes.
//!
//! Query failures are routine (the window may be mid-move between displays,
//! or not mapped yet) and are never surfaced: the cached rate is simply kept.

use std::sync::Arc;

use nested_input_core::OutputState;
use tracing::{debug, trace};

use crate::infrastructure::host::HostDisplay;

/// Writes host display queries into the shared [`OutputState`].
#[derive(Debug, Clone)]
pub struct DisplayModeTracker {
    output: Arc<OutputState>,
}

impl DisplayModeTracker {
    pub fn new(output: Arc<OutputState>) -> Self {
        Self { output }
    }

    pub fn output(&self) -> &Arc<OutputState> {
        &self.output
    }

    /// Re-reads the refresh rate of the window's current display.
    ///
    /// Returns `true` if the cached rate was overwritten.  On any failure the
    /// cached rate is left untouched and the failure is logged at `debug`.
    pub fn refresh<D>(&self, display: &D) -> bool
    where
        D: HostDisplay + ?Sized,
    {
        let index = match display.window_display_index() {
            Ok(index) => index,
            Err(e) => {
                debug!("display index unavailable, keeping refresh rate: {e}");
                return false;
            }
        };
        match display.display_refresh_rate(index) {
            Ok(hz) => {
                trace!(display = index, hz, "display mode queried");
                self.output.set_refresh_rate(hz);
                true
            }
            Err(e) => {
                debug!(display = index, "display mode unavailable, keeping refresh rate: {e}");
                false
            }
        }
    }

    /// Stores the new window size, then re-reads the refresh rate.
    pub fn resize<D>(&self, width: u32, height: u32, display: &D)
    where
        D: HostDisplay + ?Sized,
    {
        self.output.set_resolution(width, height);
        self.refresh(display);
    }
}
