//! Output mode and display toggles shared between the input loop and readers.
//!
//! The input loop thread is the only writer.  Everything else (the renderer,
//! the compositor's output advertisement) reads through the accessors below
//! at any time, from any thread, without taking a lock.
//!
//! # Consistency
//!
//! Width and height are packed into a single `AtomicU64` so a reader never
//! sees the width of one resize paired with the height of another.  The
//! refresh rate and the two flags are independent atomics with `Relaxed`
//! ordering: a reader may observe a slightly stale value, which is harmless
//! for every consumer in this system.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default output width before the window reports its size.
pub const DEFAULT_WIDTH: u32 = 1280;
/// Default output height before the window reports its size.
pub const DEFAULT_HEIGHT: u32 = 720;
/// Default refresh rate (Hz) before the first display query succeeds.
pub const DEFAULT_REFRESH_RATE: u32 = 60;

/// Point-in-time copy of the output mode.
///
/// Fields missing from a deserialized mode take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputMode {
    pub width: u32,
    pub height: u32,
    /// Refresh rate in Hz.  `0` means the host reported "unspecified".
    pub refresh_rate: u32,
}

impl Default for OutputMode {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            refresh_rate: DEFAULT_REFRESH_RATE,
        }
    }
}

/// Live output mode plus the fullscreen and filter toggles.
#[derive(Debug)]
pub struct OutputState {
    /// `width << 32 | height`
    resolution: AtomicU64,
    refresh_rate: AtomicU32,
    fullscreen: AtomicBool,
    filter: AtomicBool,
}

fn pack(width: u32, height: u32) -> u64 {
    (u64::from(width) << 32) | u64::from(height)
}

fn unpack(packed: u64) -> (u32, u32) {
    ((packed >> 32) as u32, packed as u32)
}

impl OutputState {
    /// Creates state seeded with `initial`; both toggles start off.
    pub fn new(initial: OutputMode) -> Self {
        Self {
            resolution: AtomicU64::new(pack(initial.width, initial.height)),
            refresh_rate: AtomicU32::new(initial.refresh_rate),
            fullscreen: AtomicBool::new(false),
            filter: AtomicBool::new(false),
        }
    }

    pub fn width(&self) -> u32 {
        self.resolution().0
    }

    pub fn height(&self) -> u32 {
        self.resolution().1
    }

    /// Returns `(width, height)` from a single atomic load.
    pub fn resolution(&self) -> (u32, u32) {
        unpack(self.resolution.load(Ordering::Relaxed))
    }

    pub fn refresh_rate(&self) -> u32 {
        self.refresh_rate.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of the whole output mode.
    pub fn mode(&self) -> OutputMode {
        let (width, height) = self.resolution();
        OutputMode {
            width,
            height,
            refresh_rate: self.refresh_rate(),
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.load(Ordering::Relaxed)
    }

    /// Whether the "filter game window" toggle is on.
    pub fn filter_enabled(&self) -> bool {
        self.filter.load(Ordering::Relaxed)
    }

    /// Stores a new resolution.  Input loop only.
    pub fn set_resolution(&self, width: u32, height: u32) {
        trace!(width, height, "output resolution updated");
        self.resolution.store(pack(width, height), Ordering::Relaxed);
    }

    /// Stores a new refresh rate.  Input loop only.
    pub fn set_refresh_rate(&self, hz: u32) {
        trace!(hz, "output refresh rate updated");
        self.refresh_rate.store(hz, Ordering::Relaxed);
    }

    /// Inverts the fullscreen flag and returns the new value.
    pub fn toggle_fullscreen(&self) -> bool {
        !self.fullscreen.fetch_xor(true, Ordering::Relaxed)
    }

    /// Inverts the filter flag and returns the new value.
    pub fn toggle_filter(&self) -> bool {
        !self.filter.fetch_xor(true, Ordering::Relaxed)
    }
}

impl Default for OutputState {
    fn default() -> Self {
        Self::new(OutputMode::default())
    }
}
