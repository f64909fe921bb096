//! Domain types shared by the input loop and its readers.
//!
//! Nothing here touches the host windowing system or the compositor; both
//! types can be built and tested on any platform.

/// Modifier snapshot and modifier names.
pub mod modifiers;

/// Output mode and the fullscreen / filter toggles.
pub mod output;
