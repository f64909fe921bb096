//! Application layer: the input loop and its lifecycle.
//!
//! - **`bridge`** – [`InputBridge`](bridge::InputBridge): spawns the loop
//!   thread, waits for host setup, shuts the loop down.
//! - **`dispatch`** – [`EventDispatcher`](dispatch::EventDispatcher): routes
//!   each host event to the sink, the hotkey handler or the mode tracker.
//! - **`hotkeys`** – command-modifier chords for fullscreen and filter.
//! - **`output_mode`** – keeps the shared refresh rate and resolution current.

pub mod bridge;
pub mod dispatch;
pub mod hotkeys;
pub mod output_mode;
