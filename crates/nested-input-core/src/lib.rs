//! # nested-input-core
//!
//! Shared library for nested-input containing the scancode and button
//! translation tables and the output state the input loop publishes.
//!
//! It has no dependency on the host windowing system or on the compositor.
//!
//! - **`keymap`** – SDL scancode → evdev keycode table and SDL button →
//!   evdev button mapping.  Both are total: unmapped input yields
//!   `KEY_RESERVED` or `0`.
//!
//! - **`domain`** – [`OutputState`] (resolution, refresh rate, fullscreen and
//!   filter toggles, readable from any thread) and [`ModifierState`].

pub mod domain;
pub mod keymap;

pub use domain::modifiers::{Modifier, ModifierState};
pub use domain::output::{OutputMode, OutputState};
pub use keymap::{EvdevButton, EvdevKey, KeyMapper};
