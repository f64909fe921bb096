//! nested-input library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does nested-input do?
//!
//! A nested compositor runs inside a window on a host desktop.  Input the
//! user gives that window arrives as host (SDL) events; the compositor's
//! clients expect Linux evdev codes.  This crate runs a dedicated loop thread
//! that:
//!
//! 1. Blocks the process notification signal, initialises the host and
//!    captures the pointer in relative mode, then signals readiness.
//! 2. Translates host scancodes and button ids to evdev codes.
//! 3. Intercepts `Meta+F` (fullscreen) and `Meta+N` (filter) on release.
//! 4. Forwards everything else to the compositor under its global lock.
//! 5. Keeps the advertised output mode in step with the window's display.

/// Application layer: input loop, hotkeys, output mode, lifecycle.
pub mod application;

/// Infrastructure layer: host and compositor adapters, signals, config.
pub mod infrastructure;

pub use application::bridge::{BridgeError, BridgeOptions, InputBridge};
pub use application::dispatch::{EventDispatcher, LoopExit};
pub use application::hotkeys::{HotkeyAction, HotkeyBindings};
