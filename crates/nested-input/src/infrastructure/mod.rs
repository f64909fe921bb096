//! Infrastructure layer for the input bridge.
//!
//! Contains the adapters at the edges of the input loop: the host windowing
//! subsystem, the downstream compositor, per-thread signal masking and
//! configuration storage.
//!
//! # Sub-modules
//!
//! - **`host`** – the [`HostEventSource`](host::HostEventSource) and
//!   [`HostDisplay`](host::HostDisplay) traits, with an SDL2 implementation
//!   (feature `sdl`) and a channel-fed `ScriptedHost` that is always compiled
//!   so tests run without a display.
//!
//! - **`sink`** – the [`DownstreamSink`](sink::DownstreamSink) injection trait,
//!   the lock-scoped forwarding helper, and the logging and recording sinks.
//!
//! - **`signal`** – blocks the process notification signal on the loop thread.
//!
//! - **`storage`** – TOML configuration loading.

pub mod host;
pub mod signal;
pub mod sink;
pub mod storage;
