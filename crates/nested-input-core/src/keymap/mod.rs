//! Key and button translation from the host input subsystem to evdev codes.
//!
//! The host reports SDL scancodes and SDL button ids; the compositor expects
//! Linux evdev codes.  Both directions are total: anything without a mapping
//! becomes `KEY_RESERVED` / `0` rather than an error.

pub mod button;
pub mod evdev;
pub mod scancode;

pub use evdev::{EvdevButton, EvdevKey};
pub use scancode::SCANCODE_TABLE_LEN;

/// Unified key mapper over both translation tables.
pub struct KeyMapper;

impl KeyMapper {
    /// Translates an SDL scancode to an [`EvdevKey`].
    ///
    /// Returns [`EvdevKey::Reserved`] if no mapping exists for `scancode`.
    pub fn scancode_to_evdev(scancode: u32) -> EvdevKey {
        scancode::scancode_to_evdev(scancode)
    }

    /// Translates an SDL mouse button id to an evdev `BTN_*` code.
    ///
    /// Returns `0` for ids SDL does not define.
    pub fn button_to_evdev(id: u8) -> u32 {
        button::host_button_to_evdev(id)
    }
}
