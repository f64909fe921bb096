//! Modifier-key snapshot in the host's `KMOD_*` bit layout.

use serde::{Deserialize, Serialize};

/// Bitmask of modifiers held when a key event was read.
///
/// Bit positions match SDL's `SDL_Keymod`, so the SDL backend can pass
/// `SDL_GetModState()` through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierState(pub u16);

impl ModifierState {
    pub const LEFT_SHIFT: u16 = 0x0001;
    pub const RIGHT_SHIFT: u16 = 0x0002;
    pub const LEFT_CTRL: u16 = 0x0040;
    pub const RIGHT_CTRL: u16 = 0x0080;
    pub const LEFT_ALT: u16 = 0x0100;
    pub const RIGHT_ALT: u16 = 0x0200;
    pub const LEFT_META: u16 = 0x0400;
    pub const RIGHT_META: u16 = 0x0800;
    pub const NUM_LOCK: u16 = 0x1000;
    pub const CAPS_LOCK: u16 = 0x2000;

    /// No modifiers held.
    pub const NONE: ModifierState = ModifierState(0);

    /// Returns `true` if `modifier` is held in this snapshot.
    pub fn holds(self, modifier: Modifier) -> bool {
        self.0 & modifier.mask() != 0
    }

    /// Returns a copy with `modifier` added.
    pub fn with(self, modifier: Modifier) -> Self {
        ModifierState(self.0 | modifier.mask())
    }
}

/// A single modifier key, used to name the hotkey command modifier in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    LeftShift,
    RightShift,
    LeftCtrl,
    RightCtrl,
    LeftAlt,
    RightAlt,
    LeftMeta,
    RightMeta,
}

impl Modifier {
    /// Returns this modifier's bit in [`ModifierState`].
    pub const fn mask(self) -> u16 {
        match self {
            Modifier::LeftShift => ModifierState::LEFT_SHIFT,
            Modifier::RightShift => ModifierState::RIGHT_SHIFT,
            Modifier::LeftCtrl => ModifierState::LEFT_CTRL,
            Modifier::RightCtrl => ModifierState::RIGHT_CTRL,
            Modifier::LeftAlt => ModifierState::LEFT_ALT,
            Modifier::RightAlt => ModifierState::RIGHT_ALT,
            Modifier::LeftMeta => ModifierState::LEFT_META,
            Modifier::RightMeta => ModifierState::RIGHT_META,
        }
    }
}
