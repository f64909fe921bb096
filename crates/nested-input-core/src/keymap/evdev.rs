//! Linux evdev key and button codes (`linux/input-event-codes.h`).
//!
//! This is the normalized code space handed to the compositor's injection
//! interface.  Only the keys reachable from the host scancode table are
//! listed; everything else collapses to [`EvdevKey::Reserved`].
//!
//! # Why evdev codes?
//!
//! The nested compositor forwards input to Wayland clients through
//! `wl_keyboard` / `wl_pointer`, and both of those speak evdev codes.
//! Translating once at the host boundary means nothing downstream ever
//! sees a host-specific identifier.

use serde::{Deserialize, Serialize};

/// Evdev `KEY_*` code.
///
/// The numeric value of each variant is its code in `input-event-codes.h`.
/// [`EvdevKey::Reserved`] (`KEY_RESERVED`, 0) is the "unmapped" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum EvdevKey {
    /// `KEY_RESERVED`: no evdev equivalent.
    Reserved = 0,

    Esc = 1,
    Key1 = 2,
    Key2 = 3,
    Key3 = 4,
    Key4 = 5,
    Key5 = 6,
    Key6 = 7,
    Key7 = 8,
    Key8 = 9,
    Key9 = 10,
    Key0 = 11,
    Minus = 12,
    Equal = 13,
    Backspace = 14,
    Tab = 15,
    KeyQ = 16,
    KeyW = 17,
    KeyE = 18,
    KeyR = 19,
    KeyT = 20,
    KeyY = 21,
    KeyU = 22,
    KeyI = 23,
    KeyO = 24,
    KeyP = 25,
    LeftBrace = 26,
    RightBrace = 27,
    Enter = 28,
    LeftCtrl = 29,
    KeyA = 30,
    KeyS = 31,
    KeyD = 32,
    KeyF = 33,
    KeyG = 34,
    KeyH = 35,
    KeyJ = 36,
    KeyK = 37,
    KeyL = 38,
    Semicolon = 39,
    Apostrophe = 40,
    Grave = 41,
    LeftShift = 42,
    Backslash = 43,
    KeyZ = 44,
    KeyX = 45,
    KeyC = 46,
    KeyV = 47,
    KeyB = 48,
    KeyN = 49,
    KeyM = 50,
    Comma = 51,
    Dot = 52,
    Slash = 53,
    RightShift = 54,
    KpAsterisk = 55,
    LeftAlt = 56,
    Space = 57,
    CapsLock = 58,
    F1 = 59,
    F2 = 60,
    F3 = 61,
    F4 = 62,
    F5 = 63,
    F6 = 64,
    F7 = 65,
    F8 = 66,
    F9 = 67,
    F10 = 68,
    NumLock = 69,
    ScrollLock = 70,
    Kp7 = 71,
    Kp8 = 72,
    Kp9 = 73,
    KpMinus = 74,
    Kp4 = 75,
    Kp5 = 76,
    Kp6 = 77,
    KpPlus = 78,
    Kp1 = 79,
    Kp2 = 80,
    Kp3 = 81,
    Kp0 = 82,
    KpDot = 83,
    ZenkakuHankaku = 85,
    F11 = 87,
    F12 = 88,
    Katakana = 90,
    Hiragana = 91,
    KpJpComma = 95,
    KpEnter = 96,
    RightCtrl = 97,
    KpSlash = 98,
    SysRq = 99,
    RightAlt = 100,
    Home = 102,
    Up = 103,
    PageUp = 104,
    Left = 105,
    Right = 106,
    End = 107,
    Down = 108,
    PageDown = 109,
    Insert = 110,
    Delete = 111,
    Mute = 113,
    VolumeDown = 114,
    VolumeUp = 115,
    Power = 116,
    KpEqual = 117,
    Pause = 119,
    Hangeul = 122,
    Hanja = 123,
    Yen = 124,
    LeftMeta = 125,
    RightMeta = 126,
    Compose = 127,
    Stop = 128,
    Again = 129,
    Undo = 131,
    Copy = 133,
    Paste = 135,
    Find = 136,
    Cut = 137,
    Help = 138,
    Menu = 139,
    Calc = 140,
    Sleep = 142,
    Prog1 = 148,
    Www = 150,
    Mail = 155,
    Bookmarks = 156,
    Computer = 157,
    Back = 158,
    Forward = 159,
    EjectCd = 161,
    NextSong = 163,
    PlayPause = 164,
    PreviousSong = 165,
    StopCd = 166,
    Homepage = 172,
    Refresh = 173,
    KpLeftParen = 179,
    KpRightParen = 180,
    F13 = 183,
    F14 = 184,
    F15 = 185,
    F16 = 186,
    F17 = 187,
    F18 = 188,
    F19 = 189,
    F20 = 190,
    F21 = 191,
    F22 = 192,
    F23 = 193,
    F24 = 194,
}

impl EvdevKey {
    /// Returns the raw evdev code.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Returns `true` for the `KEY_RESERVED` sentinel.
    pub const fn is_reserved(self) -> bool {
        matches!(self, EvdevKey::Reserved)
    }

    /// Returns `true` for the eight Ctrl/Shift/Alt/Meta keys.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            EvdevKey::LeftCtrl
                | EvdevKey::RightCtrl
                | EvdevKey::LeftShift
                | EvdevKey::RightShift
                | EvdevKey::LeftAlt
                | EvdevKey::RightAlt
                | EvdevKey::LeftMeta
                | EvdevKey::RightMeta
        )
    }
}

/// Evdev `BTN_*` pointer button code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum EvdevButton {
    Left = 0x110,
    Right = 0x111,
    Middle = 0x112,
    Forward = 0x115,
    Back = 0x116,
}

impl EvdevButton {
    /// Returns the raw evdev code.
    pub const fn code(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_is_code_zero() {
        assert_eq!(EvdevKey::Reserved.code(), 0);
        assert!(EvdevKey::Reserved.is_reserved());
        assert!(!EvdevKey::KeyA.is_reserved());
    }

    #[test]
    fn test_codes_match_input_event_codes_header() {
        // Spot checks against linux/input-event-codes.h
        assert_eq!(EvdevKey::KeyA.code(), 30);
        assert_eq!(EvdevKey::KeyF.code(), 33);
        assert_eq!(EvdevKey::KeyN.code(), 49);
        assert_eq!(EvdevKey::Enter.code(), 28);
        assert_eq!(EvdevKey::LeftMeta.code(), 125);
        assert_eq!(EvdevKey::F24.code(), 194);
        assert_eq!(EvdevButton::Left.code(), 272);
        assert_eq!(EvdevButton::Back.code(), 278);
    }

    #[test]
    fn test_modifier_keys_are_identified_correctly() {
        for key in [
            EvdevKey::LeftCtrl,
            EvdevKey::RightCtrl,
            EvdevKey::LeftShift,
            EvdevKey::RightShift,
            EvdevKey::LeftAlt,
            EvdevKey::RightAlt,
            EvdevKey::LeftMeta,
            EvdevKey::RightMeta,
        ] {
            assert!(key.is_modifier(), "{key:?} should be a modifier key");
        }
        for key in [EvdevKey::KeyA, EvdevKey::Space, EvdevKey::Reserved] {
            assert!(!key.is_modifier(), "{key:?} should NOT be a modifier key");
        }
    }

    #[test]
    fn test_key_names_deserialize_from_config_strings() {
        #[derive(Deserialize)]
        struct Binding {
            key: EvdevKey,
        }

        let binding: Binding = toml::from_str(r#"key = "KeyF""#).expect("deserialize");
        assert_eq!(binding.key, EvdevKey::KeyF);

        let bad: Result<Binding, _> = toml::from_str(r#"key = "NotAKey""#);
        assert!(bad.is_err());
    }
}
