//! Host (SDL) scancode to evdev keycode translation table.
//!
//! Reference: `SDL_scancode.h` (SDL 2) and `linux/input-event-codes.h`.
//! The table is SDL's evdev input backend key table read in reverse.
//!
//! # How this table works
//!
//! `SCANCODE_TABLE` is a compile-time constant array of [`SCANCODE_TABLE_LEN`]
//! [`EvdevKey`] values, indexed by SDL scancode.  Position 4 holds
//! `EvdevKey::KeyA` because `SDL_SCANCODE_A` is 4.  Scancodes with no evdev
//! equivalent (the `INTERNATIONAL*` block, most of the extended keypad,
//! `PRINTSCREEN`, ...) store [`EvdevKey::Reserved`].
//!
//! Each entry is assigned by explicit index, so a missing or extra row cannot
//! shift the rest of the table.  The length is pinned by a unit test against
//! the last scancode SDL 2 defines (`SDL_SCANCODE_APP2` = 284).

use super::evdev::EvdevKey;

/// Number of entries in the scancode table (`SDL_SCANCODE_APP2 + 1`).
pub const SCANCODE_TABLE_LEN: usize = 285;

/// Translates an SDL scancode to an evdev keycode.
///
/// Returns [`EvdevKey::Reserved`] for scancodes with no mapping and for any
/// scancode at or beyond [`SCANCODE_TABLE_LEN`].
///
/// # Panics
///
/// This function never panics; all `u32` inputs are handled.
pub fn scancode_to_evdev(scancode: u32) -> EvdevKey {
    SCANCODE_TABLE
        .get(scancode as usize)
        .copied()
        .unwrap_or(EvdevKey::Reserved)
}

/// Complete SDL scancode → evdev mapping indexed by scancode (0–284).
const SCANCODE_TABLE: [EvdevKey; SCANCODE_TABLE_LEN] = {
    use EvdevKey::*;
    let mut t = [Reserved; SCANCODE_TABLE_LEN];

    // ── Letters (SDL_SCANCODE_A=4 … SDL_SCANCODE_Z=29) ──────────────────────────
    t[4] = KeyA; // SDL_SCANCODE_A
    t[5] = KeyB; // SDL_SCANCODE_B
    t[6] = KeyC; // SDL_SCANCODE_C
    t[7] = KeyD; // SDL_SCANCODE_D
    t[8] = KeyE; // SDL_SCANCODE_E
    t[9] = KeyF; // SDL_SCANCODE_F
    t[10] = KeyG; // SDL_SCANCODE_G
    t[11] = KeyH; // SDL_SCANCODE_H
    t[12] = KeyI; // SDL_SCANCODE_I
    t[13] = KeyJ; // SDL_SCANCODE_J
    t[14] = KeyK; // SDL_SCANCODE_K
    t[15] = KeyL; // SDL_SCANCODE_L
    t[16] = KeyM; // SDL_SCANCODE_M
    t[17] = KeyN; // SDL_SCANCODE_N
    t[18] = KeyO; // SDL_SCANCODE_O
    t[19] = KeyP; // SDL_SCANCODE_P
    t[20] = KeyQ; // SDL_SCANCODE_Q
    t[21] = KeyR; // SDL_SCANCODE_R
    t[22] = KeyS; // SDL_SCANCODE_S
    t[23] = KeyT; // SDL_SCANCODE_T
    t[24] = KeyU; // SDL_SCANCODE_U
    t[25] = KeyV; // SDL_SCANCODE_V
    t[26] = KeyW; // SDL_SCANCODE_W
    t[27] = KeyX; // SDL_SCANCODE_X
    t[28] = KeyY; // SDL_SCANCODE_Y
    t[29] = KeyZ; // SDL_SCANCODE_Z

    // ── Number row ──────────────────────────────────────────────────────────────
    t[30] = Key1; // SDL_SCANCODE_1
    t[31] = Key2; // SDL_SCANCODE_2
    t[32] = Key3; // SDL_SCANCODE_3
    t[33] = Key4; // SDL_SCANCODE_4
    t[34] = Key5; // SDL_SCANCODE_5
    t[35] = Key6; // SDL_SCANCODE_6
    t[36] = Key7; // SDL_SCANCODE_7
    t[37] = Key8; // SDL_SCANCODE_8
    t[38] = Key9; // SDL_SCANCODE_9
    t[39] = Key0; // SDL_SCANCODE_0

    // ── Control keys and punctuation ────────────────────────────────────────────
    t[40] = Enter; // SDL_SCANCODE_RETURN
    t[41] = Esc; // SDL_SCANCODE_ESCAPE
    t[42] = Backspace; // SDL_SCANCODE_BACKSPACE
    t[43] = Tab; // SDL_SCANCODE_TAB
    t[44] = Space; // SDL_SCANCODE_SPACE
    t[45] = Minus; // SDL_SCANCODE_MINUS
    t[46] = Equal; // SDL_SCANCODE_EQUALS
    t[47] = LeftBrace; // SDL_SCANCODE_LEFTBRACKET
    t[48] = RightBrace; // SDL_SCANCODE_RIGHTBRACKET
    t[49] = Backslash; // SDL_SCANCODE_BACKSLASH
    t[51] = Semicolon; // SDL_SCANCODE_SEMICOLON
    t[52] = Apostrophe; // SDL_SCANCODE_APOSTROPHE
    t[53] = Grave; // SDL_SCANCODE_GRAVE
    t[54] = Comma; // SDL_SCANCODE_COMMA
    t[55] = Dot; // SDL_SCANCODE_PERIOD
    t[56] = Slash; // SDL_SCANCODE_SLASH
    t[57] = CapsLock; // SDL_SCANCODE_CAPSLOCK

    // ── Function keys F1–F12 ────────────────────────────────────────────────────
    t[58] = F1; // SDL_SCANCODE_F1
    t[59] = F2; // SDL_SCANCODE_F2
    t[60] = F3; // SDL_SCANCODE_F3
    t[61] = F4; // SDL_SCANCODE_F4
    t[62] = F5; // SDL_SCANCODE_F5
    t[63] = F6; // SDL_SCANCODE_F6
    t[64] = F7; // SDL_SCANCODE_F7
    t[65] = F8; // SDL_SCANCODE_F8
    t[66] = F9; // SDL_SCANCODE_F9
    t[67] = F10; // SDL_SCANCODE_F10
    t[68] = F11; // SDL_SCANCODE_F11
    t[69] = F12; // SDL_SCANCODE_F12

    // ── Navigation cluster ──────────────────────────────────────────────────────
    t[71] = ScrollLock; // SDL_SCANCODE_SCROLLLOCK
    t[72] = Pause; // SDL_SCANCODE_PAUSE
    t[73] = Insert; // SDL_SCANCODE_INSERT
    t[74] = Home; // SDL_SCANCODE_HOME
    t[75] = PageUp; // SDL_SCANCODE_PAGEUP
    t[76] = Delete; // SDL_SCANCODE_DELETE
    t[77] = End; // SDL_SCANCODE_END
    t[78] = PageDown; // SDL_SCANCODE_PAGEDOWN
    t[79] = Right; // SDL_SCANCODE_RIGHT
    t[80] = Left; // SDL_SCANCODE_LEFT
    t[81] = Down; // SDL_SCANCODE_DOWN
    t[82] = Up; // SDL_SCANCODE_UP

    // ── Keypad ──────────────────────────────────────────────────────────────────
    t[83] = NumLock; // SDL_SCANCODE_NUMLOCKCLEAR
    t[84] = KpSlash; // SDL_SCANCODE_KP_DIVIDE
    t[85] = KpAsterisk; // SDL_SCANCODE_KP_MULTIPLY
    t[86] = KpMinus; // SDL_SCANCODE_KP_MINUS
    t[87] = KpPlus; // SDL_SCANCODE_KP_PLUS
    t[88] = KpEnter; // SDL_SCANCODE_KP_ENTER
    t[89] = Kp1; // SDL_SCANCODE_KP_1
    t[90] = Kp2; // SDL_SCANCODE_KP_2
    t[91] = Kp3; // SDL_SCANCODE_KP_3
    t[92] = Kp4; // SDL_SCANCODE_KP_4
    t[93] = Kp5; // SDL_SCANCODE_KP_5
    t[94] = Kp6; // SDL_SCANCODE_KP_6
    t[95] = Kp7; // SDL_SCANCODE_KP_7
    t[96] = Kp8; // SDL_SCANCODE_KP_8
    t[97] = Kp9; // SDL_SCANCODE_KP_9
    t[98] = Kp0; // SDL_SCANCODE_KP_0
    t[99] = KpDot; // SDL_SCANCODE_KP_PERIOD

    // ── Extended function keys and editing ──────────────────────────────────────
    t[101] = Compose; // SDL_SCANCODE_APPLICATION
    t[102] = Power; // SDL_SCANCODE_POWER
    t[103] = KpEqual; // SDL_SCANCODE_KP_EQUALS
    t[104] = F13; // SDL_SCANCODE_F13
    t[105] = F14; // SDL_SCANCODE_F14
    t[106] = F15; // SDL_SCANCODE_F15
    t[107] = F16; // SDL_SCANCODE_F16
    t[108] = F17; // SDL_SCANCODE_F17
    t[109] = F18; // SDL_SCANCODE_F18
    t[110] = F19; // SDL_SCANCODE_F19
    t[111] = F20; // SDL_SCANCODE_F20
    t[112] = F21; // SDL_SCANCODE_F21
    t[113] = F22; // SDL_SCANCODE_F22
    t[114] = F23; // SDL_SCANCODE_F23
    t[115] = F24; // SDL_SCANCODE_F24
    t[117] = Help; // SDL_SCANCODE_HELP
    t[118] = Menu; // SDL_SCANCODE_MENU
    t[120] = Stop; // SDL_SCANCODE_STOP
    t[121] = Again; // SDL_SCANCODE_AGAIN
    t[122] = Undo; // SDL_SCANCODE_UNDO
    t[123] = Cut; // SDL_SCANCODE_CUT
    t[124] = Copy; // SDL_SCANCODE_COPY
    t[125] = Paste; // SDL_SCANCODE_PASTE
    t[126] = Find; // SDL_SCANCODE_FIND
    t[127] = Mute; // SDL_SCANCODE_MUTE
    t[128] = VolumeUp; // SDL_SCANCODE_VOLUMEUP
    t[129] = VolumeDown; // SDL_SCANCODE_VOLUMEDOWN

    // ── International and language keys ─────────────────────────────────────────
    t[133] = KpJpComma; // SDL_SCANCODE_KP_COMMA
    t[137] = Yen; // SDL_SCANCODE_INTERNATIONAL3
    t[144] = Hangeul; // SDL_SCANCODE_LANG1
    t[145] = Hanja; // SDL_SCANCODE_LANG2
    t[146] = Katakana; // SDL_SCANCODE_LANG3
    t[147] = Hiragana; // SDL_SCANCODE_LANG4
    t[148] = ZenkakuHankaku; // SDL_SCANCODE_LANG5
    t[154] = SysRq; // SDL_SCANCODE_SYSREQ

    // ── Extended keypad ─────────────────────────────────────────────────────────
    t[182] = KpLeftParen; // SDL_SCANCODE_KP_LEFTPAREN
    t[183] = KpRightParen; // SDL_SCANCODE_KP_RIGHTPAREN

    // ── Modifiers ───────────────────────────────────────────────────────────────
    t[224] = LeftCtrl; // SDL_SCANCODE_LCTRL
    t[225] = LeftShift; // SDL_SCANCODE_LSHIFT
    t[226] = LeftAlt; // SDL_SCANCODE_LALT
    t[227] = LeftMeta; // SDL_SCANCODE_LGUI
    t[228] = RightCtrl; // SDL_SCANCODE_RCTRL
    t[229] = RightShift; // SDL_SCANCODE_RSHIFT
    t[230] = RightAlt; // SDL_SCANCODE_RALT
    t[231] = RightMeta; // SDL_SCANCODE_RGUI

    // ── Media and application-control keys ──────────────────────────────────────
    t[258] = NextSong; // SDL_SCANCODE_AUDIONEXT
    t[259] = PreviousSong; // SDL_SCANCODE_AUDIOPREV
    t[260] = StopCd; // SDL_SCANCODE_AUDIOSTOP
    t[261] = PlayPause; // SDL_SCANCODE_AUDIOPLAY
    t[264] = Www; // SDL_SCANCODE_WWW
    t[265] = Mail; // SDL_SCANCODE_MAIL
    t[266] = Calc; // SDL_SCANCODE_CALCULATOR
    t[267] = Computer; // SDL_SCANCODE_COMPUTER
    t[269] = Homepage; // SDL_SCANCODE_AC_HOME
    t[270] = Back; // SDL_SCANCODE_AC_BACK
    t[271] = Forward; // SDL_SCANCODE_AC_FORWARD
    t[273] = Refresh; // SDL_SCANCODE_AC_REFRESH
    t[274] = Bookmarks; // SDL_SCANCODE_AC_BOOKMARKS
    t[281] = EjectCd; // SDL_SCANCODE_EJECT
    t[282] = Sleep; // SDL_SCANCODE_SLEEP
    t[283] = Prog1; // SDL_SCANCODE_APP1

    t
};
