//! Host (SDL) mouse button id to evdev button code translation.
//!
//! SDL numbers its buttons 1–5 (`SDL_BUTTON_LEFT` … `SDL_BUTTON_X2`).  Anything
//! outside that set, including 0, maps to code `0`, which the compositor
//! treats as "no button".

use super::evdev::EvdevButton;

/// `SDL_BUTTON_LEFT`
pub const SDL_BUTTON_LEFT: u8 = 1;
/// `SDL_BUTTON_MIDDLE`
pub const SDL_BUTTON_MIDDLE: u8 = 2;
/// `SDL_BUTTON_RIGHT`
pub const SDL_BUTTON_RIGHT: u8 = 3;
/// `SDL_BUTTON_X1`, reported as the forward side button.
pub const SDL_BUTTON_X1: u8 = 4;
/// `SDL_BUTTON_X2`, reported as the back side button.
pub const SDL_BUTTON_X2: u8 = 5;

/// Translates an SDL button id to an [`EvdevButton`].
///
/// Returns `None` for ids outside the five buttons SDL defines.
pub fn host_button(id: u8) -> Option<EvdevButton> {
    match id {
        SDL_BUTTON_LEFT => Some(EvdevButton::Left),
        SDL_BUTTON_MIDDLE => Some(EvdevButton::Middle),
        SDL_BUTTON_RIGHT => Some(EvdevButton::Right),
        SDL_BUTTON_X1 => Some(EvdevButton::Forward),
        SDL_BUTTON_X2 => Some(EvdevButton::Back),
        _ => None,
    }
}

/// Translates an SDL button id to a raw evdev button code, `0` if unknown.
pub fn host_button_to_evdev(id: u8) -> u32 {
    host_button(id).map_or(0, EvdevButton::code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_buttons_map_to_evdev() {
        assert_eq!(host_button_to_evdev(SDL_BUTTON_LEFT), 0x110);
        assert_eq!(host_button_to_evdev(SDL_BUTTON_RIGHT), 0x111);
        assert_eq!(host_button_to_evdev(SDL_BUTTON_MIDDLE), 0x112);
    }

    #[test]
    fn test_side_buttons_map_to_forward_and_back() {
        assert_eq!(host_button(SDL_BUTTON_X1), Some(EvdevButton::Forward));
        assert_eq!(host_button(SDL_BUTTON_X2), Some(EvdevButton::Back));
        assert_eq!(host_button_to_evdev(SDL_BUTTON_X2), EvdevButton::Back.code());
    }

    #[test]
    fn test_unknown_button_ids_return_zero() {
        for id in [0u8, 6, 7, 42, 255] {
            assert_eq!(host_button_to_evdev(id), 0, "button id {id} should map to 0");
        }
    }

    #[test]
    fn test_host_button_to_evdev_is_total_over_u8() {
        let mapped = (0u8..=255).filter(|&id| host_button_to_evdev(id) != 0).count();
        assert_eq!(mapped, 5);
    }
}
