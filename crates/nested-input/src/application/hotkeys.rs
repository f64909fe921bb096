//! Hotkey interception: local window actions bound to command-modifier chords.
//!
//! Two chords are recognised, both on key *release* while the command
//! modifier (Left Meta by default) is held:
//!
//! | Chord (default)  | Action                                              |
//! |------------------|-----------------------------------------------------|
//! | `Meta + F`       | toggle desktop fullscreen on the host window        |
//! | `Meta + N`       | toggle the "filter game window" flag (no host call) |
//!
//! A release under the command modifier that matches neither key is *not* a
//! hotkey: the caller forwards it downstream like any other key event.

use nested_input_core::{EvdevKey, Modifier, ModifierState, OutputState};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::infrastructure::host::HostDisplay;

/// Configurable hotkey bindings (`[hotkeys]` config section).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyBindings {
    /// Modifier that must be held for a release to count as a hotkey.
    pub command_modifier: Modifier,
    /// Key that toggles desktop fullscreen.
    pub toggle_fullscreen: EvdevKey,
    /// Key that toggles the filter flag.
    pub toggle_filter: EvdevKey,
}

impl Default for HotkeyBindings {
    fn default() -> Self {
        Self {
            command_modifier: Modifier::LeftMeta,
            toggle_fullscreen: EvdevKey::KeyF,
            toggle_filter: EvdevKey::KeyN,
        }
    }
}

/// A local action triggered by a hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    ToggleFullscreen,
    ToggleFilter,
}

impl HotkeyBindings {
    /// Returns the action bound to this key event, or `None` if the event
    /// must be forwarded.
    ///
    /// Only releases with the command modifier held can match.  Unmapped keys
    /// ([`EvdevKey::Reserved`]) never match.
    pub fn action_for(
        &self,
        key: EvdevKey,
        pressed: bool,
        modifiers: ModifierState,
    ) -> Option<HotkeyAction> {
        if pressed || key.is_reserved() || !modifiers.holds(self.command_modifier) {
            return None;
        }
        if key == self.toggle_fullscreen {
            Some(HotkeyAction::ToggleFullscreen)
        } else if key == self.toggle_filter {
            Some(HotkeyAction::ToggleFilter)
        } else {
            None
        }
    }
}

/// Performs `action` against the shared output state and the host window.
///
/// Fullscreen flips the flag and issues exactly one `set_fullscreen` call
/// carrying the new state.  A host failure is logged; the flag keeps its new
/// value.  The filter toggle only flips its flag.
pub fn apply<D>(action: HotkeyAction, output: &OutputState, display: &mut D)
where
    D: HostDisplay + ?Sized,
{
    match action {
        HotkeyAction::ToggleFullscreen => {
            let fullscreen = output.toggle_fullscreen();
            debug!(fullscreen, "fullscreen hotkey");
            if let Err(e) = display.set_fullscreen(fullscreen) {
                warn!("failed to change fullscreen state: {e}");
            }
        }
        HotkeyAction::ToggleFilter => {
            let filter = output.toggle_filter();
            debug!(filter, "filter hotkey");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::host::HostError;
    use mockall::{mock, predicate::eq};

    mock! {
        Display {}
        impl HostDisplay for Display {
            fn window_display_index(&self) -> Result<i32, HostError>;
            fn display_refresh_rate(&self, display_index: i32) -> Result<u32, HostError>;
            fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), HostError>;
        }
    }

    fn meta() -> ModifierState {
        ModifierState::NONE.with(Modifier::LeftMeta)
    }

    // ── Matching ──────────────────────────────────────────────────────────────

    #[test]
    fn test_meta_f_release_is_fullscreen() {
        let bindings = HotkeyBindings::default();

        assert_eq!(
            bindings.action_for(EvdevKey::KeyF, false, meta()),
            Some(HotkeyAction::ToggleFullscreen)
        );
    }

    #[test]
    fn test_meta_n_release_is_filter() {
        let bindings = HotkeyBindings::default();

        assert_eq!(
            bindings.action_for(EvdevKey::KeyN, false, meta()),
            Some(HotkeyAction::ToggleFilter)
        );
    }

    #[test]
    fn test_presses_never_match() {
        let bindings = HotkeyBindings::default();

        assert_eq!(bindings.action_for(EvdevKey::KeyF, true, meta()), None);
        assert_eq!(bindings.action_for(EvdevKey::KeyN, true, meta()), None);
    }

    #[test]
    fn test_release_without_command_modifier_does_not_match() {
        let bindings = HotkeyBindings::default();
        let right_meta = ModifierState::NONE.with(Modifier::RightMeta);

        assert_eq!(bindings.action_for(EvdevKey::KeyF, false, ModifierState::NONE), None);
        assert_eq!(bindings.action_for(EvdevKey::KeyF, false, right_meta), None);
    }

    #[test]
    fn test_unbound_key_under_command_modifier_falls_through() {
        let bindings = HotkeyBindings::default();

        assert_eq!(bindings.action_for(EvdevKey::KeyA, false, meta()), None);
    }

    #[test]
    fn test_reserved_never_matches_even_if_bound() {
        let bindings = HotkeyBindings {
            toggle_filter: EvdevKey::Reserved,
            ..Default::default()
        };

        assert_eq!(bindings.action_for(EvdevKey::Reserved, false, meta()), None);
    }

    #[test]
    fn test_rebound_modifier_and_keys_are_honoured() {
        // Arrange
        let bindings = HotkeyBindings {
            command_modifier: Modifier::RightCtrl,
            toggle_fullscreen: EvdevKey::F11,
            toggle_filter: EvdevKey::F12,
        };
        let rctrl = ModifierState::NONE.with(Modifier::RightCtrl);

        // Act / Assert
        assert_eq!(
            bindings.action_for(EvdevKey::F11, false, rctrl),
            Some(HotkeyAction::ToggleFullscreen)
        );
        assert_eq!(bindings.action_for(EvdevKey::KeyF, false, rctrl), None);
        assert_eq!(bindings.action_for(EvdevKey::F11, false, meta()), None);
    }

    #[test]
    fn test_bindings_deserialize_with_partial_section() {
        let bindings: HotkeyBindings =
            toml::from_str(r#"toggle_fullscreen = "F11""#).expect("deserialize");

        assert_eq!(bindings.toggle_fullscreen, EvdevKey::F11);
        assert_eq!(bindings.command_modifier, Modifier::LeftMeta);
        assert_eq!(bindings.toggle_filter, EvdevKey::KeyN);
    }

    // ── Applying ──────────────────────────────────────────────────────────────

    #[test]
    fn test_fullscreen_issues_one_host_call_with_new_state() {
        // Arrange
        let output = OutputState::default();
        let mut display = MockDisplay::new();
        display
            .expect_set_fullscreen()
            .with(eq(true))
            .times(1)
            .returning(|_| Ok(()));

        // Act
        apply(HotkeyAction::ToggleFullscreen, &output, &mut display);

        // Assert
        assert!(output.is_fullscreen());
    }

    #[test]
    fn test_fullscreen_twice_returns_to_windowed() {
        let output = OutputState::default();
        let mut display = MockDisplay::new();
        let mut seq = mockall::Sequence::new();
        display
            .expect_set_fullscreen()
            .with(eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        display
            .expect_set_fullscreen()
            .with(eq(false))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        apply(HotkeyAction::ToggleFullscreen, &output, &mut display);
        apply(HotkeyAction::ToggleFullscreen, &output, &mut display);

        assert!(!output.is_fullscreen());
    }

    #[test]
    fn test_fullscreen_host_failure_keeps_new_flag() {
        let output = OutputState::default();
        let mut display = MockDisplay::new();
        display
            .expect_set_fullscreen()
            .times(1)
            .returning(|_| Err(HostError::Window("refused".into())));

        apply(HotkeyAction::ToggleFullscreen, &output, &mut display);

        assert!(output.is_fullscreen());
    }

    #[test]
    fn test_filter_toggle_makes_no_host_call() {
        // Arrange: no expectations, so any host call panics
        let output = OutputState::default();
        let mut display = MockDisplay::new();

        // Act
        apply(HotkeyAction::ToggleFilter, &output, &mut display);

        // Assert
        assert!(output.filter_enabled());
        assert!(!output.is_fullscreen());
    }
}
