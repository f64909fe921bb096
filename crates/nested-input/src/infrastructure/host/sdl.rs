//! SDL2 host backend.
//!
//! Initialises the SDL video and events subsystems on the calling thread
//! (which must be the input loop thread) and adapts SDL events and display
//! queries to the [`HostEventSource`] / [`HostDisplay`] traits.
//!
//! # Window tracking
//!
//! The backend does not require a window of its own.  It follows whichever
//! window the most recent window event named, and all display queries and
//! fullscreen changes act on that window.  [`SdlHost::with_window`] opens a
//! plain resizable window for standalone runs.
//!
//! # Shutdown
//!
//! `SDL_WaitEvent` has no cancellation.  The closer pushes a user event of
//! a type registered at startup; `wait_event` turns it into
//! [`HostError::Closed`].  User events of any other type are ignored.

use std::ptr;

use sdl2::event::{Event, EventSender, EventSubsystem, WindowEvent as SdlWindowEvent};
use sdl2::video::Window;
use sdl2::{EventPump, Sdl, VideoSubsystem};
use tracing::{debug, trace};

use nested_input_core::{ModifierState, OutputMode};

use super::{HostCloser, HostDisplay, HostError, HostEvent, HostEventSource, WindowEvent};

/// Host backed by the SDL2 event queue.
pub struct SdlHost {
    sdl: Sdl,
    video: VideoSubsystem,
    events: EventSubsystem,
    pump: EventPump,
    /// Window opened by [`SdlHost::with_window`], kept alive for the host's lifetime.
    _window: Option<Window>,
    /// SDL id of the window display queries act on.
    window_id: Option<u32>,
    /// Registered user event type pushed by the closer.
    shutdown_type: u32,
    closed: bool,
}

impl SdlHost {
    /// Initialises SDL video and events on the current thread.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Init`] if any SDL subsystem fails to start.
    pub fn new() -> Result<Self, HostError> {
        let sdl = sdl2::init().map_err(HostError::Init)?;
        let video = sdl.video().map_err(HostError::Init)?;
        let events = sdl.event().map_err(HostError::Init)?;
        // SAFETY: the events subsystem was initialised on this thread above.
        let shutdown_type = unsafe { events.register_event() }.map_err(HostError::Init)?;
        let pump = sdl.event_pump().map_err(HostError::Init)?;
        debug!(driver = video.current_video_driver(), "SDL host initialised");
        Ok(Self {
            sdl,
            video,
            events,
            pump,
            _window: None,
            window_id: None,
            shutdown_type,
            closed: false,
        })
    }

    /// Initialises SDL and opens a resizable window of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Init`] if SDL or the window cannot be created.
    pub fn with_window(title: &str, mode: OutputMode) -> Result<Self, HostError> {
        let mut host = Self::new()?;
        let window = host
            .video
            .window(title, mode.width, mode.height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| HostError::Init(e.to_string()))?;
        host.window_id = Some(window.id());
        host._window = Some(window);
        Ok(host)
    }

    fn window_ptr(&self) -> Result<*mut sdl2::sys::SDL_Window, HostError> {
        let id = self.window_id.ok_or(HostError::NoWindow)?;
        // SAFETY: SDL is initialised on this thread for as long as `self`
        // lives.  A null return (window already destroyed) is handled below.
        let ptr = unsafe { sdl2::sys::SDL_GetWindowFromID(id) };
        if ptr.is_null() {
            return Err(HostError::NoWindow);
        }
        Ok(ptr)
    }
}

impl HostEventSource for SdlHost {
    fn wait_event(&mut self) -> Result<HostEvent, HostError> {
        loop {
            if self.closed {
                return Err(HostError::Closed);
            }
            // SAFETY: SDL is initialised on this thread.  With a null event
            // pointer SDL_WaitEvent only blocks until the queue is non-empty.
            if unsafe { sdl2::sys::SDL_WaitEvent(ptr::null_mut()) } == 0 {
                return Err(HostError::EventSource(sdl2::get_error()));
            }
            let Some(event) = self.pump.poll_event() else {
                continue;
            };
            match translate_event(event, self.shutdown_type) {
                Translated::Shutdown => self.closed = true,
                Translated::Event { window_id, event } => {
                    if window_id.is_some() {
                        self.window_id = window_id;
                    }
                    return Ok(event);
                }
            }
        }
    }

    fn modifier_state(&self) -> ModifierState {
        ModifierState(self.sdl.keyboard().mod_state().bits())
    }

    fn enable_relative_mouse(&mut self) -> Result<(), HostError> {
        // SAFETY: plain SDL call on the thread that initialised SDL.
        let rc = unsafe { sdl2::sys::SDL_SetRelativeMouseMode(sdl2::sys::SDL_bool::SDL_TRUE) };
        if rc != 0 {
            return Err(HostError::Init(format!(
                "relative mouse mode unavailable: {}",
                sdl2::get_error()
            )));
        }
        Ok(())
    }

    fn closer(&self) -> Box<dyn HostCloser> {
        Box::new(SdlCloser {
            sender: self.events.event_sender(),
            shutdown_type: self.shutdown_type,
        })
    }
}

impl HostDisplay for SdlHost {
    fn window_display_index(&self) -> Result<i32, HostError> {
        let window = self.window_ptr()?;
        // SAFETY: `window` was just returned non-null by SDL_GetWindowFromID.
        let index = unsafe { sdl2::sys::SDL_GetWindowDisplayIndex(window) };
        if index < 0 {
            return Err(HostError::Query(sdl2::get_error()));
        }
        Ok(index)
    }

    fn display_refresh_rate(&self, display_index: i32) -> Result<u32, HostError> {
        let mode = self
            .video
            .desktop_display_mode(display_index)
            .map_err(HostError::Query)?;
        Ok(mode.refresh_rate.max(0) as u32)
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), HostError> {
        let window = self.window_ptr()?;
        let flags = if fullscreen {
            sdl2::sys::SDL_WindowFlags::SDL_WINDOW_FULLSCREEN_DESKTOP as u32
        } else {
            0
        };
        // SAFETY: `window` was just returned non-null by SDL_GetWindowFromID.
        let rc = unsafe { sdl2::sys::SDL_SetWindowFullscreen(window, flags) };
        if rc != 0 {
            return Err(HostError::Window(sdl2::get_error()));
        }
        Ok(())
    }
}

struct SdlCloser {
    sender: EventSender,
    shutdown_type: u32,
}

impl HostCloser for SdlCloser {
    fn close(&self) {
        let event = Event::User {
            timestamp: 0,
            window_id: 0,
            type_: self.shutdown_type,
            code: 0,
            data1: ptr::null_mut(),
            data2: ptr::null_mut(),
        };
        if let Err(e) = self.sender.push_event(event) {
            debug!("could not queue SDL shutdown event: {e}");
        }
    }
}

/// One SDL event as seen by the loop.
#[derive(Debug, PartialEq, Eq)]
enum Translated {
    /// The closer's user event.
    Shutdown,
    /// `window_id` is set for window events only.
    Event { window_id: Option<u32>, event: HostEvent },
}

fn translate_event(event: Event, shutdown_type: u32) -> Translated {
    let mut window = None;
    let translated = match event {
        Event::User { type_, .. } if type_ == shutdown_type => return Translated::Shutdown,
        Event::MouseMotion { timestamp, xrel, yrel, .. } => HostEvent::PointerMotion {
            dx: xrel,
            dy: yrel,
            time_ms: timestamp,
        },
        Event::MouseButtonDown { timestamp, mouse_btn, .. } => HostEvent::Button {
            button: mouse_btn as u8,
            pressed: true,
            time_ms: timestamp,
        },
        Event::MouseButtonUp { timestamp, mouse_btn, .. } => HostEvent::Button {
            button: mouse_btn as u8,
            pressed: false,
            time_ms: timestamp,
        },
        Event::MouseWheel { timestamp, x, y, .. } => HostEvent::Wheel {
            dx: x,
            dy: y,
            time_ms: timestamp,
        },
        Event::KeyDown { timestamp, scancode, .. } => HostEvent::Key {
            scancode: scancode.map_or(0, |sc| sc as i32 as u32),
            pressed: true,
            time_ms: timestamp,
        },
        Event::KeyUp { timestamp, scancode, .. } => HostEvent::Key {
            scancode: scancode.map_or(0, |sc| sc as i32 as u32),
            pressed: false,
            time_ms: timestamp,
        },
        Event::Window { window_id, win_event, .. } => {
            window = Some(window_id);
            HostEvent::Window(match win_event {
                SdlWindowEvent::Moved(..) => WindowEvent::Moved,
                SdlWindowEvent::Shown => WindowEvent::Shown,
                SdlWindowEvent::SizeChanged(w, h) => WindowEvent::Resized {
                    width: w.max(0) as u32,
                    height: h.max(0) as u32,
                },
                _ => WindowEvent::Other,
            })
        }
        other => {
            trace!(?other, "unhandled SDL event");
            HostEvent::Other
        }
    };
    Translated::Event { window_id: window, event: translated }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::{Mod, Scancode};
    use sdl2::mouse::{MouseButton, MouseState};

    const SHUTDOWN: u32 = 0x8000;

    fn translate(event: Event) -> Translated {
        translate_event(event, SHUTDOWN)
    }

    fn user_event(type_: u32) -> Event {
        Event::User {
            timestamp: 0,
            window_id: 0,
            type_,
            code: 0,
            data1: ptr::null_mut(),
            data2: ptr::null_mut(),
        }
    }

    fn key_down(scancode: Option<Scancode>) -> Event {
        Event::KeyDown {
            timestamp: 40,
            window_id: 1,
            keycode: None,
            scancode,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    fn plain(event: HostEvent) -> Translated {
        Translated::Event { window_id: None, event }
    }

    #[test]
    fn test_shutdown_user_event_is_recognised() {
        assert_eq!(translate(user_event(SHUTDOWN)), Translated::Shutdown);
    }

    #[test]
    fn test_foreign_user_event_is_ignored() {
        assert_eq!(translate(user_event(SHUTDOWN + 1)), plain(HostEvent::Other));
    }

    #[test]
    fn test_relative_motion_uses_deltas() {
        let event = Event::MouseMotion {
            timestamp: 12,
            window_id: 1,
            which: 0,
            mousestate: MouseState::from_sdl_state(0),
            x: 300,
            y: 200,
            xrel: -3,
            yrel: 7,
        };

        assert_eq!(
            translate(event),
            plain(HostEvent::PointerMotion { dx: -3, dy: 7, time_ms: 12 })
        );
    }

    #[test]
    fn test_buttons_carry_sdl_button_ids() {
        let down = Event::MouseButtonDown {
            timestamp: 5,
            window_id: 1,
            which: 0,
            mouse_btn: MouseButton::X2,
            clicks: 1,
            x: 0,
            y: 0,
        };
        let up = Event::MouseButtonUp {
            timestamp: 6,
            window_id: 1,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 0,
            y: 0,
        };

        assert_eq!(
            translate(down),
            plain(HostEvent::Button { button: 5, pressed: true, time_ms: 5 })
        );
        assert_eq!(
            translate(up),
            plain(HostEvent::Button { button: 1, pressed: false, time_ms: 6 })
        );
    }

    #[test]
    fn test_keys_carry_sdl_scancodes() {
        let up = Event::KeyUp {
            timestamp: 41,
            window_id: 1,
            keycode: None,
            scancode: Some(Scancode::F),
            keymod: Mod::LGUIMOD,
            repeat: false,
        };

        assert_eq!(
            translate(key_down(Some(Scancode::A))),
            plain(HostEvent::Key { scancode: 4, pressed: true, time_ms: 40 })
        );
        assert_eq!(
            translate(up),
            plain(HostEvent::Key { scancode: 9, pressed: false, time_ms: 41 })
        );
    }

    #[test]
    fn test_missing_scancode_becomes_zero() {
        assert_eq!(
            translate(key_down(None)),
            plain(HostEvent::Key { scancode: 0, pressed: true, time_ms: 40 })
        );
    }

    #[test]
    fn test_size_changed_becomes_resized_and_clamps_negative() {
        let event = Event::Window {
            timestamp: 0,
            window_id: 3,
            win_event: SdlWindowEvent::SizeChanged(-5, 600),
        };

        assert_eq!(
            translate(event),
            Translated::Event {
                window_id: Some(3),
                event: HostEvent::Window(WindowEvent::Resized { width: 0, height: 600 }),
            }
        );
    }

    #[test]
    fn test_window_events_report_their_window() {
        let moved = Event::Window {
            timestamp: 0,
            window_id: 2,
            win_event: SdlWindowEvent::Moved(10, 10),
        };
        let resized = Event::Window {
            timestamp: 0,
            window_id: 2,
            win_event: SdlWindowEvent::Resized(800, 600),
        };

        assert_eq!(
            translate(moved),
            Translated::Event { window_id: Some(2), event: HostEvent::Window(WindowEvent::Moved) }
        );
        assert_eq!(
            translate(resized),
            Translated::Event { window_id: Some(2), event: HostEvent::Window(WindowEvent::Other) }
        );
    }

    #[test]
    fn test_quit_is_ignored() {
        assert_eq!(translate(Event::Quit { timestamp: 0 }), plain(HostEvent::Other));
    }
}
