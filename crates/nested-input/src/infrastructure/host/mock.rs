//! Scripted host for tests and headless runs.
//!
//! Allows tests to feed synthetic [`HostEvent`]s into the input loop without
//! an SDL window, and to script and observe the display side (display index,
//! refresh rates, fullscreen calls).
//!
//! # Usage in tests
//!
//! ```ignore
//! let (host, controller) = ScriptedHost::new();
//! controller.set_refresh_rate(0, 144);
//! controller.send(HostEvent::Window(WindowEvent::Shown));
//! controller.close();
//! ```
//!
//! Modifier state is delivered together with each event, so the loop's
//! "query modifiers after dequeuing a key" step sees exactly what the test
//! intended regardless of timing.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Receiver, Sender},
    Arc, Mutex,
};

use nested_input_core::ModifierState;

use super::{HostCloser, HostDisplay, HostError, HostEvent, HostEventSource};

enum Step {
    Event {
        event: HostEvent,
        modifiers: ModifierState,
    },
    Fail(String),
    Close,
}

/// Display side of the script, shared between host and controller.
#[derive(Debug, Default)]
struct DisplayScript {
    /// `None` makes `window_display_index` fail.
    display_index: Option<i32>,
    /// Displays without an entry fail their mode query.
    refresh_rates: HashMap<i32, u32>,
    /// Number of refresh-rate queries issued.
    refresh_queries: usize,
    /// Every `set_fullscreen` argument, in call order.
    fullscreen_calls: Vec<bool>,
}

#[derive(Default)]
struct Shared {
    display: Mutex<DisplayScript>,
    relative_mouse: AtomicBool,
    refuse_relative_mouse: AtomicBool,
}

/// A [`HostEventSource`] + [`HostDisplay`] driven by a [`ScriptedHostController`].
pub struct ScriptedHost {
    steps: Receiver<Step>,
    sender: Sender<Step>,
    modifiers: ModifierState,
    shared: Arc<Shared>,
    wait_probe: Option<Box<dyn FnMut() + Send>>,
    closed: bool,
}

/// Test-side handle for feeding and inspecting a [`ScriptedHost`].
#[derive(Clone)]
pub struct ScriptedHostController {
    sender: Sender<Step>,
    shared: Arc<Shared>,
}

impl ScriptedHost {
    /// Creates a host and its controller.
    ///
    /// The host starts on display 0 with no known refresh rates.
    pub fn new() -> (Self, ScriptedHostController) {
        let (tx, rx) = mpsc::channel();
        let shared = Arc::new(Shared::default());
        shared
            .display
            .lock()
            .expect("lock poisoned")
            .display_index = Some(0);
        let host = Self {
            steps: rx,
            sender: tx.clone(),
            modifiers: ModifierState::NONE,
            shared: Arc::clone(&shared),
            wait_probe: None,
            closed: false,
        };
        (host, ScriptedHostController { sender: tx, shared })
    }

    /// Installs a callback run at the start of every `wait_event`.
    ///
    /// Used to assert conditions that must hold whenever the loop blocks,
    /// such as the downstream lock being free.
    pub fn with_wait_probe(mut self, probe: impl FnMut() + Send + 'static) -> Self {
        self.wait_probe = Some(Box::new(probe));
        self
    }

    fn display(&self) -> std::sync::MutexGuard<'_, DisplayScript> {
        self.shared.display.lock().expect("lock poisoned")
    }
}

impl HostEventSource for ScriptedHost {
    fn wait_event(&mut self) -> Result<HostEvent, HostError> {
        if let Some(probe) = self.wait_probe.as_mut() {
            probe();
        }
        if self.closed {
            return Err(HostError::Closed);
        }
        match self.steps.recv() {
            Ok(Step::Event { event, modifiers }) => {
                self.modifiers = modifiers;
                Ok(event)
            }
            Ok(Step::Fail(reason)) => Err(HostError::EventSource(reason)),
            Ok(Step::Close) | Err(_) => {
                self.closed = true;
                Err(HostError::Closed)
            }
        }
    }

    fn modifier_state(&self) -> ModifierState {
        self.modifiers
    }

    fn enable_relative_mouse(&mut self) -> Result<(), HostError> {
        if self.shared.refuse_relative_mouse.load(Ordering::SeqCst) {
            return Err(HostError::Init("relative mouse mode refused".into()));
        }
        self.shared.relative_mouse.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn closer(&self) -> Box<dyn HostCloser> {
        Box::new(ScriptedCloser {
            sender: self.sender.clone(),
        })
    }
}

impl HostDisplay for ScriptedHost {
    fn window_display_index(&self) -> Result<i32, HostError> {
        self.display()
            .display_index
            .ok_or_else(|| HostError::Query("window is not on any display".into()))
    }

    fn display_refresh_rate(&self, display_index: i32) -> Result<u32, HostError> {
        let mut display = self.display();
        display.refresh_queries += 1;
        display
            .refresh_rates
            .get(&display_index)
            .copied()
            .ok_or_else(|| HostError::Query(format!("no mode for display {display_index}")))
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), HostError> {
        self.display().fullscreen_calls.push(fullscreen);
        Ok(())
    }
}

struct ScriptedCloser {
    sender: Sender<Step>,
}

impl HostCloser for ScriptedCloser {
    fn close(&self) {
        // The host may already be gone; nothing to do then.
        let _ = self.sender.send(Step::Close);
    }
}

impl ScriptedHostController {
    /// Queues an event delivered with no modifiers held.
    pub fn send(&self, event: HostEvent) {
        self.send_with_modifiers(event, ModifierState::NONE);
    }

    /// Queues an event; `modifiers` becomes the host's modifier state when
    /// the loop dequeues it.
    pub fn send_with_modifiers(&self, event: HostEvent, modifiers: ModifierState) {
        self.sender
            .send(Step::Event { event, modifiers })
            .expect("scripted host has been dropped");
    }

    /// Queues a close; the loop sees it after every earlier event.
    pub fn close(&self) {
        let _ = self.sender.send(Step::Close);
    }

    /// Queues a failure of the event source itself.
    pub fn fail(&self, reason: &str) {
        let _ = self.sender.send(Step::Fail(reason.to_owned()));
    }

    /// Sets the display the window is on; `None` makes the lookup fail.
    pub fn set_display(&self, index: Option<i32>) {
        self.display().display_index = index;
    }

    /// Sets the refresh rate reported for `display_index`.
    pub fn set_refresh_rate(&self, display_index: i32, hz: u32) {
        self.display().refresh_rates.insert(display_index, hz);
    }

    /// Makes mode queries for `display_index` fail.
    pub fn clear_refresh_rate(&self, display_index: i32) {
        self.display().refresh_rates.remove(&display_index);
    }

    /// Makes the next `enable_relative_mouse` fail.
    pub fn refuse_relative_mouse(&self) {
        self.shared.refuse_relative_mouse.store(true, Ordering::SeqCst);
    }

    pub fn relative_mouse_enabled(&self) -> bool {
        self.shared.relative_mouse.load(Ordering::SeqCst)
    }

    /// Number of refresh-rate queries issued so far.
    pub fn refresh_queries(&self) -> usize {
        self.display().refresh_queries
    }

    /// Arguments of every `set_fullscreen` call so far.
    pub fn fullscreen_calls(&self) -> Vec<bool> {
        self.display().fullscreen_calls.clone()
    }

    fn display(&self) -> std::sync::MutexGuard<'_, DisplayScript> {
        self.shared.display.lock().expect("lock poisoned")
    }
}
