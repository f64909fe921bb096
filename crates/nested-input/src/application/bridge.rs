//! Input bridge lifecycle: loop thread startup handshake and shutdown.
//!
//! [`InputBridge::start`] spawns the input loop thread and blocks until that
//! thread has finished host setup:
//!
//! ```text
//! caller                          loop thread
//! ──────                          ───────────
//! start() ──spawn──────────────►  block notification signal
//!   │                             build host (video + events)
//!   │                             enable relative mouse
//!   │  ◄──────── ready(closer) ── send on one-shot channel
//! return Ok(bridge)               EventDispatcher::run()
//!   ⋮                               ⋮
//! shutdown() ── closer.close() ─► wait_event → Closed
//!   join  ◄──────────────────────  return LoopExit
//! ```
//!
//! Everything the loop thread does before sending the ready message
//! happens-before `start` returns.  Setup failures travel back over the same
//! channel and are returned to the caller as a [`BridgeError`].

use std::future::Future;
use std::sync::{mpsc, Arc, Mutex};
use std::thread::{self, JoinHandle};

use nested_input_core::OutputState;
use thiserror::Error;
use tracing::{info, warn};

use crate::application::dispatch::{EventDispatcher, LoopExit};
use crate::application::hotkeys::HotkeyBindings;
use crate::infrastructure::host::{HostBackend, HostCloser, HostError};
use crate::infrastructure::signal::{self, SignalError};
use crate::infrastructure::sink::DownstreamSink;
use crate::infrastructure::storage::config::AppConfig;

/// Error type for bridge startup and shutdown.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The notification signal could not be blocked on the loop thread.
    #[error("signal masking failed: {0}")]
    SignalMask(#[from] SignalError),
    /// The host backend could not be initialised.
    #[error("host setup failed: {0}")]
    HostInit(#[source] HostError),
    /// The OS refused to spawn the loop thread.
    #[error("failed to spawn input loop thread: {0}")]
    Spawn(#[source] std::io::Error),
    /// The loop thread ended before reporting readiness.
    #[error("input loop thread exited during setup")]
    LoopThreadExited,
    /// The loop thread panicked.
    #[error("input loop thread panicked")]
    LoopPanicked,
    /// The blocking task running the shutdown did not complete.
    #[error("shutdown task failed: {0}")]
    ShutdownTask(#[source] tokio::task::JoinError),
}

/// Startup options for [`InputBridge::start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeOptions {
    /// Name given to the loop thread.
    pub thread_name: String,
    /// Signal blocked on the loop thread; empty disables masking.
    pub blocked_signal: String,
    pub hotkeys: HotkeyBindings,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for BridgeOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            thread_name: config.bridge.thread_name.clone(),
            blocked_signal: config.bridge.blocked_signal.clone(),
            hotkeys: config.hotkeys,
        }
    }
}

/// Handle to a running input loop thread.
///
/// Dropping the handle shuts the loop down and joins the thread.
pub struct InputBridge {
    output: Arc<OutputState>,
    closer: Box<dyn HostCloser>,
    handle: Option<JoinHandle<LoopExit>>,
}

impl InputBridge {
    /// Spawns the loop thread and returns once host setup has completed.
    ///
    /// `make_host` runs on the loop thread, after the notification signal is
    /// blocked there.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::SignalMask`] for an unknown signal name or a failed
    ///   mask update.
    /// - [`BridgeError::HostInit`] if `make_host` or relative mouse setup fails.
    /// - [`BridgeError::Spawn`] if the thread cannot be created.
    /// - [`BridgeError::LoopPanicked`] if setup panicked.
    pub fn start<H, F, S>(
        options: BridgeOptions,
        make_host: F,
        sink: Arc<Mutex<S>>,
        output: Arc<OutputState>,
    ) -> Result<Self, BridgeError>
    where
        H: HostBackend + 'static,
        F: FnOnce() -> Result<H, HostError> + Send + 'static,
        S: DownstreamSink + ?Sized + 'static,
    {
        signal::validate(&options.blocked_signal)?;

        let (ready_tx, ready_rx) =
            mpsc::sync_channel::<Result<Box<dyn HostCloser>, BridgeError>>(1);
        let loop_output = Arc::clone(&output);
        let BridgeOptions {
            thread_name,
            blocked_signal,
            hotkeys,
        } = options;

        let handle = thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || {
                let host = match set_up_host(&blocked_signal, make_host) {
                    Ok(host) => host,
                    Err(e) => {
                        let reason = e.to_string();
                        let _ = ready_tx.send(Err(e));
                        return LoopExit::Failed(reason);
                    }
                };
                if ready_tx.send(Ok(host.closer())).is_err() {
                    return LoopExit::Closed;
                }
                EventDispatcher::new(host, sink, loop_output, hotkeys).run()
            })
            .map_err(BridgeError::Spawn)?;

        match ready_rx.recv() {
            Ok(Ok(closer)) => {
                info!(thread = %thread_name, "input bridge started");
                Ok(Self {
                    output,
                    closer,
                    handle: Some(handle),
                })
            }
            Ok(Err(e)) => {
                let _ = handle.join();
                Err(e)
            }
            Err(_) => match handle.join() {
                Ok(_) => Err(BridgeError::LoopThreadExited),
                Err(_) => Err(BridgeError::LoopPanicked),
            },
        }
    }

    /// The output state written by the loop thread.
    pub fn output(&self) -> &Arc<OutputState> {
        &self.output
    }

    /// Whether the loop thread is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Closes the host event source and joins the loop thread.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::LoopPanicked`] if the loop thread panicked.
    pub fn shutdown(mut self) -> Result<LoopExit, BridgeError> {
        self.stop().unwrap_or(Ok(LoopExit::Closed))
    }

    /// Waits for `stop_request`, then shuts down on a blocking thread.
    ///
    /// A failed `stop_request` is logged and treated as a request to stop, so
    /// the join never runs on an async worker.
    ///
    /// # Errors
    ///
    /// As [`InputBridge::shutdown`], plus [`BridgeError::ShutdownTask`].
    pub async fn shutdown_on<F>(self, stop_request: F) -> Result<LoopExit, BridgeError>
    where
        F: Future<Output = std::io::Result<()>>,
    {
        if let Err(e) = stop_request.await {
            warn!("stop request failed, shutting down: {e}");
        }
        tokio::task::spawn_blocking(move || self.shutdown())
            .await
            .map_err(BridgeError::ShutdownTask)?
    }

    fn stop(&mut self) -> Option<Result<LoopExit, BridgeError>> {
        let handle = self.handle.take()?;
        self.closer.close();
        let result = handle.join().map_err(|_| BridgeError::LoopPanicked);
        if let Ok(exit) = &result {
            info!(?exit, "input bridge stopped");
        }
        Some(result)
    }
}

impl Drop for InputBridge {
    fn drop(&mut self) {
        if let Some(Err(e)) = self.stop() {
            warn!("input bridge did not stop cleanly: {e}");
        }
    }
}

/// Loop-thread setup, in order: signal mask, host, relative mouse.
fn set_up_host<H, F>(blocked_signal: &str, make_host: F) -> Result<H, BridgeError>
where
    H: HostBackend,
    F: FnOnce() -> Result<H, HostError>,
{
    signal::block_on_current_thread(blocked_signal)?;
    let mut host = make_host().map_err(BridgeError::HostInit)?;
    host.enable_relative_mouse().map_err(BridgeError::HostInit)?;
    Ok(host)
}
