//! Per-thread signal masking for the input loop.
//!
//! The process uses a notification signal (`SIGUSR1` by default) for its own
//! purposes; the input loop thread must never be the one to receive it.  The
//! loop calls [`block_on_current_thread`] before any host setup, so the mask
//! is in place for the whole lifetime of the thread.
//!
//! An empty signal name disables masking.  On non-Unix targets masking is a
//! no-op.

use thiserror::Error;

/// Error type for signal masking.
#[derive(Debug, Error)]
pub enum SignalError {
    /// The name does not identify a signal on this platform.
    #[error("unknown signal name {0:?}")]
    Unknown(String),
    /// `pthread_sigmask` failed.
    #[error("failed to update thread signal mask: {0}")]
    Mask(String),
}

/// Checks that `name` is empty or a valid signal name (e.g. `"SIGUSR1"`).
///
/// # Errors
///
/// Returns [`SignalError::Unknown`] for unrecognised names.
pub fn validate(name: &str) -> Result<(), SignalError> {
    if name.is_empty() {
        return Ok(());
    }
    #[cfg(unix)]
    {
        parse(name).map(|_| ())
    }
    #[cfg(not(unix))]
    {
        Ok(())
    }
}

/// Blocks `name` in the calling thread's signal mask.
///
/// Returns `Ok(true)` if a signal was blocked and `Ok(false)` if masking is
/// disabled or unsupported on this platform.
///
/// # Errors
///
/// Returns [`SignalError::Unknown`] for unrecognised names and
/// [`SignalError::Mask`] if the mask could not be changed.
pub fn block_on_current_thread(name: &str) -> Result<bool, SignalError> {
    if name.is_empty() {
        return Ok(false);
    }
    #[cfg(unix)]
    {
        use nix::sys::signal::{pthread_sigmask, SigSet, SigmaskHow};

        let signal = parse(name)?;
        let mut set = SigSet::empty();
        set.add(signal);
        pthread_sigmask(SigmaskHow::SIG_BLOCK, Some(&set), None)
            .map_err(|e| SignalError::Mask(e.to_string()))?;
        tracing::debug!(signal = name, "signal blocked on input loop thread");
        Ok(true)
    }
    #[cfg(not(unix))]
    {
        tracing::debug!(signal = name, "signal masking unsupported on this platform");
        Ok(false)
    }
}

#[cfg(unix)]
fn parse(name: &str) -> Result<nix::sys::signal::Signal, SignalError> {
    name.parse()
        .map_err(|_| SignalError::Unknown(name.to_string()))
}
