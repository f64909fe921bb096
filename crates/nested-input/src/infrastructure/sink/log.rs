//! A sink that reports injections through `tracing`.
//!
//! Used by the `nested-input` binary when it runs standalone: every event
//! that would reach the compositor becomes one `debug` record with the
//! evdev code and host timestamp as structured fields.

use tracing::debug;

use super::{DownstreamSink, SinkError};

/// Logs every injection; never fails.
#[derive(Debug, Default)]
pub struct LogSink {
    forwarded: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events forwarded so far.
    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }
}

impl DownstreamSink for LogSink {
    fn inject_motion(&mut self, dx: i32, dy: i32, time_ms: u32) -> Result<(), SinkError> {
        self.forwarded += 1;
        debug!(dx, dy, time_ms, "pointer motion");
        Ok(())
    }

    fn inject_button(&mut self, code: u32, pressed: bool, time_ms: u32) -> Result<(), SinkError> {
        self.forwarded += 1;
        debug!(code, pressed, time_ms, "pointer button");
        Ok(())
    }

    fn inject_wheel(&mut self, dx: i32, dy: i32, time_ms: u32) -> Result<(), SinkError> {
        self.forwarded += 1;
        debug!(dx, dy, time_ms, "wheel");
        Ok(())
    }

    fn inject_key(&mut self, code: u32, pressed: bool, time_ms: u32) -> Result<(), SinkError> {
        self.forwarded += 1;
        debug!(code, pressed, time_ms, "key");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sink_counts_every_injection() {
        let mut sink = LogSink::new();

        sink.inject_motion(1, 2, 0).unwrap();
        sink.inject_button(0x110, true, 0).unwrap();
        sink.inject_wheel(0, -1, 0).unwrap();
        sink.inject_key(30, false, 0).unwrap();

        assert_eq!(sink.forwarded(), 4);
    }
}
