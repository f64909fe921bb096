//! Recording sink for unit and integration tests.
//!
//! The `RecordingSink` replaces the compositor with an in-memory call log.
//! Every injection is pushed onto `calls` in order, so tests can assert both
//! what was forwarded and the interleaving between event kinds.
//!
//! # Usage in tests
//!
//! ```ignore
//! let sink = Arc::new(Mutex::new(RecordingSink::new()));
//! // ... run the loop ...
//! assert_eq!(sink.lock().unwrap().keys(), vec![(30, true, 5)]);
//! ```
//!
//! Set `should_fail = true` to make every call return
//! [`SinkError::Rejected`] without recording anything.

use super::{DownstreamSink, SinkError};

/// One recorded injection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkCall {
    Motion { dx: i32, dy: i32, time_ms: u32 },
    Button { code: u32, pressed: bool, time_ms: u32 },
    Wheel { dx: i32, dy: i32, time_ms: u32 },
    Key { code: u32, pressed: bool, time_ms: u32 },
}

/// A sink that records every call without injecting anything.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Every successful call, in order.
    pub calls: Vec<SinkCall>,
    /// When `true`, every method returns an error and records nothing.
    pub should_fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(dx, dy, time_ms)` of every motion call.
    pub fn motions(&self) -> Vec<(i32, i32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                SinkCall::Motion { dx, dy, time_ms } => Some((dx, dy, time_ms)),
                _ => None,
            })
            .collect()
    }

    /// `(code, pressed, time_ms)` of every button call.
    pub fn buttons(&self) -> Vec<(u32, bool, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                SinkCall::Button { code, pressed, time_ms } => Some((code, pressed, time_ms)),
                _ => None,
            })
            .collect()
    }

    /// `(dx, dy, time_ms)` of every wheel call.
    pub fn wheels(&self) -> Vec<(i32, i32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                SinkCall::Wheel { dx, dy, time_ms } => Some((dx, dy, time_ms)),
                _ => None,
            })
            .collect()
    }

    /// `(code, pressed, time_ms)` of every key call.
    pub fn keys(&self) -> Vec<(u32, bool, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                SinkCall::Key { code, pressed, time_ms } => Some((code, pressed, time_ms)),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, call: SinkCall) -> Result<(), SinkError> {
        if self.should_fail {
            return Err(SinkError::Rejected("mock failure".into()));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl DownstreamSink for RecordingSink {
    fn inject_motion(&mut self, dx: i32, dy: i32, time_ms: u32) -> Result<(), SinkError> {
        self.record(SinkCall::Motion { dx, dy, time_ms })
    }

    fn inject_button(&mut self, code: u32, pressed: bool, time_ms: u32) -> Result<(), SinkError> {
        self.record(SinkCall::Button { code, pressed, time_ms })
    }

    fn inject_wheel(&mut self, dx: i32, dy: i32, time_ms: u32) -> Result<(), SinkError> {
        self.record(SinkCall::Wheel { dx, dy, time_ms })
    }

    fn inject_key(&mut self, code: u32, pressed: bool, time_ms: u32) -> Result<(), SinkError> {
        self.record(SinkCall::Key { code, pressed, time_ms })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_call_order_across_kinds() {
        // Arrange
        let mut sink = RecordingSink::new();

        // Act
        sink.inject_key(30, true, 1).unwrap();
        sink.inject_motion(1, 1, 2).unwrap();
        sink.inject_key(30, false, 3).unwrap();

        // Assert
        assert_eq!(
            sink.calls,
            vec![
                SinkCall::Key { code: 30, pressed: true, time_ms: 1 },
                SinkCall::Motion { dx: 1, dy: 1, time_ms: 2 },
                SinkCall::Key { code: 30, pressed: false, time_ms: 3 },
            ]
        );
        assert_eq!(sink.keys(), vec![(30, true, 1), (30, false, 3)]);
        assert!(sink.buttons().is_empty());
    }

    #[test]
    fn test_should_fail_records_nothing() {
        let mut sink = RecordingSink { should_fail: true, ..Default::default() };

        assert!(sink.inject_wheel(0, 1, 0).is_err());
        assert!(sink.wheels().is_empty());
    }
}
