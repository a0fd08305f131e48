//! Metric helpers for `packframe`.
//!
//! This module defines metric names and simple helper functions wrapping
//! the [`metrics`](https://docs.rs/metrics) crate. Without the `metrics`
//! feature the helpers compile to no-ops.

#[cfg(feature = "metrics")]
use metrics::counter;

/// Name of the counter tracking successfully packed and unpacked frames.
pub const FRAMES_TOTAL: &str = "packframe_frames_total";
/// Name of the counter tracking failed pack and unpack attempts.
pub const ERRORS_TOTAL: &str = "packframe_errors_total";

/// Direction of a codec operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Payload to frame.
    Pack,
    /// Frame to payload.
    Unpack,
}

impl Direction {
    /// Label value recorded for this direction.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Pack => "pack",
            Direction::Unpack => "unpack",
        }
    }
}

/// Record a frame processed in the given direction.
#[cfg(feature = "metrics")]
pub fn inc_frames(direction: Direction) {
    counter!(FRAMES_TOTAL, "direction" => direction.as_str()).increment(1);
}

/// Record a failed operation in the given direction.
#[cfg(feature = "metrics")]
pub fn inc_errors(direction: Direction) {
    counter!(ERRORS_TOTAL, "direction" => direction.as_str()).increment(1);
}

#[cfg(not(feature = "metrics"))]
pub fn inc_frames(_direction: Direction) {}

#[cfg(not(feature = "metrics"))]
pub fn inc_errors(_direction: Direction) {}
