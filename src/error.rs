//! Canonical error and result types for the crate.
//!
//! Every fallible framing operation reports a [`FrameError`]. Payload
//! encoder and parser failures are boxed so the codec stays independent of
//! the concrete payload error type.

use std::error::Error;

use thiserror::Error;

/// Boxed error produced by a payload's own encoder or parser.
pub type PayloadError = Box<dyn Error + Send + Sync>;

/// Errors raised while packing or unpacking a frame.
#[derive(Debug, Error)]
pub enum FrameError {
    /// No payload is referenced by the codec.
    #[error("no payload referenced")]
    NoPayload,

    /// The payload handle is already borrowed elsewhere.
    #[error("payload is borrowed elsewhere")]
    PayloadBusy,

    /// The encoded body does not fit in the 32-bit length header.
    #[error("frame body too large: {len} bytes exceeds {max}", max = u32::MAX)]
    BodyTooLarge {
        /// Encoded body length reported by the payload.
        len: usize,
    },

    /// A fixed-size destination cannot hold the frame.
    #[error("insufficient capacity: need {needed} bytes, buffer holds {capacity}")]
    InsufficientCapacity {
        /// Minimum capacity the active rule demands.
        needed: usize,
        /// Capacity of the caller's buffer.
        capacity: usize,
    },

    /// The buffer is shorter than a frame header.
    #[error("incomplete frame header: have {have}, need {need}")]
    IncompleteHeader {
        /// Bytes available.
        have: usize,
        /// Bytes required for a complete header.
        need: usize,
    },

    /// The payload failed to serialize itself.
    #[error("payload encoding failed: {0}")]
    Encode(#[source] PayloadError),

    /// The payload rejected the frame body. The payload has already been reset.
    #[error("payload decoding failed: {0}")]
    Decode(#[source] PayloadError),
}

impl FrameError {
    /// Wrap a payload encoder failure.
    pub fn encode<E>(error: E) -> Self
    where
        E: Into<PayloadError>,
    {
        Self::Encode(error.into())
    }

    /// Wrap a payload parser failure.
    pub fn decode<E>(error: E) -> Self
    where
        E: Into<PayloadError>,
    {
        Self::Decode(error.into())
    }

    /// Returns true if the failure originated in the payload rather than the
    /// framing layer.
    #[must_use]
    pub fn is_payload_error(&self) -> bool { matches!(self, Self::Encode(_) | Self::Decode(_)) }
}

/// Canonical result alias used by `packframe` public APIs.
pub type Result<T> = std::result::Result<T, FrameError>;
