//! Codec configuration types.
//!
//! The only knob is how a caller-supplied fixed-size buffer is checked for
//! room before packing. Growable buffers are always sized exactly.

use crate::frame::HEADER_SIZE;

/// Capacity comparison applied when packing into a fixed-size buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapacityRule {
    /// The frame must be strictly shorter than the buffer, leaving at least
    /// one trailing byte of slack. This is the historical wire behaviour.
    #[default]
    ReserveTrailingByte,
    /// The frame may fill the buffer completely.
    Exact,
}

impl CapacityRule {
    /// Minimum buffer capacity this rule demands for a body of `body_len`
    /// bytes, or `None` if that capacity overflows `usize`.
    #[must_use]
    pub fn required_capacity(self, body_len: usize) -> Option<usize> {
        let frame = HEADER_SIZE.checked_add(body_len)?;
        match self {
            Self::ReserveTrailingByte => frame.checked_add(1),
            Self::Exact => Some(frame),
        }
    }

    /// Returns true if a buffer of `capacity` bytes can hold a frame with a
    /// `body_len`-byte body.
    #[must_use]
    pub fn fits(self, body_len: usize, capacity: usize) -> bool {
        self.required_capacity(body_len)
            .is_some_and(|needed| needed <= capacity)
    }
}

/// Settings applied by a [`FrameCodec`](crate::FrameCodec).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameConfig {
    /// Rule for fixed-size destination buffers.
    pub capacity_rule: CapacityRule,
}

impl FrameConfig {
    /// Replace the fixed-buffer capacity rule.
    #[must_use]
    pub const fn with_capacity_rule(mut self, rule: CapacityRule) -> Self {
        self.capacity_rule = rule;
        self
    }
}
