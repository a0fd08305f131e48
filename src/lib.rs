#![doc(html_root_url = "https://docs.rs/packframe/latest")]
//! Public API for the `packframe` library.
//!
//! This crate wraps serializable payloads in length-prefixed frames: a
//! 4-byte big-endian body length followed by the body. It packs into
//! growable or caller-supplied fixed buffers and unpacks frames back into a
//! referenced payload. Transport is left to the caller.

pub mod codec;
pub mod config;
pub mod error;
pub mod frame;
pub mod hexdump;
pub mod metrics;
pub mod payload;

pub use codec::{FrameCodec, PayloadHandle, payload_handle};
pub use config::{CapacityRule, FrameConfig};
pub use error::{FrameError, Result};
pub use frame::{HEADER_SIZE, MAX_BODY_LEN, decode_header, try_decode_header};
pub use payload::{Message, Payload, RawPayload};
