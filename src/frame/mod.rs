//! Frame layout and length-header primitives.
//!
//! A frame is a 4-byte big-endian length header followed by that many body
//! bytes:
//!
//! ```text
//! Offset  Size      Field
//! 0       4 bytes   Header: length of Body, 0..=u32::MAX
//! 4       N bytes   Body: serialized payload bytes
//! ```

pub mod header;

pub use header::{
    HEADER_SIZE,
    MAX_BODY_LEN,
    decode_header,
    encode_header,
    frame_len,
    try_decode_header,
};
