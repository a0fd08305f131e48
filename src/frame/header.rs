//! Encoding and decoding of the fixed-size length header.

use crate::error::{FrameError, Result};

/// Size in bytes of the length header preceding every frame body.
pub const HEADER_SIZE: usize = 4;

/// Largest body length the header can describe.
pub const MAX_BODY_LEN: u32 = u32::MAX;

/// Total frame length for a body of `body_len` bytes.
///
/// # Errors
///
/// Returns [`FrameError::BodyTooLarge`] if `body_len` exceeds
/// [`MAX_BODY_LEN`] or the frame length overflows `usize`.
///
/// # Examples
///
/// ```
/// use packframe::frame::frame_len;
///
/// assert_eq!(frame_len(3).unwrap(), 7);
/// ```
pub fn frame_len(body_len: usize) -> Result<usize> {
    u32::try_from(body_len).map_err(|_| FrameError::BodyTooLarge { len: body_len })?;
    HEADER_SIZE
        .checked_add(body_len)
        .ok_or(FrameError::BodyTooLarge { len: body_len })
}

/// Write the header for a body of `body_len` bytes into the start of `dst`.
///
/// Only the first [`HEADER_SIZE`] bytes of `dst` are touched.
///
/// # Errors
///
/// Returns [`FrameError::BodyTooLarge`] if `body_len` does not fit the header
/// or [`FrameError::IncompleteHeader`] if `dst` is shorter than the header.
///
/// # Examples
///
/// ```
/// use packframe::frame::encode_header;
///
/// let mut buf = [0u8; 4];
/// encode_header(256, &mut buf).unwrap();
/// assert_eq!(buf, [0x00, 0x00, 0x01, 0x00]);
/// ```
pub fn encode_header(body_len: usize, dst: &mut [u8]) -> Result<()> {
    let value =
        u32::try_from(body_len).map_err(|_| FrameError::BodyTooLarge { len: body_len })?;
    let have = dst.len();
    let slot = dst
        .get_mut(..HEADER_SIZE)
        .ok_or(FrameError::IncompleteHeader {
            have,
            need: HEADER_SIZE,
        })?;
    #[expect(
        clippy::big_endian_bytes,
        reason = "The frame header is defined in network byte order."
    )]
    slot.copy_from_slice(&value.to_be_bytes());
    Ok(())
}

/// Decode the body length from the header at the start of `buf`.
///
/// Returns `0` when `buf` is shorter than [`HEADER_SIZE`]. That value is
/// indistinguishable from a header announcing an empty body; use
/// [`try_decode_header`] when the two cases must be told apart.
///
/// # Examples
///
/// ```
/// use packframe::frame::decode_header;
///
/// assert_eq!(decode_header(&[0x00, 0x00, 0x01, 0x00]), 256);
/// assert_eq!(decode_header(&[0x00, 0x01]), 0);
/// ```
#[must_use]
pub fn decode_header(buf: &[u8]) -> u32 { try_decode_header(buf).unwrap_or(0) }

/// Decode the body length, reporting a short buffer as an error.
///
/// Bytes after the header are ignored.
///
/// # Errors
///
/// Returns [`FrameError::IncompleteHeader`] if `buf` is shorter than
/// [`HEADER_SIZE`].
pub fn try_decode_header(buf: &[u8]) -> Result<u32> {
    let header = buf
        .first_chunk::<HEADER_SIZE>()
        .ok_or(FrameError::IncompleteHeader {
            have: buf.len(),
            need: HEADER_SIZE,
        })?;
    #[expect(
        clippy::big_endian_bytes,
        reason = "The frame header is defined in network byte order."
    )]
    let value = u32::from_be_bytes(*header);
    Ok(value)
}
