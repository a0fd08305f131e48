//! Packing payloads into length-prefixed frames and back.
//!
//! A [`FrameCodec`] references at most one payload through a shared
//! [`PayloadHandle`]. Packing asks the payload for its encoded length,
//! writes the 4-byte header and lets the payload fill the body. Unpacking
//! resets the payload and feeds it everything after the header.
//!
//! Two packing disciplines are offered:
//!
//! - [`FrameCodec::pack`] resizes a growable [`BytesMut`] to exactly the frame length;
//! - [`FrameCodec::pack_into_slice`] writes into a caller-owned fixed buffer, checked against
//!   the configured [`CapacityRule`](crate::config::CapacityRule).
//!
//! The codec is single-threaded: handles are `Rc<RefCell<_>>` and no
//! synchronisation is performed.
//!
//! # Examples
//!
//! ```
//! use packframe::{FrameCodec, RawPayload};
//!
//! let codec = FrameCodec::with_payload(RawPayload::from(vec![1, 2, 3]));
//! let frame = codec.pack_to_bytes().unwrap();
//! assert_eq!(&frame[..], &[0, 0, 0, 3, 1, 2, 3]);
//!
//! let receiver = FrameCodec::with_payload(RawPayload::default());
//! receiver.unpack(&frame).unwrap();
//! assert_eq!(receiver.get().unwrap().borrow().as_bytes(), &[1, 2, 3]);
//! ```

use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
};

use bytes::{Bytes, BytesMut};
use log::{debug, warn};

use crate::{
    config::FrameConfig,
    error::{FrameError, Result},
    frame::{self, HEADER_SIZE},
    metrics::{self, Direction},
    payload::Payload,
};

/// Shared, mutable reference to a payload.
pub type PayloadHandle<P> = Rc<RefCell<P>>;

/// Wrap `payload` in a fresh [`PayloadHandle`].
#[must_use]
pub fn payload_handle<P>(payload: P) -> PayloadHandle<P> { Rc::new(RefCell::new(payload)) }

/// Converts between one referenced payload and its framed bytes.
pub struct FrameCodec<P> {
    payload: Option<PayloadHandle<P>>,
    config: FrameConfig,
}

impl<P> FrameCodec<P> {
    /// Create a codec referencing `payload`, or nothing.
    #[must_use]
    pub fn new(payload: Option<PayloadHandle<P>>) -> Self {
        Self {
            payload,
            config: FrameConfig::default(),
        }
    }

    /// Create a codec referencing a new handle around `payload`.
    #[must_use]
    pub fn with_payload(payload: P) -> Self { Self::new(Some(payload_handle(payload))) }

    /// Replace the codec configuration.
    #[must_use]
    pub fn with_config(mut self, config: FrameConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> FrameConfig { self.config }

    /// Reference `payload` from now on, returning the previous handle.
    pub fn set(&mut self, payload: Option<PayloadHandle<P>>) -> Option<PayloadHandle<P>> {
        std::mem::replace(&mut self.payload, payload)
    }

    /// Handle to the referenced payload, if any.
    #[must_use]
    pub fn get(&self) -> Option<PayloadHandle<P>> { self.payload.clone() }

    /// Decode the body length from the header at the start of `buf`.
    ///
    /// Returns `0` when `buf` is too short to hold a header, which cannot be
    /// told apart from an empty body. See [`frame::try_decode_header`].
    #[must_use]
    pub fn decode_header(buf: &[u8]) -> u32 { frame::decode_header(buf) }

    fn payload(&self) -> Result<&PayloadHandle<P>> {
        self.payload.as_ref().ok_or(FrameError::NoPayload)
    }

    fn borrow_payload(&self) -> Result<Ref<'_, P>> {
        self.payload()?
            .try_borrow()
            .map_err(|_| FrameError::PayloadBusy)
    }
}

impl<P: Payload> FrameCodec<P> {
    /// Pack the payload into `buf`, resizing it to exactly fit the frame.
    ///
    /// Any previous contents of `buf` are discarded. If the payload encoder
    /// fails, `buf` is left at the frame length with unspecified contents.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::NoPayload`] if nothing is referenced,
    /// [`FrameError::BodyTooLarge`] if the body does not fit the header, or
    /// [`FrameError::Encode`] if the payload fails to encode.
    pub fn pack(&self, buf: &mut BytesMut) -> Result<()> {
        record(Direction::Pack, self.pack_growable(buf))
    }

    /// Pack the payload into a newly allocated frame.
    ///
    /// # Errors
    ///
    /// See [`FrameCodec::pack`].
    pub fn pack_to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        self.pack(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Pack the payload into the caller's fixed-size `buf`.
    ///
    /// The whole of `buf` is zeroed before the frame is written, so bytes
    /// past the frame never hold stale data. Returns the frame length.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InsufficientCapacity`] without touching `buf`
    /// when the configured capacity rule rejects it, plus the errors listed
    /// for [`FrameCodec::pack`].
    pub fn pack_into_slice(&self, buf: &mut [u8]) -> Result<usize> {
        record(Direction::Pack, self.pack_fixed(buf))
    }

    /// Reset the payload and parse the body of the frame in `buf` into it.
    ///
    /// The body is everything after the header. Input too short to hold a
    /// header, or holding only a header, leaves the payload reset and
    /// succeeds. The payload is reset even when parsing fails.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::NoPayload`] if nothing is referenced,
    /// [`FrameError::PayloadBusy`] if the handle is borrowed elsewhere, or
    /// [`FrameError::Decode`] if the payload rejects the body.
    pub fn unpack(&self, buf: &[u8]) -> Result<()> { record(Direction::Unpack, self.unpack_body(buf)) }

    fn pack_growable(&self, buf: &mut BytesMut) -> Result<()> {
        let payload = self.borrow_payload()?;
        let msg_size = payload.encoded_len().map_err(FrameError::encode)?;
        let total = frame::frame_len(msg_size)?;

        buf.clear();
        buf.resize(total, 0);
        write_frame(&*payload, msg_size, buf)?;
        debug!("packed frame: body_len={msg_size}, frame_len={total}");
        Ok(())
    }

    fn pack_fixed(&self, buf: &mut [u8]) -> Result<usize> {
        let payload = self.borrow_payload()?;
        let msg_size = payload.encoded_len().map_err(FrameError::encode)?;
        let total = frame::frame_len(msg_size)?;

        let rule = self.config.capacity_rule;
        let capacity = buf.len();
        if !rule.fits(msg_size, capacity) {
            return Err(FrameError::InsufficientCapacity {
                needed: rule.required_capacity(msg_size).unwrap_or(usize::MAX),
                capacity,
            });
        }

        buf.fill(0);
        write_frame(&*payload, msg_size, &mut buf[..total])?;
        debug!("packed frame into fixed buffer: body_len={msg_size}, capacity={capacity}");
        Ok(total)
    }

    fn unpack_body(&self, buf: &[u8]) -> Result<()> {
        let mut payload = self
            .payload()?
            .try_borrow_mut()
            .map_err(|_| FrameError::PayloadBusy)?;
        payload.reset();

        let Some(body) = buf.get(HEADER_SIZE..) else {
            debug!("frame shorter than header: len={}, treating as empty body", buf.len());
            return Ok(());
        };

        let announced = frame::decode_header(buf);
        if usize::try_from(announced).ok() != Some(body.len()) {
            warn!(
                "frame header disagrees with body: announced={announced}, actual={}",
                body.len()
            );
        }

        if body.is_empty() {
            return Ok(());
        }
        payload.decode_from(body).map_err(FrameError::decode)?;
        debug!("unpacked frame: body_len={}", body.len());
        Ok(())
    }
}

/// Write header and body for a `msg_size`-byte payload into `frame`, which
/// must be exactly `HEADER_SIZE + msg_size` bytes long.
fn write_frame<P: Payload>(payload: &P, msg_size: usize, frame: &mut [u8]) -> Result<()> {
    frame::encode_header(msg_size, frame)?;
    if msg_size > 0 {
        payload
            .encode_into(&mut frame[HEADER_SIZE..])
            .map_err(FrameError::encode)?;
    }
    Ok(())
}

fn record<T>(direction: Direction, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => metrics::inc_frames(direction),
        Err(error) => {
            metrics::inc_errors(direction);
            debug!("{} failed: error={error}", direction.as_str());
        }
    }
    result
}

impl<P> Default for FrameCodec<P> {
    fn default() -> Self { Self::new(None) }
}

impl<P> Clone for FrameCodec<P> {
    fn clone(&self) -> Self {
        Self {
            payload: self.payload.clone(),
            config: self.config,
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for FrameCodec<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameCodec")
            .field("payload", &self.payload)
            .field("config", &self.config)
            .finish()
    }
}
