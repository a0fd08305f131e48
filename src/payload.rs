//! Payload serialization seam used by the frame codec.
//!
//! The codec never encodes payloads itself. It asks a [`Payload`] for its
//! encoded length, hands it an exactly sized byte range to fill, and on the
//! way back resets it before handing it the body bytes to parse.
//!
//! Two implementations ship with the crate:
//!
//! - every [`Message`] that is also [`Default`], encoded with bincode's standard configuration;
//! - [`RawPayload`], which carries opaque bytes verbatim.

use std::convert::Infallible;

use bincode::{
    BorrowDecode,
    Encode,
    borrow_decode_from_slice,
    config,
    enc::{EncoderImpl, write::SizeWriter},
    encode_into_slice,
    encode_to_vec,
    error::{DecodeError, EncodeError},
};

/// Serialization capability required from framed payloads.
///
/// Implementors own their encoding; the codec only decides where the bytes
/// go. `encode_into` always receives a slice of exactly
/// [`encoded_len`](Self::encoded_len) bytes and `decode_from` receives the
/// whole frame body.
pub trait Payload {
    /// Error raised while sizing or encoding the payload.
    type EncodeError: std::error::Error + Send + Sync + 'static;

    /// Error raised while parsing the payload.
    type DecodeError: std::error::Error + Send + Sync + 'static;

    /// Number of bytes the payload occupies once encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be sized.
    fn encoded_len(&self) -> Result<usize, Self::EncodeError>;

    /// Encode the payload into `dst`, which is exactly `encoded_len` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded.
    fn encode_into(&self, dst: &mut [u8]) -> Result<(), Self::EncodeError>;

    /// Replace the payload's state with the contents of `src`.
    ///
    /// # Errors
    ///
    /// Returns an error if `src` is not a valid encoding.
    fn decode_from(&mut self, src: &[u8]) -> Result<(), Self::DecodeError>;

    /// Restore the payload to its empty state.
    fn reset(&mut self);
}

/// Wrapper trait for application message types.
///
/// Any type deriving [`Encode`] and [`BorrowDecode`] automatically implements
/// this trait via a blanket implementation. The default methods provide
/// convenient helpers to serialize and deserialize using bincode's
/// standard configuration.
pub trait Message: Encode + for<'de> BorrowDecode<'de, ()> {
    /// Serialize the message into a byte vector.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodeError`] if serialization fails.
    fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> { encode_to_vec(self, config::standard()) }

    /// Deserialize a message from a byte slice, returning the message and
    /// the number of bytes consumed.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if deserialization fails.
    fn from_bytes(bytes: &[u8]) -> Result<(Self, usize), DecodeError>
    where
        Self: Sized,
    {
        borrow_decode_from_slice(bytes, config::standard())
    }
}

impl<T> Message for T where for<'de> T: Encode + BorrowDecode<'de, ()> {}

impl<M> Payload for M
where
    M: Message + Default,
{
    type EncodeError = EncodeError;
    type DecodeError = DecodeError;

    fn encoded_len(&self) -> Result<usize, EncodeError> {
        let mut encoder = EncoderImpl::new(SizeWriter::default(), config::standard());
        Encode::encode(self, &mut encoder)?;
        Ok(encoder.into_writer().bytes_written)
    }

    fn encode_into(&self, dst: &mut [u8]) -> Result<(), EncodeError> {
        let written = encode_into_slice(self, dst, config::standard())?;
        if written != dst.len() {
            return Err(EncodeError::Other(
                "message encoded to fewer bytes than its reported length",
            ));
        }
        Ok(())
    }

    fn decode_from(&mut self, src: &[u8]) -> Result<(), DecodeError> {
        let (message, consumed) = Self::from_bytes(src)?;
        if consumed != src.len() {
            return Err(DecodeError::Other("trailing bytes after message"));
        }
        *self = message;
        Ok(())
    }

    fn reset(&mut self) { *self = Self::default(); }
}

/// Opaque payload whose encoding is its own bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawPayload(pub Vec<u8>);

impl RawPayload {
    /// Borrow the carried bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    /// Consume the payload, returning its bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> { self.0 }
}

impl From<Vec<u8>> for RawPayload {
    fn from(bytes: Vec<u8>) -> Self { Self(bytes) }
}

impl From<&[u8]> for RawPayload {
    fn from(bytes: &[u8]) -> Self { Self(bytes.to_vec()) }
}

impl Payload for RawPayload {
    type EncodeError = Infallible;
    type DecodeError = Infallible;

    fn encoded_len(&self) -> Result<usize, Infallible> { Ok(self.0.len()) }

    fn encode_into(&self, dst: &mut [u8]) -> Result<(), Infallible> {
        dst.copy_from_slice(&self.0);
        Ok(())
    }

    fn decode_from(&mut self, src: &[u8]) -> Result<(), Infallible> {
        self.0.clear();
        self.0.extend_from_slice(src);
        Ok(())
    }

    fn reset(&mut self) { self.0.clear(); }
}
