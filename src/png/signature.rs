use std::io::Read;

use crate::{read_fully, PngChunkError, PngChunkResult};

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the bytes given start with the PNG signature.
#[inline]
#[must_use]
pub fn is_png_signature(bytes: &[u8]) -> bool {
  bytes.starts_with(&PNG_SIGNATURE)
}

/// Consumes the first 8 bytes of the stream and checks them against
/// [`PNG_SIGNATURE`].
///
/// This should be called exactly once, before decoding any chunks. On success
/// the reader is left just past the signature.
///
/// ## Failure
/// * [`PngChunkError::Empty`] if the stream had no bytes at all.
/// * [`PngChunkError::TooShort`] if the stream ended before 8 bytes.
/// * [`PngChunkError::NotPng`] if the 8 bytes aren't the PNG signature.
/// * [`PngChunkError::Io`] if the reader itself failed.
pub fn check_png_signature<R: Read + ?Sized>(reader: &mut R) -> PngChunkResult<()> {
  let mut bytes = [0_u8; 8];
  match read_fully(reader, &mut bytes)? {
    0 => Err(PngChunkError::Empty),
    len if len < bytes.len() => Err(PngChunkError::TooShort { len }),
    _ if bytes == PNG_SIGNATURE => Ok(()),
    _ => Err(PngChunkError::NotPng),
  }
}
