use std::io::{Read, Seek};

use bytemuck::{Pod, Zeroable};
use log::{debug, trace};

use super::*;
use crate::{try_read_pod, ChunkField, PngChunkError, PngChunkResult, U32BE};

/// What the caller wants out of the decoder beyond the chunk framing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
  /// Read `tEXt` payloads into memory instead of skipping them.
  pub print_text: bool,
}

/// The length and type fields, which always come as a pair.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct ChunkHeader {
  length: U32BE,
  chunk_ty: ChunkType,
}

/// Pulls chunk records out of a PNG stream, one at a time.
///
/// The decoder owns the stream and only ever moves forward through it. The
/// payload of each chunk is skipped with a relative seek, so the stream must
/// be [`Seek`] as well as [`Read`].
///
/// There's two ways to drive it:
/// * [`decode_next`](Self::decode_next) decodes exactly one record, and leaves
///   the decision to stop at `IEND` up to you.
/// * As an [`Iterator`], which stops after `IEND` on its own.
///
/// ```
/// use std::io::Cursor;
/// use pngchunks::png::*;
///
/// let mut png = PNG_SIGNATURE.to_vec();
/// png.extend_from_slice(&[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
/// let decoder = ChunkDecoder::from_png_stream(Cursor::new(png), DecodeOptions::default())?;
/// let types: Vec<ChunkType> = decoder.map(|r| r.map(|c| c.chunk_ty())).collect::<Result<_, _>>()?;
/// assert_eq!(types, [ChunkType::IEND]);
/// # Ok::<(), pngchunks::PngChunkError>(())
/// ```
#[derive(Debug)]
pub struct ChunkDecoder<R> {
  reader: R,
  options: DecodeOptions,
  position: u64,
  finished: bool,
}
impl<R: Read + Seek> ChunkDecoder<R> {
  /// Makes a decoder for a reader that's already past the PNG signature.
  #[inline]
  #[must_use]
  pub const fn new(reader: R, options: DecodeOptions) -> Self {
    Self { reader, options, position: PNG_SIGNATURE.len() as u64, finished: false }
  }

  /// Checks the PNG signature and then makes a decoder for the chunks after
  /// it.
  pub fn from_png_stream(mut reader: R, options: DecodeOptions) -> PngChunkResult<Self> {
    check_png_signature(&mut reader)?;
    Ok(Self::new(reader, options))
  }

  /// Bytes of the stream consumed so far, counting the signature.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> u64 {
    self.position
  }

  /// Gives back the reader.
  #[inline]
  #[must_use]
  pub fn into_inner(self) -> R {
    self.reader
  }

  /// Decodes the next chunk record.
  ///
  /// * `Ok(Some(record))` when a full record was read.
  /// * `Ok(None)` when the stream ended cleanly, right where a record would
  ///   have started.
  /// * `Err(_)` when the stream ended partway through a record, or the reader
  ///   failed.
  ///
  /// After an error (or a clean end) every later call gives `Ok(None)`.
  pub fn decode_next(&mut self) -> PngChunkResult<Option<ChunkRecord>> {
    if self.finished {
      return Ok(None);
    }
    let out = self.read_record();
    if !matches!(out, Ok(Some(_))) {
      self.finished = true;
    }
    out
  }

  fn read_record(&mut self) -> PngChunkResult<Option<ChunkRecord>> {
    let offset = self.position;
    let truncated = |field: ChunkField| PngChunkError::Truncated { offset, field };

    let ChunkHeader { length, chunk_ty } = match try_read_pod::<ChunkHeader, _>(&mut self.reader)? {
      Ok(header) => header,
      Err(0) => {
        debug!("stream ended cleanly at offset {offset}");
        return Ok(None);
      }
      Err(got) if got < 4 => return Err(truncated(ChunkField::Length)),
      Err(_) => return Err(truncated(ChunkField::Type)),
    };
    let length = length.to_u32();
    debug!(
      "{chunk_ty:?} at offset {offset}: {length} bytes, {}",
      if chunk_ty.is_critical() { "critical" } else { "ancillary" }
    );

    let text = if chunk_ty == ChunkType::tEXt && self.options.print_text {
      let mut data = Vec::new();
      (&mut self.reader).take(u64::from(length)).read_to_end(&mut data)?;
      if data.len() != length as usize {
        return Err(truncated(ChunkField::Payload));
      }
      Some(TextPayload::new(data))
    } else {
      trace!("skipping {length} payload bytes of {chunk_ty:?}");
      self.reader.seek_relative(i64::from(length))?;
      None
    };

    let declared_crc = match try_read_pod::<U32BE, _>(&mut self.reader)? {
      Ok(crc) => crc.to_u32(),
      Err(_) => return Err(truncated(ChunkField::Checksum)),
    };

    let record = ChunkRecord { offset, length, chunk_ty, declared_crc, text };
    self.position += record.encoded_len();
    Ok(Some(record))
  }
}
impl<R: Read + Seek> Iterator for ChunkDecoder<R> {
  type Item = PngChunkResult<ChunkRecord>;

  /// Yields records up to and including `IEND`, then stops.
  fn next(&mut self) -> Option<Self::Item> {
    let out = self.decode_next().transpose();
    if let Some(Ok(record)) = &out {
      if record.is_terminal() {
        self.finished = true;
      }
    }
    out
  }
}
impl<R: Read + Seek> core::iter::FusedIterator for ChunkDecoder<R> {}
