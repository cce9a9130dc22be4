use core::fmt;
use std::io;

use thiserror::Error;

/// An error from decoding a PNG chunk stream.
#[derive(Debug, Error)]
pub enum PngChunkError {
  /// The underlying reader failed for a reason other than running out of
  /// bytes.
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  /// There were no bytes at all where the PNG signature should be.
  #[error("The file is empty.")]
  Empty,

  /// There were some bytes, but fewer than the 8 the signature needs.
  #[error("The file is too short to hold a PNG header ({len} of 8 bytes).")]
  TooShort { len: usize },

  /// The first 8 bytes aren't the PNG signature.
  #[error("The file does not start with a PNG header.")]
  NotPng,

  /// The stream ran out partway through a chunk.
  ///
  /// `offset` is where the chunk's length field starts.
  #[error("Chunk at offset {offset} is truncated in its {field}.")]
  Truncated { offset: u64, field: ChunkField },
}
impl PngChunkError {
  /// If this is the "empty or too short" input condition.
  #[inline]
  #[must_use]
  pub const fn is_short_input(&self) -> bool {
    matches!(self, Self::Empty | Self::TooShort { .. })
  }

  /// If this is a truncation inside of a chunk record.
  #[inline]
  #[must_use]
  pub const fn is_truncation(&self) -> bool {
    matches!(self, Self::Truncated { .. })
  }
}

/// Shorthand for a result with a [`PngChunkError`].
pub type PngChunkResult<T> = Result<T, PngChunkError>;

/// The parts of a chunk record, in stream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkField {
  Length,
  Type,
  Payload,
  Checksum,
}
impl fmt::Display for ChunkField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Length => "length field",
      Self::Type => "type field",
      Self::Payload => "payload",
      Self::Checksum => "checksum",
    })
  }
}
