use super::*;

/// One decoded chunk record.
///
/// This is only the chunk's framing: the payload is skipped over without
/// being read, except for `tEXt` chunks when the decoder was asked to keep
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkRecord {
  pub(crate) offset: u64,
  pub(crate) length: u32,
  pub(crate) chunk_ty: ChunkType,
  pub(crate) declared_crc: u32,
  pub(crate) text: Option<TextPayload>,
}
impl ChunkRecord {
  /// Bytes of framing around every payload: length, type, and CRC.
  pub const FRAMING_LEN: u64 = 12;

  /// Stream offset of the chunk's length field.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> u64 {
    self.offset
  }

  /// The declared payload length.
  #[inline]
  #[must_use]
  pub const fn length(&self) -> u32 {
    self.length
  }

  /// The four byte chunk type tag.
  #[inline]
  #[must_use]
  pub const fn chunk_ty(&self) -> ChunkType {
    self.chunk_ty
  }

  /// The CRC as written in the file. It is not checked against the data.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }

  /// The `tEXt` payload, if it was read.
  #[inline]
  #[must_use]
  pub const fn text(&self) -> Option<&TextPayload> {
    self.text.as_ref()
  }

  /// If this is the `IEND` chunk that closes the stream.
  #[inline]
  #[must_use]
  pub fn is_terminal(&self) -> bool {
    self.chunk_ty == ChunkType::IEND
  }

  /// How many stream bytes this record covers, framing included.
  #[inline]
  #[must_use]
  pub const fn encoded_len(&self) -> u64 {
    Self::FRAMING_LEN + self.length as u64
  }
}
