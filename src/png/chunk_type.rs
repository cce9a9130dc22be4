use core::fmt::{Debug, Display, Write};

use bytemuck::{Pod, Zeroable};

/// The four byte tag naming a chunk's type.
///
/// There's no enforced encoding. Every standard chunk type is four ascii
/// letters, and the `Debug` and `Display` impls just `as` cast each byte into
/// a character, which is still fine for junk bytes from a damaged file.
///
/// The case of each letter (bit 5 of each byte) is a property bit, see the
/// `is_` methods.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkType {
  /// Image header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Palette
  pub const PLTE: Self = Self(*b"PLTE");
  /// Image data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image end, the terminal chunk of the stream.
  pub const IEND: Self = Self(*b"IEND");
  /// Textual data, the only chunk type with a payload we look inside of.
  pub const tEXt: Self = Self(*b"tEXt");

  /// The raw bytes of the tag.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }

  /// The tag as a `&str`, if it's valid utf-8.
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> Option<&str> {
    core::str::from_utf8(&self.0).ok()
  }

  /// Critical chunks must be understood to display the image, ancillary
  /// chunks can be ignored.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }

  /// Public chunks are defined by the PNG spec (or registered), private ones
  /// are application specific.
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    (self.0[1] & 32) == 0
  }

  /// The third letter must be uppercase in the current PNG spec.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_valid(self) -> bool {
    (self.0[2] & 32) == 0
  }

  /// If an editor that doesn't understand the chunk may still copy it to a
  /// modified file.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & 32) != 0
  }

  /// If all four bytes are ascii letters, as the PNG spec requires.
  #[inline]
  #[must_use]
  pub const fn is_ascii_alphabetic(self) -> bool {
    let [a, b, c, d] = self.0;
    a.is_ascii_alphabetic()
      && b.is_ascii_alphabetic()
      && c.is_ascii_alphabetic()
      && d.is_ascii_alphabetic()
  }
}
impl Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    Display::fmt(self, f)?;
    f.write_char('\"')
  }
}
impl Display for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
