//! Turns decoded records into the lines the CLI prints.
//!
//! Nothing here does any I/O, it all just builds strings.

use crate::png::{ChunkRecord, TextPayload};

/// Printed once the PNG signature has been checked.
pub const SIGNATURE_OK_LINE: &str = "PNG header - OK";

/// The summary line for one chunk.
///
/// `Chunk "IHDR", 13    bytes, CRC = 1F15C489 (Image header)`
///
/// The length is left aligned in a width of 5, the CRC is always 8 uppercase
/// hex digits. The description in parentheses is only there if one is given.
#[must_use]
pub fn chunk_line(record: &ChunkRecord, description: Option<&str>) -> String {
  let mut line = format!(
    "Chunk \"{}\", {:<5} bytes, CRC = {:08X}",
    record.chunk_ty(),
    record.length(),
    record.declared_crc()
  );
  if let Some(description) = description {
    line.push_str(" (");
    line.push_str(description);
    line.push(')');
  }
  line
}

/// The line shown after a `tEXt` chunk's summary line.
#[inline]
#[must_use]
pub fn text_line(text: &TextPayload) -> String {
  text.to_string()
}
