use core::fmt::{Debug, Display, Write};

/// The payload of a `tEXt` chunk, read into memory.
///
/// Per the PNG spec this is a Latin-1 keyword, a single null byte, and then
/// Latin-1 text. Nothing here enforces that layout: a payload without the
/// null separator is still kept, it's just all "text" and no keyword.
///
/// Spec: [tEXt](https://www.w3.org/TR/png/#11tEXt)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TextPayload {
  data: Vec<u8>,
}
impl TextPayload {
  /// Wraps raw payload bytes.
  #[inline]
  #[must_use]
  pub const fn new(data: Vec<u8>) -> Self {
    Self { data }
  }

  /// The raw payload bytes, separator and all.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.data
  }

  /// The keyword part, if the payload has a null separator.
  #[inline]
  #[must_use]
  pub fn keyword(&self) -> Option<&[u8]> {
    self.split().0
  }

  /// The text part, or the whole payload if there's no null separator.
  #[inline]
  #[must_use]
  pub fn text(&self) -> &[u8] {
    self.split().1
  }

  fn split(&self) -> (Option<&[u8]>, &[u8]) {
    let mut it = self.data.splitn(2, |u| u == &0_u8);
    let first = it.next().unwrap_or_default();
    match it.next() {
      Some(text) => (Some(first), text),
      None => (None, first),
    }
  }
}
impl Display for TextPayload {
  /// Renders `keyword: text`, or just the text when there's no keyword.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.split() {
      (Some(keyword), text) => write!(f, "{}: {}", Latin1(keyword), Latin1(text)),
      (None, text) => Display::fmt(&Latin1(text), f),
    }
  }
}
impl Debug for TextPayload {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let (keyword, text) = self.split();
    f.debug_struct("TextPayload")
      .field("keyword", &keyword.map(Latin1))
      .field("text", &Latin1(text))
      .finish()
  }
}

/// Latin-1 maps each byte directly to the same unicode code point.
#[derive(Clone, Copy)]
struct Latin1<'b>(&'b [u8]);
impl Display for Latin1<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(char::from) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
impl Debug for Latin1<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    for ch in self.0.iter().copied().map(char::from) {
      for esc in ch.escape_debug() {
        f.write_char(esc)?;
      }
    }
    f.write_char('\"')
  }
}
