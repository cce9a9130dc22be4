//! Shorthands for pulling fixed-size fields out of a byte stream.

use std::io::{self, Read};

use bytemuck::Pod;

/// Fills as much of `buf` as the reader can give.
///
/// Short reads are retried until `buf` is full or the reader reports the end
/// of the stream, so the return value is only less than `buf.len()` when the
/// stream is actually exhausted.
pub(crate) fn read_fully<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
  let mut filled = 0;
  while filled < buf.len() {
    match reader.read(&mut buf[filled..]) {
      Ok(0) => break,
      Ok(n) => filled += n,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
      Err(e) => return Err(e),
    }
  }
  Ok(filled)
}

/// Reads one `T` worth of bytes.
///
/// * `Ok(Ok(t))` when all the bytes were there.
/// * `Ok(Err(n))` when the stream ended after `n` bytes.
#[inline]
pub(crate) fn try_read_pod<T: Pod, R: Read + ?Sized>(reader: &mut R) -> io::Result<Result<T, usize>> {
  let mut t = T::zeroed();
  let buf = bytemuck::bytes_of_mut(&mut t);
  let got = read_fully(reader, buf)?;
  Ok(if got == buf.len() { Ok(t) } else { Err(got) })
}
