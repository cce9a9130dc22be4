use bytemuck::{Pod, Zeroable};

/// A big-endian `u32`, as used for a chunk's length and CRC fields.
///
/// Only bytes are stored, so the alignment is 1 and it can be read straight
/// out of the stream with bytemuck.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  /// Convert this value to a native `u32`
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
}
impl core::fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}

#[test]
fn test_u32be_is_network_order() {
  let x: U32BE = bytemuck::cast([0x12_u8, 0x34, 0x56, 0x78]);
  assert_eq!(x.to_u32(), 0x1234_5678);
  assert_eq!(format!("{x:?}"), "U32BE(305419896)");
}
