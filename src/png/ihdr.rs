use super::*;

/// Image Header data.
///
/// This is the 13 byte payload of the `IHDR` chunk, laid out exactly as it's
/// stored, so [`as_bytes`](Self::as_bytes) is the chunk data with no extra
/// work. Only the width and height vary: the encoder always writes 8-bit
/// truecolor, DEFLATE compressed, with the standard filter method and no
/// interlacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct IHDR {
  width: U32BE,
  height: U32BE,
  bit_depth: u8,
  color_type: u8,
  compression_method: u8,
  filter_method: u8,
  interlace_method: u8,
}
impl IHDR {
  /// bits per channel
  pub const BIT_DEPTH: u8 = 8;
  /// color type 2, "truecolor" (RGB)
  pub const COLOR_TYPE_RGB: u8 = 2;
  /// compression method 0, zlib DEFLATE
  pub const COMPRESSION_DEFLATE: u8 = 0;
  /// filter method 0, the per-scanline filter type framework
  pub const FILTER_METHOD_ADAPTIVE: u8 = 0;
  /// interlace method 0, not interlaced
  pub const INTERLACE_NONE: u8 = 0;

  /// Header for an image of the given size.
  #[inline]
  #[must_use]
  pub const fn new(width: u32, height: u32) -> Self {
    Self {
      width: U32BE::from_u32(width),
      height: U32BE::from_u32(height),
      bit_depth: Self::BIT_DEPTH,
      color_type: Self::COLOR_TYPE_RGB,
      compression_method: Self::COMPRESSION_DEFLATE,
      filter_method: Self::FILTER_METHOD_ADAPTIVE,
      interlace_method: Self::INTERLACE_NONE,
    }
  }

  /// width in pixels
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width.to_u32()
  }

  /// height in pixels
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height.to_u32()
  }

  /// The chunk payload.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }
}

#[test]
fn test_ihdr_payload() {
  let ihdr = IHDR::new(0x0102_0304, 16);
  assert_eq!(core::mem::size_of::<IHDR>(), 13);
  assert_eq!(ihdr.as_bytes(), &[1, 2, 3, 4, 0, 0, 0, 16, 8, 2, 0, 0, 0]);
  assert_eq!(ihdr.width(), 0x0102_0304);
  assert_eq!(ihdr.height(), 16);
}
