//! Module for pixel formats.
//!
//! There's only one format that matters here: 8 bits per channel, red, green,
//! and blue, in that order. That's exactly how a truecolor PNG scanline stores
//! each pixel, so a slice of [`RGB8`] can be viewed as the raw scanline bytes
//! without any conversion work (see [`bytemuck::cast_slice`]).

use bytemuck::{Pod, Zeroable};

/// An RGB value, 8-bits per channel.
///
/// The type has size 3 and alignment 1, with no padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Pod, Zeroable)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGB8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}
impl RGB8 {
  /// Black, `(0, 0, 0)`
  pub const BLACK: Self = Self::new(0, 0, 0);
  /// White, `(255, 255, 255)`
  pub const WHITE: Self = Self::new(255, 255, 255);

  /// Makes a new value from the channels.
  #[inline]
  #[must_use]
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// The channels as an `(r, g, b)` tuple.
  #[inline]
  #[must_use]
  pub const fn to_tuple(self) -> (u8, u8, u8) {
    (self.r, self.g, self.b)
  }
}
impl From<[u8; 3]> for RGB8 {
  #[inline]
  #[must_use]
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b }
  }
}
impl From<RGB8> for [u8; 3] {
  #[inline]
  #[must_use]
  fn from(RGB8 { r, g, b }: RGB8) -> Self {
    [r, g, b]
  }
}
impl From<(u8, u8, u8)> for RGB8 {
  #[inline]
  #[must_use]
  fn from((r, g, b): (u8, u8, u8)) -> Self {
    Self { r, g, b }
  }
}
impl From<RGB8> for (u8, u8, u8) {
  #[inline]
  #[must_use]
  fn from(p: RGB8) -> Self {
    p.to_tuple()
  }
}

#[test]
fn test_rgb8_is_three_packed_bytes() {
  assert_eq!(core::mem::size_of::<RGB8>(), 3);
  assert_eq!(core::mem::align_of::<RGB8>(), 1);
  let px = [RGB8::new(1, 2, 3), RGB8::new(4, 5, 6)];
  assert_eq!(bytemuck::cast_slice::<RGB8, u8>(&px), &[1, 2, 3, 4, 5, 6]);
}
