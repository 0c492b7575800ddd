#![forbid(unsafe_code)]

//! Provides the heap-allocated canvas that the encoder reads from.

use alloc::{vec, vec::Vec};

use crate::{CanvasError, RGB8};

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
///
/// The caller is expected to have bounds checked `x` and `y` already.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  (y as usize) * (width as usize) + (x as usize)
}

/// Gets the pixel count for the dimensions, if they're usable.
///
/// Both dimensions must be non-zero, and the packed RGB byte count of the
/// whole image must fit in a `usize`.
#[inline]
fn checked_pixel_count(width: u32, height: u32) -> Result<usize, CanvasError> {
  let bad = CanvasError::InvalidDimension { width, height };
  if width == 0 || height == 0 {
    return Err(bad);
  }
  let count = (width as usize).checked_mul(height as usize).ok_or(bad)?;
  count.checked_mul(3).ok_or(bad)?;
  Ok(count)
}

/// A width by height grid of [`RGB8`] pixels.
///
/// Pixels are stored row-major: left to right, then top to bottom. The origin
/// is the top left, which is also the PNG origin.
///
/// Once constructed, a canvas always has non-zero dimensions and exactly
/// `width * height` pixels. Pixel edits never change the dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelCanvas {
  width: u32,
  height: u32,
  pixels: Vec<RGB8>,
}
impl PixelCanvas {
  /// Makes a new canvas filled with black.
  ///
  /// ## Failure
  /// * `InvalidDimension` if either dimension is 0 (or absurdly large).
  #[inline]
  pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
    let count = checked_pixel_count(width, height)?;
    Ok(Self { width, height, pixels: vec![RGB8::BLACK; count] })
  }

  /// Makes a canvas from existing row-major pixels.
  ///
  /// ## Failure
  /// * `InvalidDimension` if either dimension is 0, or if `pixels` doesn't
  ///   have exactly `width * height` elements. Short data is never padded.
  #[inline]
  pub fn from_pixels(width: u32, height: u32, pixels: Vec<RGB8>) -> Result<Self, CanvasError> {
    let count = checked_pixel_count(width, height)?;
    if pixels.len() != count {
      return Err(CanvasError::InvalidDimension { width, height });
    }
    Ok(Self { width, height, pixels })
  }

  /// Makes a canvas from tightly packed `r, g, b` bytes.
  ///
  /// ## Failure
  /// * `InvalidDimension` under the same rules as [`from_pixels`](Self::from_pixels),
  ///   including when `bytes` isn't a multiple of 3 long.
  #[inline]
  pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, CanvasError> {
    let pixels: &[RGB8] = bytemuck::try_cast_slice(bytes)
      .map_err(|_| CanvasError::InvalidDimension { width, height })?;
    Self::from_pixels(width, height, pixels.to_vec())
  }

  /// Makes a canvas from channel values that haven't been checked yet.
  ///
  /// This is for data coming from outside of the program (eg: parsed JSON
  /// numbers), where the values might not fit in a `u8`. The values are
  /// `r, g, b` for each pixel in row-major order.
  ///
  /// ## Failure
  /// * `InvalidDimension` if a dimension is 0 or `channels.len()` isn't
  ///   exactly `width * height * 3`.
  /// * `InvalidColorValue` for the first channel that's not in `0..=255`.
  pub fn from_untrusted_channels(
    width: u32, height: u32, channels: &[i64],
  ) -> Result<Self, CanvasError> {
    let count = checked_pixel_count(width, height)?;
    if channels.len() != count * 3 {
      return Err(CanvasError::InvalidDimension { width, height });
    }
    let mut pixels: Vec<RGB8> = Vec::with_capacity(count);
    for (i, rgb) in channels.chunks_exact(3).enumerate() {
      let mut out = [0_u8; 3];
      for (k, (o, &value)) in out.iter_mut().zip(rgb).enumerate() {
        *o = u8::try_from(value)
          .map_err(|_| CanvasError::InvalidColorValue { index: i * 3 + k, value })?;
      }
      pixels.push(RGB8::from(out));
    }
    Ok(Self { width, height, pixels })
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// All pixels, row-major.
  #[inline]
  #[must_use]
  pub fn pixels(&self) -> &[RGB8] {
    &self.pixels
  }

  /// The pixels of row `y`, or `None` if the row is out of bounds.
  #[inline]
  #[must_use]
  pub fn row(&self, y: u32) -> Option<&[RGB8]> {
    if y < self.height {
      let start = xy_width_to_index(0, y, self.width);
      self.pixels.get(start..start + self.width as usize)
    } else {
      None
    }
  }

  #[inline]
  fn checked_index(&self, x: u32, y: u32) -> Result<usize, CanvasError> {
    if x < self.width && y < self.height {
      Ok(xy_width_to_index(x, y, self.width))
    } else {
      Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height })
    }
  }

  /// Gets the `(r, g, b)` value at the position.
  ///
  /// ## Failure
  /// * `OutOfBounds` if `x >= width` or `y >= height`.
  #[inline]
  pub fn get_pixel(&self, x: u32, y: u32) -> Result<(u8, u8, u8), CanvasError> {
    let i = self.checked_index(x, y)?;
    Ok(self.pixels[i].to_tuple())
  }

  /// Sets the pixel at the position.
  ///
  /// ## Failure
  /// * `OutOfBounds` if `x >= width` or `y >= height`. The canvas is not
  ///   changed.
  #[inline]
  pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<(), CanvasError> {
    let i = self.checked_index(x, y)?;
    self.pixels[i] = RGB8 { r, g, b };
    Ok(())
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut RGB8> {
    let i = self.checked_index(x, y).ok()?;
    self.pixels.get_mut(i)
  }

  /// Sets every pixel to the same color.
  #[inline]
  pub fn fill(&mut self, r: u8, g: u8, b: u8) {
    self.pixels.fill(RGB8 { r, g, b });
  }
}
