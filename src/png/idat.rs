use super::*;

/// Filter type 0, "None". Every scanline gets this one.
pub const FILTER_NONE: u8 = 0;

/// Gets the byte length of the filtered (but not compressed) image data.
///
/// Each line is a filter byte (1) plus 3 bytes per pixel.
#[inline]
#[must_use]
pub const fn filtered_len(width: u32, height: u32) -> usize {
  (height as usize) * (1 + (width as usize) * 3)
}

/// Lays out row-major pixels as PNG scanlines.
///
/// Every row becomes a [`FILTER_NONE`] byte followed by the row's pixels as
/// `r, g, b` bytes. Any partial row at the end is ignored, and a `width` of 0
/// gives no output. The encoder checks the dimensions before calling this.
#[must_use]
pub fn assemble_scanlines(width: u32, pixels: &[RGB8]) -> Vec<u8> {
  if width == 0 {
    return Vec::new();
  }
  let height = (pixels.len() / width as usize) as u32;
  let mut raw: Vec<u8> = Vec::with_capacity(filtered_len(width, height));
  for row in pixels.chunks_exact(width as usize) {
    raw.push(FILTER_NONE);
    raw.extend_from_slice(bytemuck::cast_slice(row));
  }
  raw
}

#[test]
fn test_assemble_scanlines() {
  let px = [RGB8::new(1, 2, 3), RGB8::new(4, 5, 6), RGB8::new(7, 8, 9), RGB8::new(10, 11, 12)];
  let raw = assemble_scanlines(2, &px);
  assert_eq!(raw, [0, 1, 2, 3, 4, 5, 6, 0, 7, 8, 9, 10, 11, 12]);
  assert_eq!(raw.len(), filtered_len(2, 2));

  let column = assemble_scanlines(1, &px);
  assert_eq!(column.len(), filtered_len(1, 4));
  assert_eq!(column.iter().step_by(4).copied().collect::<Vec<u8>>(), [0, 0, 0, 0]);
}
