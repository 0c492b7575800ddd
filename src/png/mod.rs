//! Module for writing PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! A PNG is an 8 byte signature followed by a series of "chunks". Each chunk
//! is a big-endian length, a 4 byte type tag, the data, and a CRC-32 of the
//! tag and data. This encoder only ever writes the three chunks that it
//! needs, in this order:
//!
//! * **Header** (`IHDR`) - The width and height, and the pixel format. Here
//!   that's always 8-bit RGB with no interlacing.
//! * **Image Data** (`IDAT`) - The scanlines, each one a filter byte (always
//!   0, "None") and then the row's pixel bytes, all compressed into a single
//!   zlib stream. It's always exactly one chunk.
//! * **End** (`IEND`) - Empty, marks the end of the stream.
//!
//! The simple path is [`encode`] to get the bytes, or [`write`] to send them
//! to a file. The building blocks ([`IHDR`], [`assemble_scanlines`],
//! [`zlib_compress`], [`build_chunk`]) are public too if you want to do
//! something a little different with them.
//!
//! ## Decoding
//!
//! This crate can't read PNG data back in. Any other PNG decoder can.

use core::fmt::Debug;

use alloc::vec::Vec;

use bytemuck::{Pod, Zeroable};

use crate::{EncodeError, PixelCanvas, U32BE, RGB8};

mod crc32;
pub use crc32::*;

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod idat;
pub use idat::*;

mod iend;
pub use iend::*;

mod zlib;
pub use zlib::{zlib_compress, COMPRESSION_LEVEL};

#[cfg(feature = "std")]
mod write;
#[cfg(feature = "std")]
pub use write::*;


/// The first 8 bytes of every PNG.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Encodes a canvas as a complete PNG.
///
/// The canvas is only borrowed for the duration of the call.
///
/// ## Failure
/// * `InvalidDimension` if the canvas is empty (checked before any other work).
/// * `CompressionFailure` if the compressor breaks.
/// * `ChunkTooLarge` if the compressed data can't fit in one chunk.
#[inline]
pub fn encode(canvas: &PixelCanvas) -> Result<Vec<u8>, EncodeError> {
  let mut out = Vec::new();
  encode_into(canvas, &mut out)?;
  Ok(out)
}

/// Encodes a canvas as a complete PNG, appending it to `out`.
///
/// On an error `out` is left exactly as it was.
#[inline]
pub fn encode_into(canvas: &PixelCanvas, out: &mut Vec<u8>) -> Result<(), EncodeError> {
  encode_pixels_into(canvas.width(), canvas.height(), canvas.pixels(), out)
}

/// Encodes tightly packed `r, g, b` bytes (row-major) as a complete PNG.
///
/// ## Failure
/// * `InvalidDimension` if either dimension is 0 or `rgb.len()` isn't exactly
///   `width * height * 3`.
/// * Otherwise as [`encode`].
pub fn encode_rgb_bytes(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, EncodeError> {
  let pixels: &[RGB8] =
    bytemuck::try_cast_slice(rgb).map_err(|_| EncodeError::InvalidDimension { width, height })?;
  let mut out = Vec::new();
  encode_pixels_into(width, height, pixels, &mut out)?;
  Ok(out)
}

fn encode_pixels_into(
  width: u32, height: u32, pixels: &[RGB8], out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
  let expected = (width as usize).checked_mul(height as usize);
  if width == 0 || height == 0 || expected != Some(pixels.len()) {
    return Err(EncodeError::InvalidDimension { width, height });
  }
  let ihdr = IHDR::new(width, height);

  let raw = assemble_scanlines(width, pixels);
  log::trace!("{width}x{height}: {} filtered bytes", raw.len());
  let zlib = zlib_compress(&raw)?;
  log::trace!("{width}x{height}: {} compressed bytes", zlib.len());
  chunk_len_field(zlib.len())?;

  // Everything that can fail has been checked, so from here on we only push.
  let start = out.len();
  out.reserve(PNG_SIGNATURE.len() + (12 + 13) + (12 + zlib.len()) + IEND_CHUNK.len());
  out.extend_from_slice(&PNG_SIGNATURE);
  let chunks = append_chunk(out, ChunkTy::IHDR, ihdr.as_bytes())
    .and_then(|()| append_chunk(out, ChunkTy::IDAT, &zlib));
  if let Err(e) = chunks {
    out.truncate(start);
    return Err(e);
  }
  out.extend_from_slice(&IEND_CHUNK);
  log::debug!("encoded {width}x{height} PNG, {} bytes", out.len() - start);
  Ok(())
}
