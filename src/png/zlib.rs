use super::*;

/// The DEFLATE level used for all image data, on miniz's 0 to 10 scale.
pub const COMPRESSION_LEVEL: u8 = 6;

/// Wraps the filtered image data in a zlib stream.
///
/// With the `miniz_oxide` feature this is a normal DEFLATE stream at
/// [`COMPRESSION_LEVEL`]. Without it the data goes into stored (uncompressed)
/// blocks, which is still a valid zlib stream, just a bigger one.
///
/// Either way the output for a given input never changes.
#[inline]
pub fn zlib_compress(raw: &[u8]) -> Result<Vec<u8>, EncodeError> {
  #[cfg(feature = "miniz_oxide")]
  let out = zlib_deflate(raw)?;
  #[cfg(not(feature = "miniz_oxide"))]
  let out = zlib_stored(raw);
  Ok(out)
}

#[cfg(feature = "miniz_oxide")]
fn zlib_deflate(raw: &[u8]) -> Result<Vec<u8>, EncodeError> {
  use alloc::vec;
  use miniz_oxide::deflate::core::{
    compress, create_comp_flags_from_zip_params, CompressorOxide, TDEFLFlush, TDEFLStatus,
  };
  // positive window bits asks for the zlib header and Adler-32 trailer
  let flags = create_comp_flags_from_zip_params(i32::from(COMPRESSION_LEVEL), 1, 0);
  let mut compressor = CompressorOxide::new(flags);
  let mut out: Vec<u8> = vec![0; (raw.len() / 2).max(64)];
  let mut in_pos = 0;
  let mut out_pos = 0;
  loop {
    let (status, bytes_in, bytes_out) =
      compress(&mut compressor, &raw[in_pos..], &mut out[out_pos..], TDEFLFlush::Finish);
    in_pos += bytes_in;
    out_pos += bytes_out;
    match status {
      TDEFLStatus::Done => {
        out.truncate(out_pos);
        return Ok(out);
      }
      TDEFLStatus::Okay => {
        if out.len() - out_pos < 32 {
          let new_len = out.len() * 2;
          out.resize(new_len, 0);
        } else if bytes_in + bytes_out == 0 {
          // `Okay` with room to spare always moves some bytes; otherwise
          // this loop would never end.
          debug_assert!(false, "deflate made no progress with {} bytes free", out.len() - out_pos);
          log::error!("deflate stalled after {in_pos} of {} bytes", raw.len());
          return Err(EncodeError::CompressionFailure);
        }
      }
      TDEFLStatus::BadParam | TDEFLStatus::PutBufFailed => {
        log::error!("deflate stopped with {status:?} after {in_pos} of {} bytes", raw.len());
        return Err(EncodeError::CompressionFailure);
      }
    }
  }
}

/// The most data a single stored DEFLATE block can hold.
#[cfg_attr(feature = "miniz_oxide", allow(dead_code))]
const STORED_BLOCK_MAX: usize = u16::MAX as usize;

/// Wraps data in a zlib stream made of stored (uncompressed) DEFLATE blocks.
#[cfg_attr(feature = "miniz_oxide", allow(dead_code))]
pub(crate) fn zlib_stored(data: &[u8]) -> Vec<u8> {
  let block_count = data.len() / STORED_BLOCK_MAX + 1;
  let mut out = Vec::with_capacity(2 + block_count * 5 + data.len() + 4);
  // CMF: deflate with a 32K window. FLG: fastest, check bits make it % 31 == 0.
  out.extend_from_slice(&[0x78, 0x01]);
  let mut blocks = data.chunks(STORED_BLOCK_MAX).peekable();
  if blocks.peek().is_none() {
    // still need one (empty) final block
    out.extend_from_slice(&[0x01, 0x00, 0x00, 0xFF, 0xFF]);
  }
  while let Some(block) = blocks.next() {
    let is_final = blocks.peek().is_none();
    // BFINAL bit, then BTYPE=00 (stored)
    out.push(u8::from(is_final));
    let len = block.len() as u16;
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&(!len).to_le_bytes());
    out.extend_from_slice(block);
  }
  out.extend_from_slice(&adler32(data).to_be_bytes());
  out
}

/// The Adler-32 checksum that closes a zlib stream.
#[must_use]
#[cfg_attr(feature = "miniz_oxide", allow(dead_code))]
pub(crate) fn adler32(data: &[u8]) -> u32 {
  const MOD_ADLER: u32 = 65521;
  // largest run that can't overflow `b` before taking the modulus
  const NMAX: usize = 5552;
  let mut a: u32 = 1;
  let mut b: u32 = 0;
  for run in data.chunks(NMAX) {
    for &byte in run {
      a += u32::from(byte);
      b += a;
    }
    a %= MOD_ADLER;
    b %= MOD_ADLER;
  }
  (b << 16) | a
}
