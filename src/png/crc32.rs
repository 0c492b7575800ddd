//! The CRC-32 used by PNG chunks.
//!
//! This is the IEEE 802.3 polynomial (reflected, `0xEDB8_8320`), the same
//! one that zlib and gzip use.

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// Runs more bytes through a CRC that's in progress.
///
/// Start from `u32::MAX`, and XOR the final value with `u32::MAX` when you're
/// done. Feeding the bytes in several calls gives the same result as one call
/// on all of them joined together.
#[inline]
#[must_use]
pub const fn update_crc(mut crc: u32, bytes: &[u8]) -> u32 {
  let mut i = 0;
  while i < bytes.len() {
    crc = CRC_TABLE[((crc ^ bytes[i] as u32) & 0xFF) as usize] ^ (crc >> 8);
    i += 1;
  }
  crc
}

/// The complete CRC-32 of some bytes.
#[inline]
#[must_use]
pub const fn png_crc(bytes: &[u8]) -> u32 {
  update_crc(u32::MAX, bytes) ^ u32::MAX
}

#[test]
fn test_png_crc_known_values() {
  assert_eq!(png_crc(b""), 0);
  // the usual CRC-32 check value
  assert_eq!(png_crc(b"123456789"), 0xCBF4_3926);
  assert_eq!(png_crc(b"IEND"), 0xAE42_6082);
}

#[test]
fn test_update_crc_is_incremental() {
  let whole = png_crc(b"IHDRsome chunk data");
  let split = update_crc(update_crc(u32::MAX, b"IHDR"), b"some chunk data") ^ u32::MAX;
  assert_eq!(whole, split);
}
