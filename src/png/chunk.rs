use super::*;
use core::fmt::Write;

/// The largest data length a chunk is allowed to declare, `2^31 - 1`.
pub const MAX_CHUNK_LEN: u32 = (1 << 31) - 1;

/// A four byte chunk type tag, such as `IHDR`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTy(pub [u8; 4]);
impl ChunkTy {
  /// Image Header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image Data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image End
  pub const IEND: Self = Self(*b"IEND");

  /// The tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }
}
impl From<[u8; 4]> for ChunkTy {
  #[inline]
  #[must_use]
  fn from(tag: [u8; 4]) -> Self {
    Self(tag)
  }
}
impl Debug for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('"')?;
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    f.write_char('"')
  }
}

/// Gets the length field for some chunk data.
///
/// ## Failure
/// * `ChunkTooLarge` when `data_len` is over [`MAX_CHUNK_LEN`].
#[inline]
pub fn chunk_len_field(data_len: usize) -> Result<U32BE, EncodeError> {
  match u32::try_from(data_len) {
    Ok(len) if len <= MAX_CHUNK_LEN => Ok(U32BE::from_u32(len)),
    _ => Err(EncodeError::ChunkTooLarge { len: data_len }),
  }
}

/// The CRC that a chunk stores: computed over the type tag then the data.
#[inline]
#[must_use]
pub const fn chunk_crc(ty: ChunkTy, data: &[u8]) -> u32 {
  update_crc(update_crc(u32::MAX, &ty.0), data) ^ u32::MAX
}

/// Appends a complete chunk (length, type, data, CRC) to `out`.
///
/// If this returns an error then nothing was appended.
#[inline]
pub fn append_chunk(out: &mut Vec<u8>, ty: ChunkTy, data: &[u8]) -> Result<(), EncodeError> {
  let len = chunk_len_field(data.len())?;
  out.reserve(12 + data.len());
  out.extend_from_slice(&len.to_bytes());
  out.extend_from_slice(&ty.0);
  out.extend_from_slice(data);
  out.extend_from_slice(&chunk_crc(ty, data).to_be_bytes());
  Ok(())
}

/// Builds a complete chunk as its own buffer.
#[inline]
pub fn build_chunk(ty: ChunkTy, data: &[u8]) -> Result<Vec<u8>, EncodeError> {
  let mut out = Vec::new();
  append_chunk(&mut out, ty, data)?;
  Ok(out)
}

#[test]
fn test_chunk_layout() {
  let chunk = build_chunk(ChunkTy(*b"abCD"), &[1, 2, 3]).unwrap();
  assert_eq!(chunk.len(), 4 + 4 + 3 + 4);
  assert_eq!(&chunk[..4], &[0, 0, 0, 3]);
  assert_eq!(&chunk[4..8], b"abCD");
  assert_eq!(&chunk[8..11], &[1, 2, 3]);
  assert_eq!(&chunk[11..], &png_crc(b"abCD\x01\x02\x03").to_be_bytes());
}

#[test]
fn test_chunk_len_limit() {
  assert_eq!(chunk_len_field(0).unwrap().to_u32(), 0);
  assert_eq!(chunk_len_field(MAX_CHUNK_LEN as usize).unwrap().to_u32(), MAX_CHUNK_LEN);
  let over = MAX_CHUNK_LEN as usize + 1;
  assert_eq!(chunk_len_field(over), Err(EncodeError::ChunkTooLarge { len: over }));
}

#[test]
fn test_chunk_ty_debug() {
  assert_eq!(alloc::format!("{:?}", ChunkTy::IDAT), "\"IDAT\"");
}
