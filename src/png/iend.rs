use super::*;

/// The complete `IEND` chunk.
///
/// It never has any data, so the whole chunk is a constant: a zero length,
/// the tag, and the CRC of just the tag (`AE 42 60 82`).
pub const IEND_CHUNK: [u8; 12] = {
  let c = chunk_crc(ChunkTy::IEND, &[]).to_be_bytes();
  let t = ChunkTy::IEND.0;
  [0, 0, 0, 0, t[0], t[1], t[2], t[3], c[0], c[1], c[2], c[3]]
};

#[test]
fn test_iend_chunk() {
  assert_eq!(IEND_CHUNK, [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
  assert_eq!(build_chunk(ChunkTy::IEND, &[]).unwrap(), IEND_CHUNK);
}
