use rgbpng::{png::*, EncodeError, PixelCanvas, WriteError, RGB8};
use std::{path::Path, sync::Arc, thread};

/// Decodes with the `png` crate, which also checks every chunk CRC.
fn decode(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
  let decoder = ::png::Decoder::new(bytes);
  let mut reader = decoder.read_info().expect("header should decode");
  let mut buf = vec![0; reader.output_buffer_size()];
  let info = reader.next_frame(&mut buf).expect("frame should decode");
  assert_eq!(info.color_type, ::png::ColorType::Rgb);
  assert_eq!(info.bit_depth, ::png::BitDepth::Eight);
  buf.truncate(info.buffer_size());
  (info.width, info.height, buf)
}

fn assert_round_trip(canvas: &PixelCanvas) {
  let bytes = encode(canvas).unwrap();
  let (width, height, rgb) = decode(&bytes);
  assert_eq!((width, height), (canvas.width(), canvas.height()));
  assert_eq!(rgb.as_slice(), bytemuck::cast_slice::<RGB8, u8>(canvas.pixels()));
}

/// Walks the chunks after the signature: `(declared_len, type, data, declared_crc)`.
fn walk_chunks(png: &[u8]) -> Vec<(u32, [u8; 4], Vec<u8>, u32)> {
  let mut out = Vec::new();
  let mut rest = &png[8..];
  while rest.len() >= 12 {
    let len = u32::from_be_bytes(rest[0..4].try_into().unwrap());
    let ty: [u8; 4] = rest[4..8].try_into().unwrap();
    let end = 8 + len as usize;
    let data = rest[8..end].to_vec();
    let crc = u32::from_be_bytes(rest[end..end + 4].try_into().unwrap());
    out.push((len, ty, data, crc));
    rest = &rest[end + 4..];
  }
  assert!(rest.is_empty(), "trailing bytes after the last chunk");
  out
}

/// Every file name in `dir`, sorted.
fn dir_listing(dir: &Path) -> Vec<String> {
  let mut names: Vec<String> = std::fs::read_dir(dir)
    .unwrap()
    .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
    .collect();
  names.sort();
  names
}

#[test]
fn test_one_by_one_round_trip() {
  let mut canvas = PixelCanvas::new(1, 1).unwrap();
  canvas.set_pixel(0, 0, 12, 34, 56).unwrap();
  assert_round_trip(&canvas);
}

#[test]
fn test_large_random_round_trip() {
  let bytes = super::rand_bytes(512 * 512 * 3);
  let canvas = PixelCanvas::from_rgb_bytes(512, 512, &bytes).unwrap();
  assert_round_trip(&canvas);
}

#[test]
fn test_odd_shapes_round_trip() {
  for (w, h) in [(1, 300), (300, 1), (7, 13), (255, 3)] {
    let bytes = super::rand_bytes(w * h * 3);
    let canvas = PixelCanvas::from_rgb_bytes(w as u32, h as u32, &bytes).unwrap();
    assert_round_trip(&canvas);
  }
}

#[test]
fn test_stripes_scenario() {
  let mut canvas = PixelCanvas::new(4, 4).unwrap();
  let rows = [(255, 0, 0), (0, 255, 0), (0, 0, 255), (255, 255, 0)];
  for (y, (r, g, b)) in rows.into_iter().enumerate() {
    for x in 0..4 {
      canvas.set_pixel(x, y as u32, r, g, b).unwrap();
    }
  }
  let (_, _, rgb) = decode(&encode(&canvas).unwrap());
  let decoded = PixelCanvas::from_rgb_bytes(4, 4, &rgb).unwrap();
  assert_eq!(decoded.get_pixel(0, 0), Ok((255, 0, 0)));
  assert_eq!(decoded.get_pixel(0, 3), Ok((255, 255, 0)));
  assert_eq!(decoded, canvas);
}

#[test]
fn test_checkerboard_scenario() {
  let mut canvas = PixelCanvas::new(16, 16).unwrap();
  for y in 0..16 {
    for x in 0..16 {
      let v = if (x + y) % 2 == 0 { 0 } else { 255 };
      canvas.set_pixel(x, y, v, v, v).unwrap();
    }
  }
  let (_, _, rgb) = decode(&encode(&canvas).unwrap());
  let decoded = PixelCanvas::from_rgb_bytes(16, 16, &rgb).unwrap();
  assert_eq!(decoded.get_pixel(0, 0), Ok((0, 0, 0)));
  assert_eq!(decoded.get_pixel(1, 0), Ok((255, 255, 255)));
  assert_eq!(decoded, canvas);
}

#[test]
fn test_stream_structure_and_crcs() {
  for _ in 0..8 {
    let dims = super::rand_bytes(2);
    let (w, h) = (u32::from(dims[0] % 40) + 1, u32::from(dims[1] % 40) + 1);
    let pixels = super::rand_bytes((w * h * 3) as usize);
    let png = encode_rgb_bytes(w, h, &pixels).unwrap();
    assert_eq!(&png[..8], &PNG_SIGNATURE);
    let chunks = walk_chunks(&png);
    assert_eq!(chunks.len(), 3);
    assert_eq!(&chunks[0].1, b"IHDR");
    assert_eq!(&chunks[1].1, b"IDAT");
    assert_eq!(&chunks[2].1, b"IEND");
    for (len, ty, data, crc) in &chunks {
      assert_eq!(*len as usize, data.len());
      assert_eq!(*crc, png_crc(&[&ty[..], &data[..]].concat()));
    }
    assert_eq!(chunks[0].2, IHDR::new(w, h).as_bytes());
    assert_eq!(chunks[2].3, 0xAE42_6082);
    let raw = miniz_oxide::inflate::decompress_to_vec_zlib(&chunks[1].2).unwrap();
    assert_eq!(raw.len(), filtered_len(w, h));
  }
}

#[test]
fn test_zero_dimensions_produce_nothing() {
  assert_eq!(
    encode_rgb_bytes(0, 16, &[]),
    Err(EncodeError::InvalidDimension { width: 0, height: 16 })
  );
  assert_eq!(
    encode_rgb_bytes(16, 0, &[]),
    Err(EncodeError::InvalidDimension { width: 16, height: 0 })
  );
  assert!(PixelCanvas::new(0, 16).is_err());
}

#[test]
fn test_write_then_read_back() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("write.png");
  let mut canvas = PixelCanvas::new(5, 4).unwrap();
  canvas.fill(10, 200, 30);
  write(&canvas, &path).unwrap();
  let bytes = std::fs::read(&path).unwrap();
  assert_eq!(bytes, encode(&canvas).unwrap());
  assert_round_trip(&canvas);
  // writing again replaces the file
  canvas.fill(1, 2, 3);
  write(&canvas, &path).unwrap();
  let (_, _, rgb) = decode(&std::fs::read(&path).unwrap());
  assert_eq!(&rgb[..3], &[1, 2, 3]);
  assert_eq!(dir_listing(dir.path()), ["write.png"]);
}

#[test]
fn test_failed_write_can_be_retried_without_encoding() {
  let dir = tempfile::tempdir().unwrap();
  let canvas = PixelCanvas::new(3, 3).unwrap();
  let bad_path = dir.path().join("missing").join("out.png");
  match write(&canvas, &bad_path) {
    Err(WriteError::Io(_)) => (),
    other => panic!("expected an io error, got {other:?}"),
  }
  assert!(!bad_path.exists());

  let bytes = encode(&canvas).unwrap();
  assert!(write_png_bytes(&bytes, &bad_path).is_err());
  let good_path = dir.path().join("retry.png");
  write_png_bytes(&bytes, &good_path).unwrap();
  assert_eq!(std::fs::read(&good_path).unwrap(), bytes);
  // no staging files left behind
  assert_eq!(dir_listing(dir.path()), ["retry.png"]);
}

#[test]
fn test_encode_from_many_threads() {
  let handles: Vec<_> = (0..4u8)
    .map(|i| {
      thread::spawn(move || {
        let width = 7 + u32::from(i);
        let height = 3 + u32::from(i);
        let mut canvas = PixelCanvas::new(width, height).unwrap();
        canvas.fill(i * 40, 255 - i * 40, i);
        canvas.set_pixel(0, 0, 1, 2, 3).unwrap();
        let bytes = encode(&canvas).unwrap();
        (canvas, bytes)
      })
    })
    .collect();
  for h in handles {
    let (canvas, bytes) = h.join().unwrap();
    let (width, height, rgb) = decode(&bytes);
    assert_eq!((width, height), (canvas.width(), canvas.height()));
    assert_eq!(rgb, bytemuck::cast_slice::<RGB8, u8>(canvas.pixels()));
    assert_eq!(bytes, encode(&canvas).unwrap());
  }
}

#[test]
fn test_racing_writes_to_the_same_path() {
  let dir = tempfile::tempdir().unwrap();
  let path = Arc::new(dir.path().join("shared.png"));
  let candidates: Arc<Vec<Vec<u8>>> = Arc::new(
    (0..4u8)
      .map(|i| {
        let mut canvas = PixelCanvas::new(16, 16 + u32::from(i)).unwrap();
        canvas.fill(i, i * 60, 200);
        encode(&canvas).unwrap()
      })
      .collect(),
  );
  for _round in 0..8 {
    let handles: Vec<_> = (0..candidates.len())
      .map(|i| {
        let path = Arc::clone(&path);
        let candidates = Arc::clone(&candidates);
        thread::spawn(move || write_png_bytes(&candidates[i], path.as_path()))
      })
      .collect();
    for h in handles {
      h.join().unwrap().unwrap();
    }
    // whoever renamed last wins, but the file is always one whole PNG
    let on_disk = std::fs::read(path.as_path()).unwrap();
    assert!(candidates.iter().any(|c| *c == on_disk));
    decode(&on_disk);
    assert_eq!(dir_listing(dir.path()), ["shared.png"]);
  }
}
