use rgbpng::{png, PixelCanvas};

fn main() {
  let args: Vec<String> = std::env::args().collect();
  let out_path = args.get(1).map(String::as_str).unwrap_or("checkerboard.png");
  let size: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(16);

  let mut canvas = match PixelCanvas::new(size, size) {
    Ok(canvas) => canvas,
    Err(e) => {
      println!("{e}");
      return;
    }
  };
  for y in 0..size {
    for x in 0..size {
      let v: u8 = if (x + y) % 2 == 0 { 0 } else { 255 };
      if let Some(p) = canvas.get_mut(x, y) {
        *p = [v, v, v].into();
      }
    }
  }

  print!("Writing `{out_path}`... ");
  match png::write(&canvas, out_path) {
    Ok(()) => println!("done."),
    Err(e) => println!("{e}"),
  }
}
