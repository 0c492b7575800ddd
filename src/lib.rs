#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for writing truecolor PNG data.
//!
//! You fill a [`PixelCanvas`] with [`RGB8`] pixels and then hand it to
//! [`png::encode`] (or [`png::write`] if you want it on disk). The output is
//! always an 8-bit RGB, non-interlaced PNG with exactly one `IDAT` chunk.
//!
//! ```
//! use rgbpng::{png, PixelCanvas};
//! let mut canvas = PixelCanvas::new(2, 2).unwrap();
//! canvas.fill(255, 255, 255);
//! canvas.set_pixel(1, 1, 255, 0, 0).unwrap();
//! let bytes = png::encode(&canvas).unwrap();
//! assert_eq!(&bytes[..8], &png::PNG_SIGNATURE);
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod pixel_formats;
pub use pixel_formats::*;

mod int_endian;
pub use int_endian::*;

mod error;
pub use error::*;

mod canvas;
pub use canvas::*;

pub mod png;
