use core::fmt;

/// An error from building or editing a [`PixelCanvas`](crate::PixelCanvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasError {
  /// A dimension is 0, the pixel data doesn't match the declared dimensions,
  /// or the dimensions are too large to address.
  InvalidDimension {
    /// declared width
    width: u32,
    /// declared height
    height: u32,
  },

  /// A pixel position was outside the canvas.
  OutOfBounds {
    /// requested x
    x: u32,
    /// requested y
    y: u32,
    /// canvas width
    width: u32,
    /// canvas height
    height: u32,
  },

  /// An untrusted channel value wasn't in `0..=255`.
  InvalidColorValue {
    /// position of the bad value within the input channels
    index: usize,
    /// the value itself
    value: i64,
  },
}
impl fmt::Display for CanvasError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidDimension { width, height } => {
        write!(f, "invalid canvas dimensions {width}x{height}")
      }
      Self::OutOfBounds { x, y, width, height } => {
        write!(f, "pixel ({x}, {y}) is outside of the {width}x{height} canvas")
      }
      Self::InvalidColorValue { index, value } => {
        write!(f, "channel value {value} at index {index} is not in 0..=255")
      }
    }
  }
}

/// An error from encoding a canvas as PNG.
///
/// When you get one of these there's no output at all, never a partial stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeError {
  /// The canvas width and/or height is 0, or doesn't agree with its pixels.
  InvalidDimension {
    /// canvas width
    width: u32,
    /// canvas height
    height: u32,
  },

  /// The DEFLATE compressor reported an internal error.
  CompressionFailure,

  /// A chunk's data would exceed the PNG limit of `2^31 - 1` bytes.
  ChunkTooLarge {
    /// the data length that was refused
    len: usize,
  },
}
impl fmt::Display for EncodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidDimension { width, height } => {
        write!(f, "can't encode a {width}x{height} image")
      }
      Self::CompressionFailure => f.write_str("zlib compression failed"),
      Self::ChunkTooLarge { len } => {
        write!(f, "chunk data of {len} bytes is over the PNG chunk limit")
      }
    }
  }
}

/// An error from writing a PNG to the file system.
#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
#[derive(Debug)]
pub enum WriteError {
  /// Encoding failed, nothing was written.
  Encode(EncodeError),

  /// The encoded bytes couldn't be persisted. The destination is untouched,
  /// so you can retry with [`write_png_bytes`](crate::png::write_png_bytes)
  /// without encoding again.
  Io(std::io::Error),
}
#[cfg(feature = "std")]
impl fmt::Display for WriteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Encode(e) => write!(f, "encode failed: {e}"),
      Self::Io(e) => write!(f, "write failed: {e}"),
    }
  }
}
#[cfg(feature = "std")]
impl From<EncodeError> for WriteError {
  #[inline]
  fn from(e: EncodeError) -> Self {
    Self::Encode(e)
  }
}
#[cfg(feature = "std")]
impl From<std::io::Error> for WriteError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Io(e)
  }
}

#[cfg(feature = "std")]
impl std::error::Error for CanvasError {}
#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}
#[cfg(feature = "std")]
impl std::error::Error for WriteError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Encode(e) => Some(e),
      Self::Io(e) => Some(e),
    }
  }
}
