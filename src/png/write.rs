use super::*;

use crate::WriteError;
use std::{
  ffi::OsStr,
  io::{self, Write},
  path::Path,
};

/// Encodes the canvas and saves it at `path`.
///
/// The whole PNG is built in memory first, then persisted with
/// [`write_png_bytes`], so a failed write never leaves a partial file behind.
///
/// ## Failure
/// * `Encode` if the canvas can't be encoded. Nothing touches the disk.
/// * `Io` if the bytes can't be saved.
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
pub fn write(canvas: &PixelCanvas, path: impl AsRef<Path>) -> Result<(), WriteError> {
  let bytes = encode(canvas)?;
  write_png_bytes(&bytes, path)?;
  Ok(())
}

/// Saves already encoded bytes at `path`, replacing any file that's there.
///
/// Each call stages the bytes in its own uniquely named temporary file in the
/// same directory, syncs it, and then renames it over the destination. Calls
/// that race on one destination each install a complete file, and the last
/// rename wins. On any error the temporary file is removed and the destination
/// is left as it was, so the call can simply be tried again with the same
/// bytes.
///
/// On unix the directory is also synced after the rename so the new entry
/// survives a crash. Elsewhere the rename itself is the last step.
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
pub fn write_png_bytes(bytes: &[u8], path: impl AsRef<Path>) -> io::Result<()> {
  let path = path.as_ref();
  let (dir, name) = staging_dir_and_name(path)?;
  let prefix = std::format!(".{}.", name.to_string_lossy());
  // dropping the temp file on an early return deletes it
  let mut temp = tempfile::Builder::new().prefix(&prefix).suffix(".tmp").tempfile_in(dir)?;
  temp.write_all(bytes)?;
  temp.as_file().sync_all()?;
  temp.persist(path).map_err(|e| e.error)?;
  sync_dir(dir);
  log::debug!("wrote {} PNG bytes to {}", bytes.len(), path.display());
  Ok(())
}

/// The directory to stage in (next to the destination) and the file name.
fn staging_dir_and_name(path: &Path) -> io::Result<(&Path, &OsStr)> {
  let name = path.file_name().ok_or_else(|| {
    io::Error::new(io::ErrorKind::InvalidInput, "PNG output path has no file name")
  })?;
  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  Ok((dir, name))
}

#[cfg(unix)]
fn sync_dir(dir: &Path) {
  if let Err(e) = std::fs::File::open(dir).and_then(|d| d.sync_all()) {
    log::warn!("couldn't sync directory {}: {e}", dir.display());
  }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}

#[test]
fn test_staging_dir_is_the_destination_dir() {
  let (dir, name) = staging_dir_and_name(Path::new("some/dir/out.png")).unwrap();
  assert_eq!(dir, Path::new("some/dir"));
  assert_eq!(name, "out.png");
  let (dir, _) = staging_dir_and_name(Path::new("out.png")).unwrap();
  assert_eq!(dir, Path::new("."));
  assert!(staging_dir_and_name(Path::new("..")).is_err());
}
