//! Atomic output writes.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use super::{encode_png, encode_webp, EncodeError, OutputFormat};
use crate::decode::DecodedImage;

/// Write `bytes` to `path` atomically.
///
/// The data goes to a temporary file in the destination directory, which is
/// renamed over `path` only after a successful write and flush. On any
/// failure the temporary file is removed when it is dropped and an existing
/// file at `path` is left untouched.
///
/// # Errors
///
/// Returns `EncodeError::Io` if the temporary file cannot be created,
/// written, or renamed into place.
pub fn write_atomic(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;
    file.as_file().sync_all().map_err(io_err)?;
    file.persist(path).map_err(|e| io_err(e.error))?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}

/// Encode an image in `format`.
///
/// # Errors
///
/// Any error from the format's encoder.
pub fn encode(image: &DecodedImage, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Png => encode_png(image),
        OutputFormat::WebP { quality } => encode_webp(image, quality),
    }
}

/// Encode an image and write it atomically to `path`.
///
/// Encoding finishes before the destination is touched, so an encoder
/// failure never leaves a partial file behind.
///
/// # Errors
///
/// Any error from [`encode`] or [`write_atomic`].
pub fn save(
    image: &DecodedImage,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), EncodeError> {
    let bytes = encode(image, format)?;
    write_atomic(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::load_rgba;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");

        write_atomic(&path, b"hello").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
        assert_eq!(entries(dir.path()), vec!["out.bin"]);
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        std::fs::write(&path, b"old contents").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_write_atomic_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.bin");

        let err = write_atomic(&path, b"data").unwrap_err();
        assert!(matches!(err, EncodeError::Io { .. }));
        assert!(!path.exists());
        assert_eq!(entries(dir.path()), Vec::<String>::new());
    }

    #[test]
    fn test_failed_encode_leaves_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.webp");
        std::fs::write(&path, b"previous").unwrap();

        let img = DecodedImage::filled(4, 4, [0, 0, 0, 255]);
        let result = save(&img, &path, OutputFormat::WebP { quality: 50 });

        assert!(result.is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"previous");
        assert_eq!(entries(dir.path()), vec!["logo.webp"]);
    }

    #[test]
    fn test_save_png_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        let img = DecodedImage::new(2, 1, vec![234, 88, 12, 255, 0, 0, 0, 0]);

        save(&img, &path, OutputFormat::Png).unwrap();

        assert_eq!(load_rgba(&path).unwrap(), img);
    }

    #[test]
    fn test_save_webp_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.webp");
        let img = DecodedImage::filled(9, 5, [234, 88, 12, 255]);

        save(&img, &path, OutputFormat::WebP { quality: 100 }).unwrap();

        let loaded = load_rgba(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (9, 5));
        assert_eq!(loaded.pixel(4, 2), Some([234, 88, 12, 255]));
    }
}
