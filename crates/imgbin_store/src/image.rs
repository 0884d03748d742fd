//! Image byte persistence.

use imgbin_core::Record;
use imgbin_error::{ImageError, ImageErrorKind};
use tokio::io::AsyncWriteExt;

/// Write upload bytes to the record's path, exactly once per record.
///
/// Creates missing parent directories, writes the bytes, and syncs before
/// returning. On success sets `record.saved`. If another record already
/// stored bytes at the same path (two contents sharing an original
/// filename), they are silently overwritten; the index keeps both records
/// but the file reflects the later write.
///
/// # Errors
///
/// Returns `AlreadySaved` when the record's bytes were already written;
/// calling twice without resetting the flag is a programming error, not a
/// normal path. Directory or write failures leave `saved` unset so a retry
/// is possible.
#[tracing::instrument(skip(record, bytes), fields(name = %record.name, size = bytes.len()))]
pub async fn save_image(record: &mut Record, bytes: &[u8]) -> Result<(), ImageError> {
    if record.saved {
        return Err(ImageError::new(ImageErrorKind::AlreadySaved(
            record.name.clone(),
        )));
    }

    if let Some(parent) = record.path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            ImageError::new(ImageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    let mut file = tokio::fs::File::create(&record.path).await.map_err(|e| {
        ImageError::new(ImageErrorKind::FileWrite(format!(
            "{}: {}",
            record.path.display(),
            e
        )))
    })?;

    file.write_all(bytes).await.map_err(|e| {
        ImageError::new(ImageErrorKind::FileWrite(format!(
            "{}: {}",
            record.path.display(),
            e
        )))
    })?;

    file.sync_all().await.map_err(|e| {
        ImageError::new(ImageErrorKind::FileWrite(format!(
            "sync {}: {}",
            record.path.display(),
            e
        )))
    })?;

    tracing::info!(bytes = bytes.len(), name = %record.name, "Wrote image to disk");
    record.saved = true;
    Ok(())
}

/// Read a stored image's bytes back from disk.
///
/// # Errors
///
/// Returns `NotFound` when the file is absent (deleted out-of-band) and
/// `FileRead` on any other read failure.
#[tracing::instrument(skip(record), fields(id = %record.id, path = %record.path.display()))]
pub async fn read_image(record: &Record) -> Result<Vec<u8>, ImageError> {
    tokio::fs::read(&record.path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ImageError::new(ImageErrorKind::NotFound(record.path.display().to_string()))
        } else {
            ImageError::new(ImageErrorKind::FileRead(format!(
                "{}: {}",
                record.path.display(),
                e
            )))
        }
    })
}
