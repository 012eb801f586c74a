//! Image analysis backed by Amazon Textract and Amazon Rekognition.
//!
//! Images are read from local files and sent inline as request bytes;
//! nothing is uploaded to S3.

pub mod faces;
pub mod labels;
pub mod ocr;

use std::path::Path;

use tracing::debug;

use crate::errors::{ServiceError, ServiceResult};

pub use faces::{FaceComparator, FaceMatch};
pub use labels::LabelDetector;
pub use ocr::TextExtractor;

/// Read an image file, rejecting files larger than `max_bytes`.
pub(crate) async fn read_image(path: &Path, max_bytes: usize) -> ServiceResult<Vec<u8>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ServiceError::io(path, e))?;

    if bytes.is_empty() {
        return Err(ServiceError::InvalidInput(format!(
            "Image {} is empty",
            path.display()
        )));
    }
    if bytes.len() > max_bytes {
        return Err(ServiceError::InvalidInput(format!(
            "Image {} is {} bytes, maximum is {} bytes",
            path.display(),
            bytes.len(),
            max_bytes
        )));
    }

    debug!(path = %path.display(), bytes = bytes.len(), "Read image");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_image_missing_file() {
        let err = read_image(Path::new("does/not/exist.png"), 1024)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Io { .. }));
    }

    #[tokio::test]
    async fn test_read_image_rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        std::fs::write(&path, vec![0u8; 32]).unwrap();

        let err = read_image(&path, 16).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let bytes = read_image(&path, 64).await.unwrap();
        assert_eq!(bytes.len(), 32);
    }
}
