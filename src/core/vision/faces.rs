//! Amazon Rekognition face comparison.

use std::path::Path;

use aws_sdk_rekognition::Client as RekognitionClient;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{CompareFacesMatch, Image};
use serde::Serialize;
use tracing::debug;

use super::labels::{MAX_IMAGE_BYTES, SERVICE};
use super::read_image;
use crate::errors::{ServiceError, ServiceResult};

/// A face in the target image that matches the largest face in the source image.
///
/// Coordinates are ratios of the overall image size, as Rekognition reports them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceMatch {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Confidence that the bounding box contains a face
    pub confidence: f32,
    /// Similarity between the two faces (0-100)
    pub similarity: f32,
}

impl std::fmt::Display for FaceMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The face at {} {} matches with {}% confidence",
            self.left, self.top, self.confidence
        )
    }
}

/// Compares the faces of two images.
#[derive(Debug, Clone)]
pub struct FaceComparator {
    client: RekognitionClient,
}

impl FaceComparator {
    pub fn new(client: RekognitionClient) -> Self {
        Self { client }
    }

    /// Compare the largest face of `source` with every face in `target`.
    ///
    /// Only matches whose similarity is at least `threshold` (0-100) are
    /// returned, in the order Rekognition reports them. An empty vector
    /// means no face matched.
    pub async fn compare_faces(
        &self,
        source: &Path,
        target: &Path,
        threshold: f32,
    ) -> ServiceResult<Vec<FaceMatch>> {
        validate_threshold(threshold)?;

        let source_bytes = read_image(source, MAX_IMAGE_BYTES).await?;
        let target_bytes = read_image(target, MAX_IMAGE_BYTES).await?;

        let response = self
            .client
            .compare_faces()
            .similarity_threshold(threshold)
            .source_image(Image::builder().bytes(Blob::new(source_bytes)).build())
            .target_image(Image::builder().bytes(Blob::new(target_bytes)).build())
            .send()
            .await
            .map_err(|e| ServiceError::aws(SERVICE, e))?;

        let matches = select_matches(response.face_matches(), threshold);
        debug!(
            source = %source.display(),
            target = %target.display(),
            matches = matches.len(),
            unmatched = response.unmatched_faces().len(),
            "Compared faces"
        );
        Ok(matches)
    }
}

pub(crate) fn validate_threshold(threshold: f32) -> ServiceResult<()> {
    if !(0.0..=100.0).contains(&threshold) {
        return Err(ServiceError::InvalidInput(format!(
            "Similarity threshold must be between 0 and 100, got {}",
            threshold
        )));
    }
    Ok(())
}

fn select_matches(matches: &[CompareFacesMatch], threshold: f32) -> Vec<FaceMatch> {
    matches
        .iter()
        .filter_map(|face_match| {
            let similarity = face_match.similarity().unwrap_or_default();
            if similarity < threshold {
                return None;
            }
            let face = face_match.face();
            let bounding_box = face.and_then(|f| f.bounding_box());
            Some(FaceMatch {
                left: bounding_box.and_then(|b| b.left()).unwrap_or_default(),
                top: bounding_box.and_then(|b| b.top()).unwrap_or_default(),
                width: bounding_box.and_then(|b| b.width()).unwrap_or_default(),
                height: bounding_box.and_then(|b| b.height()).unwrap_or_default(),
                confidence: face.and_then(|f| f.confidence()).unwrap_or_default(),
                similarity,
            })
        })
        .collect()
}
