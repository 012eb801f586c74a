//! Amazon Rekognition label detection.

use std::collections::BTreeMap;
use std::path::Path;

use aws_sdk_rekognition::Client as RekognitionClient;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{Image, Label};
use tracing::debug;

use super::read_image;
use crate::config::ImageConfig;
use crate::errors::{ServiceError, ServiceResult};

pub(crate) const SERVICE: &str = "Rekognition";

/// Largest image Rekognition accepts as inline bytes.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Detects objects and concepts in images.
#[derive(Debug, Clone)]
pub struct LabelDetector {
    client: RekognitionClient,
    max_labels: Option<i32>,
    min_confidence: Option<f32>,
}

impl LabelDetector {
    pub fn new(client: RekognitionClient) -> Self {
        Self {
            client,
            max_labels: None,
            min_confidence: None,
        }
    }

    /// Detector using the label limits from the image configuration.
    pub fn from_config(client: RekognitionClient, images: &ImageConfig) -> Self {
        Self::new(client)
            .with_max_labels(images.max_labels)
            .with_min_confidence(images.min_label_confidence)
    }

    /// Limit the number of labels Rekognition returns.
    pub fn with_max_labels(mut self, max_labels: Option<i32>) -> Self {
        self.max_labels = max_labels;
        self
    }

    /// Ask Rekognition to drop labels below this confidence (0-100).
    pub fn with_min_confidence(mut self, min_confidence: Option<f32>) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Map every detected label name to its confidence.
    ///
    /// Confidence values are rendered with `f32`'s shortest round-trip
    /// representation. A name reported twice keeps the last confidence.
    pub async fn detect_labels(&self, path: &Path) -> ServiceResult<BTreeMap<String, String>> {
        let bytes = read_image(path, MAX_IMAGE_BYTES).await?;

        let response = self
            .client
            .detect_labels()
            .image(Image::builder().bytes(Blob::new(bytes)).build())
            .set_max_labels(self.max_labels)
            .set_min_confidence(self.min_confidence)
            .send()
            .await
            .map_err(|e| ServiceError::aws(SERVICE, e))?;

        let labels = labels_to_map(response.labels());
        debug!(path = %path.display(), labels = labels.len(), "Detected labels");
        Ok(labels)
    }
}

/// Labels without a confidence keep their name with an empty value.
fn labels_to_map(labels: &[Label]) -> BTreeMap<String, String> {
    labels
        .iter()
        .filter_map(|label| {
            let name = label.name()?;
            let confidence = match label.confidence() {
                Some(confidence) => confidence.to_string(),
                None => {
                    debug!(label = name, "Label has no confidence");
                    String::new()
                }
            };
            Some((name.to_string(), confidence))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str, confidence: f32) -> Label {
        Label::builder().name(name).confidence(confidence).build()
    }

    #[test]
    fn test_labels_to_map_one_entry_per_name() {
        let labels = vec![
            label("Person", 99.1),
            label("Human", 98.7),
            label("Person", 97.25),
        ];

        let map = labels_to_map(&labels);
        assert_eq!(map.len(), 2);
        assert_eq!(map["Person"], "97.25");
        assert_eq!(map["Human"], "98.7");
    }

    #[test]
    fn test_confidence_string_round_trips() {
        let confidence = 99.876_543_f32;
        let map = labels_to_map(&[label("Suit", confidence)]);
        let parsed: f32 = map["Suit"].parse().unwrap();
        assert_eq!(parsed, confidence);
    }

    #[test]
    fn test_label_without_confidence_keeps_name() {
        let labels = vec![Label::builder().name("Flag").build(), label("Tie", 80.0)];
        let map = labels_to_map(&labels);
        assert_eq!(map.len(), 2);
        assert_eq!(map["Flag"], "");
        assert_eq!(map["Tie"], "80");
    }

    #[test]
    fn test_labels_without_name_are_skipped() {
        let labels = vec![Label::builder().confidence(80.0).build(), label("Tie", 80.0)];
        let map = labels_to_map(&labels);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("Tie"));
    }
}
