//! Image stage: text extraction, label detection and face comparison.

use tracing::info;

use super::Showcase;
use crate::errors::ServiceResult;

impl Showcase {
    /// Analyze the source image, then compare its face with every
    /// comparison image. The first failing call ends the stage.
    pub async fn run_images(&self) -> ServiceResult<()> {
        let images = &self.config.images;
        let source = images.source_image.as_path();

        let lines = self.services.text.extract_lines(source).await?;
        println!("{:#?}", lines);

        let labels = self.services.labels.detect_labels(source).await?;
        println!("{:#?}", labels);

        for target in &images.comparison_images {
            let matches = self
                .services
                .faces
                .compare_faces(source, target, images.similarity_threshold)
                .await?;
            for face in &matches {
                println!("{}", face);
            }
        }

        info!(
            source = %source.display(),
            comparisons = images.comparison_images.len(),
            "Image stage complete"
        );
        Ok(())
    }
}
