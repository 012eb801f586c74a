//! Amazon Textract text extraction.

use std::path::Path;

use aws_sdk_textract::Client as TextractClient;
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types::{Block, BlockType, Document};
use tracing::debug;

use super::read_image;
use crate::errors::{ServiceError, ServiceResult};

const SERVICE: &str = "Textract";

/// Largest document Textract accepts inline for synchronous operations.
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Extracts printed text lines from images.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    client: TextractClient,
}

impl TextExtractor {
    pub fn new(client: TextractClient) -> Self {
        Self { client }
    }

    /// Return the text of every detected line, in the order Textract reports them.
    pub async fn extract_lines(&self, path: &Path) -> ServiceResult<Vec<String>> {
        let bytes = read_image(path, MAX_DOCUMENT_BYTES).await?;

        let response = self
            .client
            .detect_document_text()
            .document(Document::builder().bytes(Blob::new(bytes)).build())
            .send()
            .await
            .map_err(|e| ServiceError::aws(SERVICE, e))?;

        let lines = line_texts(response.blocks());
        debug!(path = %path.display(), lines = lines.len(), "Extracted text lines");
        Ok(lines)
    }
}

/// Keep the text of LINE blocks; WORD and PAGE blocks repeat the same content.
fn line_texts(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .filter(|block| block.block_type() == Some(&BlockType::Line))
        .filter_map(|block| block.text().map(str::to_string))
        .collect()
}
