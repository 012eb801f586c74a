//! Amazon Translate wrapper.

use aws_sdk_translate::Client as TranslateClient;
use tracing::{debug, error};

use crate::errors::{ServiceError, ServiceResult};

const SERVICE: &str = "Translate";

/// Maximum size of a synchronous TranslateText request (UTF-8 bytes).
pub const MAX_TEXT_BYTES: usize = 10_000;

/// Translates text between two Translate language codes.
#[derive(Debug, Clone)]
pub struct Translator {
    client: TranslateClient,
}

impl Translator {
    pub fn new(client: TranslateClient) -> Self {
        Self { client }
    }

    /// Translate `text` from `source_language` to `target_language`.
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> ServiceResult<String> {
        if text.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Cannot translate empty text".into(),
            ));
        }
        if text.len() > MAX_TEXT_BYTES {
            return Err(ServiceError::InvalidInput(format!(
                "Text size {} bytes exceeds maximum {} bytes",
                text.len(),
                MAX_TEXT_BYTES
            )));
        }

        debug!(
            source = source_language,
            target = target_language,
            text_len = text.len(),
            "Translating text"
        );

        let response = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source_language)
            .target_language_code(target_language)
            .send()
            .await
            .map_err(|e| ServiceError::aws(SERVICE, e))?;

        Ok(response.translated_text)
    }

    /// Like [`translate`](Self::translate) but logs failures and returns `None`.
    pub async fn try_translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Option<String> {
        match self.translate(text, source_language, target_language).await {
            Ok(translated) => Some(translated),
            Err(e) => {
                error!(error = %e, "Translation failed");
                None
            }
        }
    }
}
