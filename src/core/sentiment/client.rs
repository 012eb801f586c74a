//! Amazon Comprehend sentiment detection.

use aws_sdk_comprehend::Client as ComprehendClient;
use aws_sdk_comprehend::operation::detect_sentiment::DetectSentimentOutput;
use aws_sdk_comprehend::types::LanguageCode;
use tracing::{debug, error};

use super::types::{SentimentReport, SentimentScores};
use crate::errors::{ServiceError, ServiceResult};

const SERVICE: &str = "Comprehend";

/// Maximum size of a DetectSentiment document (UTF-8 bytes).
pub const MAX_TEXT_BYTES: usize = 5_000;

/// Classifies text polarity with Amazon Comprehend.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    client: ComprehendClient,
}

impl SentimentAnalyzer {
    pub fn new(client: ComprehendClient) -> Self {
        Self { client }
    }

    /// Detect the dominant sentiment of `text` written in `language`.
    pub async fn analyze(&self, text: &str, language: &str) -> ServiceResult<SentimentReport> {
        if text.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Cannot analyze empty text".into(),
            ));
        }
        if text.len() > MAX_TEXT_BYTES {
            return Err(ServiceError::InvalidInput(format!(
                "Text size {} bytes exceeds maximum {} bytes",
                text.len(),
                MAX_TEXT_BYTES
            )));
        }

        debug!(language = language, text_len = text.len(), "Detecting sentiment");

        let response = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(LanguageCode::from(language))
            .send()
            .await
            .map_err(|e| ServiceError::aws(SERVICE, e))?;

        report_from_output(response)
    }

    /// Like [`analyze`](Self::analyze) but logs failures and returns `None`.
    pub async fn try_analyze(&self, text: &str, language: &str) -> Option<SentimentReport> {
        match self.analyze(text, language).await {
            Ok(report) => Some(report),
            Err(e) => {
                error!(error = %e, "Sentiment analysis failed");
                None
            }
        }
    }
}

fn report_from_output(output: DetectSentimentOutput) -> ServiceResult<SentimentReport> {
    let sentiment = output.sentiment.ok_or(ServiceError::MissingField {
        service: SERVICE,
        field: "Sentiment",
    })?;

    let scores = output
        .sentiment_score
        .map(|score| SentimentScores {
            positive: score.positive.unwrap_or_default(),
            negative: score.negative.unwrap_or_default(),
            neutral: score.neutral.unwrap_or_default(),
            mixed: score.mixed.unwrap_or_default(),
        })
        .unwrap_or_default();

    Ok(SentimentReport {
        sentiment: sentiment.as_str().to_string(),
        scores,
    })
}
