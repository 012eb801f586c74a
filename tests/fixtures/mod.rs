//! Test Fixtures Module
//!
//! Shared builders for the integration tests:
//! - Configuration fixtures
//! - News article fixtures
//! - Mocked AWS responses (aws-smithy-mocks rules)

// Not every test binary uses every fixture
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use aws_sdk_polly::operation::synthesize_speech::SynthesizeSpeechOutput;
use aws_sdk_polly::primitives::ByteStream;
use aws_sdk_translate::operation::translate_text::TranslateTextOutput;
use aws_smithy_mocks::{Rule, mock};

use newsreel::AppConfig;
use newsreel::core::news::Article;

/// Mocked SDK client with retries disabled, so a failing request is sent
/// once. Rules stay active after matching and the first matching rule
/// answers, so narrow rules must come before catch-all ones.
macro_rules! mock_aws_client {
    ($aws_crate:ident, $rules:expr) => {
        aws_smithy_mocks::mock_client!(
            $aws_crate,
            aws_smithy_mocks::RuleMode::MatchAny,
            $rules,
            |conf| conf.retry_config($aws_crate::config::retry::RetryConfig::disabled())
        )
    };
}

/// Fake audio returned by every mocked Polly call
pub const FAKE_AUDIO: &[u8] = b"ID3\x04\x00fake-mp3-frames";

/// Configuration with test credentials writing audio under `output_dir`.
pub fn test_config(output_dir: &Path) -> AppConfig {
    let mut config = AppConfig::with_credentials("AKIDEXAMPLE", "test-secret")
        .expect("test credentials are valid");
    config.speech.output_dir = output_dir.to_path_buf();
    config
}

pub fn article(title: &str, description: Option<&str>) -> Article {
    Article {
        title: Some(title.to_string()),
        description: description.map(str::to_string),
        ..Default::default()
    }
}

/// Five articles; only the third one mentions "Outage".
pub fn five_articles() -> Vec<Article> {
    vec![
        article("Markets Open Higher", Some("Stocks rose in early trading.")),
        article("Storm Heads East", Some("Forecasters expect heavy rain.")),
        article("Outage Hits Airline", Some("Flights were delayed nationwide.")),
        article("Team Wins Final", None),
        article("Library Extends Hours", Some("Branches stay open until nine.")),
    ]
}

/// Write a small fake image file and return its path.
pub fn write_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nfake-image").expect("write test image");
    path
}

/// Catch-all Polly rule returning [`FAKE_AUDIO`] for every request.
pub fn polly_rule() -> Rule {
    mock!(aws_sdk_polly::Client::synthesize_speech).then_output(|| {
        SynthesizeSpeechOutput::builder()
            .audio_stream(ByteStream::from_static(FAKE_AUDIO))
            .content_type("audio/mpeg")
            .build()
    })
}

pub fn translate_output(text: &str) -> TranslateTextOutput {
    TranslateTextOutput::builder()
        .translated_text(text)
        .source_language_code("en")
        .target_language_code("zh")
        .build()
        .expect("all required fields are set")
}

/// Catch-all Translate rule answering every request with `text`.
pub fn translate_rule(text: &'static str) -> Rule {
    mock!(aws_sdk_translate::Client::translate_text).then_output(move || translate_output(text))
}
