//! Environment variable loading.
//!
//! Values are read through a lookup function so the same code serves the
//! real process environment and tests. Empty values count as unset.

use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::{ConfigError, ConfigResult};

pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const LANGUAGE_SERVICES_REGION: &str = "LANGUAGE_SERVICES_REGION";
pub const VISION_SERVICES_REGION: &str = "VISION_SERVICES_REGION";
pub const NEWS_API_KEY: &str = "NEWS_API_KEY";
pub const NEWS_API_URL: &str = "NEWS_API_URL";
pub const NEWS_COUNTRY: &str = "NEWS_COUNTRY";
pub const NEWS_TIMEOUT_SECONDS: &str = "NEWS_TIMEOUT_SECONDS";
pub const ARTICLE_LIMIT: &str = "ARTICLE_LIMIT";
pub const OUTPUT_DIR: &str = "OUTPUT_DIR";
pub const SOURCE_LANGUAGE: &str = "SOURCE_LANGUAGE";
pub const TARGET_LANGUAGE: &str = "TARGET_LANGUAGE";
pub const NARRATION_VOICE: &str = "NARRATION_VOICE";
pub const TRANSLATION_VOICE: &str = "TRANSLATION_VOICE";
pub const AUDIO_FORMAT: &str = "AUDIO_FORMAT";
pub const POLLY_ENGINE: &str = "POLLY_ENGINE";
pub const SOURCE_IMAGE: &str = "SOURCE_IMAGE";
pub const COMPARISON_IMAGES: &str = "COMPARISON_IMAGES";
pub const FACE_SIMILARITY_THRESHOLD: &str = "FACE_SIMILARITY_THRESHOLD";
pub const MAX_LABELS: &str = "MAX_LABELS";
pub const MIN_LABEL_CONFIDENCE: &str = "MIN_LABEL_CONFIDENCE";

/// Raw values read from the environment, before defaults are applied.
#[derive(Default)]
pub(crate) struct EnvConfig {
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub aws_session_token: Option<String>,
    pub language_region: Option<String>,
    pub vision_region: Option<String>,
    pub news_api_key: Option<String>,
    pub news_api_url: Option<String>,
    pub news_country: Option<String>,
    pub news_timeout_seconds: Option<u64>,
    pub article_limit: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub narration_voice: Option<String>,
    pub translation_voice: Option<String>,
    pub audio_format: Option<String>,
    pub polly_engine: Option<String>,
    pub source_image: Option<PathBuf>,
    pub comparison_images: Option<Vec<PathBuf>>,
    pub face_similarity_threshold: Option<f32>,
    pub max_labels: Option<i32>,
    pub min_label_confidence: Option<f32>,
}

impl EnvConfig {
    pub(crate) fn load<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            aws_access_key_id: get(AWS_ACCESS_KEY_ID),
            aws_secret_access_key: get(AWS_SECRET_ACCESS_KEY),
            aws_session_token: get(AWS_SESSION_TOKEN),
            language_region: get(LANGUAGE_SERVICES_REGION),
            vision_region: get(VISION_SERVICES_REGION),
            news_api_key: get(NEWS_API_KEY),
            news_api_url: get(NEWS_API_URL),
            news_country: get(NEWS_COUNTRY),
            news_timeout_seconds: parse_var(NEWS_TIMEOUT_SECONDS, get(NEWS_TIMEOUT_SECONDS))?,
            article_limit: parse_var(ARTICLE_LIMIT, get(ARTICLE_LIMIT))?,
            output_dir: get(OUTPUT_DIR).map(PathBuf::from),
            source_language: get(SOURCE_LANGUAGE),
            target_language: get(TARGET_LANGUAGE),
            narration_voice: get(NARRATION_VOICE),
            translation_voice: get(TRANSLATION_VOICE),
            audio_format: get(AUDIO_FORMAT),
            polly_engine: get(POLLY_ENGINE),
            source_image: get(SOURCE_IMAGE).map(PathBuf::from),
            comparison_images: get(COMPARISON_IMAGES).map(|v| split_paths(&v)),
            face_similarity_threshold: parse_var(
                FACE_SIMILARITY_THRESHOLD,
                get(FACE_SIMILARITY_THRESHOLD),
            )?,
            max_labels: parse_var(MAX_LABELS, get(MAX_LABELS))?,
            min_label_confidence: parse_var(MIN_LABEL_CONFIDENCE, get(MIN_LABEL_CONFIDENCE))?,
        })
    }
}

fn parse_var<T>(key: &str, value: Option<String>) -> ConfigResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.parse::<T>()
                .map_err(|e| ConfigError::invalid(key, format!("'{}': {}", v, e)))
        })
        .transpose()
}

/// Split a comma-separated list of paths, dropping empty entries.
fn split_paths(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
