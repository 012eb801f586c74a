//! Configuration module for newsreel
//!
//! Configuration comes from .env files, environment variables and an
//! optional YAML file. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `env`: Environment variable loading
//! - `yaml`: YAML configuration file loading
//! - `merge`: Merging YAML and environment configurations, with validation
//!
//! # Example
//! ```rust,no_run
//! use newsreel::config::AppConfig;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = AppConfig::from_env()?;
//!
//! // Load from YAML file with environment variable fallbacks
//! let config = AppConfig::from_file(Path::new("newsreel.yaml"))?;
//!
//! println!("Narrating {} articles", config.news.article_limit);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod env;
mod merge;
pub mod samples;
mod yaml;

pub use merge::{
    DEFAULT_ARTICLE_LIMIT, DEFAULT_COMPARISON_IMAGES, DEFAULT_LANGUAGE_REGION,
    DEFAULT_NEWS_COUNTRY, DEFAULT_NEWS_TIMEOUT_SECONDS, DEFAULT_OUTPUT_DIR,
    DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_SOURCE_IMAGE, DEFAULT_VISION_REGION,
};
pub use yaml::YamlConfig;

use crate::core::aws::AwsRegion;
use crate::core::tts::{PollyEngine, PollyOutputFormat, PollyVoice, SpeechOptions};
use crate::errors::ConfigResult;

/// News API settings.
#[derive(Clone)]
pub struct NewsConfig {
    /// Only the news stage needs this; other stages run without it
    pub api_key: Option<String>,
    pub api_url: String,
    pub country: String,
    pub timeout: Duration,
    /// Number of articles narrated per run
    pub article_limit: usize,
}

impl std::fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("country", &self.country)
            .field("timeout", &self.timeout)
            .field("article_limit", &self.article_limit)
            .finish()
    }
}

impl Drop for NewsConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.api_key {
            key.zeroize();
        }
    }
}

/// Narration and translation settings.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub output_dir: PathBuf,
    pub source_language: String,
    pub target_language: String,
    pub narration_voice: PollyVoice,
    pub translation_voice: PollyVoice,
    pub format: PollyOutputFormat,
    pub engine: Option<PollyEngine>,
}

impl SpeechConfig {
    /// Options for reading the original article text.
    pub fn narration_options(&self) -> SpeechOptions {
        SpeechOptions::new(self.narration_voice.clone())
            .with_format(self.format)
            .with_engine(self.engine)
    }

    /// Options for reading the translated text.
    pub fn translation_options(&self) -> SpeechOptions {
        SpeechOptions::new(self.translation_voice.clone())
            .with_format(self.format)
            .with_engine(self.engine)
    }
}

/// Inputs for the image analysis stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageConfig {
    /// Image used for text extraction, labels and as the face comparison source
    pub source_image: PathBuf,
    pub comparison_images: Vec<PathBuf>,
    /// Minimum similarity (0-100) for a face match to be reported
    pub similarity_threshold: f32,
    /// Upper bound on labels per image; Rekognition's default when unset
    pub max_labels: Option<i32>,
    /// Labels below this confidence (0-100) are not returned
    pub min_label_confidence: Option<f32>,
}

/// Application configuration
pub struct AppConfig {
    // AWS
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub aws_session_token: Option<String>,
    /// Region for Polly, Translate and Comprehend
    pub language_region: AwsRegion,
    /// Region for Textract and Rekognition
    pub vision_region: AwsRegion,

    pub news: NewsConfig,
    pub speech: SpeechConfig,
    pub images: ImageConfig,
    pub sentiment_samples: Vec<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("aws_access_key_id", &"[REDACTED]")
            .field("aws_secret_access_key", &"[REDACTED]")
            .field(
                "aws_session_token",
                &self.aws_session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("language_region", &self.language_region)
            .field("vision_region", &self.vision_region)
            .field("news", &self.news)
            .field("speech", &self.speech)
            .field("images", &self.images)
            .field("sentiment_samples", &self.sentiment_samples.len())
            .finish()
    }
}

/// Zeroize the AWS credentials when the configuration is dropped.
impl Drop for AppConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.aws_access_key_id.zeroize();
        self.aws_secret_access_key.zeroize();
        if let Some(ref mut token) = self.aws_session_token {
            token.zeroize();
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingCredential`](crate::errors::ConfigError::MissingCredential)
    /// when the AWS access key or secret is unset, and
    /// [`ConfigError::InvalidValue`](crate::errors::ConfigError::InvalidValue)
    /// when a variable cannot be parsed.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        merge::merge_config(env::EnvConfig::load(lookup)?, None)
    }

    /// Load configuration from a YAML file, falling back to environment
    /// variables for anything the file leaves out.
    ///
    /// Note: the .env file is loaded in main.rs at startup, so its values
    /// are already part of the environment here.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        Self::from_file_with_lookup(path, |key| std::env::var(key).ok())
    }

    pub fn from_file_with_lookup<F>(path: &Path, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let yaml_config = YamlConfig::from_file(path)?;
        merge::merge_config(env::EnvConfig::load(lookup)?, Some(yaml_config))
    }

    /// Configuration with the given credentials and every other value at
    /// its default.
    pub fn with_credentials(access_key_id: &str, secret_access_key: &str) -> ConfigResult<Self> {
        Self::from_lookup(|key| match key {
            env::AWS_ACCESS_KEY_ID => Some(access_key_id.to_string()),
            env::AWS_SECRET_ACCESS_KEY => Some(secret_access_key.to_string()),
            _ => None,
        })
    }
}
