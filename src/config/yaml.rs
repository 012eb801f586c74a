use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::{ConfigError, ConfigResult};

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present
/// here override the matching environment variables.
///
/// # Example YAML structure
/// ```yaml
/// aws:
///   access_key_id: "AKIA..."
///   secret_access_key: "..."
///   language_region: "us-east-1"
///   vision_region: "us-west-2"
///
/// news:
///   api_key: "your-news-api-key"
///   country: "gb"
///   timeout_seconds: 15
///   article_limit: 3
///
/// speech:
///   output_dir: "tmp"
///   target_language: "ja"
///   narration_voice: "Joanna"
///   translation_voice: "Takumi"
///   format: "ogg_vorbis"
///   engine: "neural"
///
/// images:
///   source_image: "faces/source.png"
///   comparison_images:
///     - "faces/a.png"
///     - "faces/b.png"
///   similarity_threshold: 80
///
/// sentiment:
///   samples:
///     - "What a wonderful morning."
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub aws: Option<AwsYaml>,
    pub news: Option<NewsYaml>,
    pub speech: Option<SpeechYaml>,
    pub images: Option<ImagesYaml>,
    pub sentiment: Option<SentimentYaml>,
}

/// AWS credentials and regions from YAML
#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct AwsYaml {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub language_region: Option<String>,
    pub vision_region: Option<String>,
}

impl std::fmt::Debug for AwsYaml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("AwsYaml")
            .field("access_key_id", &redact(&self.access_key_id))
            .field("secret_access_key", &redact(&self.secret_access_key))
            .field("session_token", &redact(&self.session_token))
            .field("language_region", &self.language_region)
            .field("vision_region", &self.vision_region)
            .finish()
    }
}

/// News API settings from YAML
#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct NewsYaml {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub country: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub article_limit: Option<usize>,
}

impl std::fmt::Debug for NewsYaml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsYaml")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("country", &self.country)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("article_limit", &self.article_limit)
            .finish()
    }
}

/// Narration settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SpeechYaml {
    pub output_dir: Option<PathBuf>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub narration_voice: Option<String>,
    pub translation_voice: Option<String>,
    pub format: Option<String>,
    pub engine: Option<String>,
}

/// Image analysis inputs from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ImagesYaml {
    pub source_image: Option<PathBuf>,
    pub comparison_images: Option<Vec<PathBuf>>,
    pub similarity_threshold: Option<f32>,
    pub max_labels: Option<i32>,
    pub min_label_confidence: Option<f32>,
}

/// Sentiment sample passages from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SentimentYaml {
    pub samples: Option<Vec<String>>,
}

impl YamlConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if the YAML is malformed or a field has the
    /// wrong type.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }
}
