//! Combines environment values with YAML overrides and applies defaults.
//!
//! Priority: YAML > environment (.env + real ENV) > defaults.

use std::path::PathBuf;
use std::time::Duration;

use super::env::{self, EnvConfig};
use super::yaml::YamlConfig;
use super::{AppConfig, ImageConfig, NewsConfig, SpeechConfig};
use crate::core::aws::AwsRegion;
use crate::core::language;
use crate::core::news::DEFAULT_NEWS_API_URL;
use crate::core::tts::{PollyEngine, PollyOutputFormat, PollyVoice};
use crate::errors::{ConfigError, ConfigResult};
use super::samples::default_samples;

pub const DEFAULT_LANGUAGE_REGION: AwsRegion = AwsRegion::UsEast1;
pub const DEFAULT_VISION_REGION: AwsRegion = AwsRegion::UsWest2;
pub const DEFAULT_NEWS_COUNTRY: &str = "us";
pub const DEFAULT_NEWS_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_ARTICLE_LIMIT: usize = 5;
pub const DEFAULT_OUTPUT_DIR: &str = "tmp";
pub const DEFAULT_SOURCE_IMAGE: &str = "inslee.png";
pub const DEFAULT_COMPARISON_IMAGES: &[&str] = &["hickenlooper.png", "inslee2.png"];
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 70.0;

pub(crate) fn merge_config(env: EnvConfig, yaml: Option<YamlConfig>) -> ConfigResult<AppConfig> {
    let yaml = yaml.unwrap_or_default();
    let aws = yaml.aws.unwrap_or_default();
    let news = yaml.news.unwrap_or_default();
    let speech = yaml.speech.unwrap_or_default();
    let images = yaml.images.unwrap_or_default();
    let sentiment = yaml.sentiment.unwrap_or_default();

    // Credentials
    let aws_access_key_id = non_empty(aws.access_key_id)
        .or(env.aws_access_key_id)
        .ok_or(ConfigError::MissingCredential(env::AWS_ACCESS_KEY_ID))?;
    let aws_secret_access_key = non_empty(aws.secret_access_key)
        .or(env.aws_secret_access_key)
        .ok_or(ConfigError::MissingCredential(env::AWS_SECRET_ACCESS_KEY))?;
    let aws_session_token = non_empty(aws.session_token).or(env.aws_session_token);

    let language_region = region(
        env::LANGUAGE_SERVICES_REGION,
        aws.language_region.or(env.language_region),
        DEFAULT_LANGUAGE_REGION,
    )?;
    let vision_region = region(
        env::VISION_SERVICES_REGION,
        aws.vision_region.or(env.vision_region),
        DEFAULT_VISION_REGION,
    )?;

    // News
    let timeout_seconds = news
        .timeout_seconds
        .or(env.news_timeout_seconds)
        .unwrap_or(DEFAULT_NEWS_TIMEOUT_SECONDS);
    if timeout_seconds == 0 {
        return Err(ConfigError::invalid(
            env::NEWS_TIMEOUT_SECONDS,
            "must be greater than zero",
        ));
    }
    let article_limit = news
        .article_limit
        .or(env.article_limit)
        .unwrap_or(DEFAULT_ARTICLE_LIMIT);
    if article_limit == 0 {
        return Err(ConfigError::invalid(
            env::ARTICLE_LIMIT,
            "must be greater than zero",
        ));
    }

    let news = NewsConfig {
        api_key: non_empty(news.api_key).or(env.news_api_key),
        api_url: news
            .api_url
            .or(env.news_api_url)
            .unwrap_or_else(|| DEFAULT_NEWS_API_URL.to_string()),
        country: news
            .country
            .or(env.news_country)
            .unwrap_or_else(|| DEFAULT_NEWS_COUNTRY.to_string()),
        timeout: Duration::from_secs(timeout_seconds),
        article_limit,
    };

    // Speech
    let source_language = speech
        .source_language
        .or(env.source_language)
        .unwrap_or_else(|| language::ENGLISH.to_string());
    let target_language = speech
        .target_language
        .or(env.target_language)
        .unwrap_or_else(|| language::CHINESE.to_string());

    let translation_voice = match speech.translation_voice.or(env.translation_voice) {
        Some(voice) => PollyVoice::from_str_or_default(&voice),
        None => PollyVoice::for_language(&target_language).ok_or_else(|| {
            ConfigError::invalid(
                env::TRANSLATION_VOICE,
                format!("no default voice for language '{}'", target_language),
            )
        })?,
    };

    let format = match speech.format.or(env.audio_format) {
        Some(value) => output_format(&value)?,
        None => PollyOutputFormat::default(),
    };

    let engine = speech
        .engine
        .or(env.polly_engine)
        .map(|value| {
            PollyEngine::parse(&value).ok_or_else(|| {
                ConfigError::invalid(env::POLLY_ENGINE, format!("unknown engine '{}'", value))
            })
        })
        .transpose()?;

    let speech = SpeechConfig {
        output_dir: speech
            .output_dir
            .or(env.output_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        source_language,
        target_language,
        narration_voice: speech
            .narration_voice
            .or(env.narration_voice)
            .map(|v| PollyVoice::from_str_or_default(&v))
            .unwrap_or_default(),
        translation_voice,
        format,
        engine,
    };

    // Images
    let similarity_threshold = images
        .similarity_threshold
        .or(env.face_similarity_threshold)
        .unwrap_or(DEFAULT_SIMILARITY_THRESHOLD);
    if !(0.0..=100.0).contains(&similarity_threshold) {
        return Err(ConfigError::invalid(
            env::FACE_SIMILARITY_THRESHOLD,
            format!("{} is outside 0..=100", similarity_threshold),
        ));
    }

    let max_labels = images.max_labels.or(env.max_labels);
    if let Some(max) = max_labels.filter(|&max| max < 1) {
        return Err(ConfigError::invalid(
            env::MAX_LABELS,
            format!("{} must be at least 1", max),
        ));
    }

    let min_label_confidence = images.min_label_confidence.or(env.min_label_confidence);
    if let Some(min) = min_label_confidence.filter(|min| !(0.0..=100.0).contains(min)) {
        return Err(ConfigError::invalid(
            env::MIN_LABEL_CONFIDENCE,
            format!("{} is outside 0..=100", min),
        ));
    }

    let images = ImageConfig {
        source_image: images
            .source_image
            .or(env.source_image)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_IMAGE)),
        comparison_images: images
            .comparison_images
            .or(env.comparison_images)
            .unwrap_or_else(|| {
                DEFAULT_COMPARISON_IMAGES
                    .iter()
                    .map(PathBuf::from)
                    .collect()
            }),
        similarity_threshold,
        max_labels,
        min_label_confidence,
    };

    let sentiment_samples = sentiment
        .samples
        .filter(|samples| !samples.is_empty())
        .unwrap_or_else(default_samples);

    Ok(AppConfig {
        aws_access_key_id,
        aws_secret_access_key,
        aws_session_token,
        language_region,
        vision_region,
        news,
        speech,
        images,
        sentiment_samples,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn region(key: &str, value: Option<String>, default: AwsRegion) -> ConfigResult<AwsRegion> {
    match value {
        Some(v) => AwsRegion::parse(&v)
            .ok_or_else(|| ConfigError::invalid(key, format!("unsupported region '{}'", v))),
        None => Ok(default),
    }
}

fn output_format(value: &str) -> ConfigResult<PollyOutputFormat> {
    match value.trim().to_lowercase().as_str() {
        "mp3" | "ogg_vorbis" | "ogg" | "pcm" => Ok(PollyOutputFormat::from_str_or_default(value)),
        _ => Err(ConfigError::invalid(
            env::AUDIO_FORMAT,
            format!("unsupported format '{}'", value),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::yaml::{AwsYaml, ImagesYaml, NewsYaml, SpeechYaml};

    fn env_with_credentials() -> EnvConfig {
        EnvConfig {
            aws_access_key_id: Some("AKIDEXAMPLE".into()),
            aws_secret_access_key: Some("secret".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = merge_config(env_with_credentials(), None).unwrap();
        assert_eq!(config.language_region, AwsRegion::UsEast1);
        assert_eq!(config.vision_region, AwsRegion::UsWest2);
        assert!(config.news.api_key.is_none());
        assert_eq!(config.news.api_url, DEFAULT_NEWS_API_URL);
        assert_eq!(config.news.country, "us");
        assert_eq!(config.news.timeout, Duration::from_secs(30));
        assert_eq!(config.news.article_limit, 5);
        assert_eq!(config.speech.output_dir, PathBuf::from("tmp"));
        assert_eq!(config.speech.source_language, "en");
        assert_eq!(config.speech.target_language, "zh");
        assert_eq!(config.speech.narration_voice, PollyVoice::Matthew);
        assert_eq!(config.speech.translation_voice, PollyVoice::Zhiyu);
        assert_eq!(config.speech.format, PollyOutputFormat::Mp3);
        assert!(config.speech.engine.is_none());
        assert_eq!(config.images.source_image, PathBuf::from("inslee.png"));
        assert_eq!(
            config.images.comparison_images,
            vec![PathBuf::from("hickenlooper.png"), PathBuf::from("inslee2.png")]
        );
        assert_eq!(config.images.similarity_threshold, 70.0);
        assert!(config.images.max_labels.is_none());
        assert!(config.images.min_label_confidence.is_none());
        assert_eq!(config.sentiment_samples, default_samples());
    }

    #[test]
    fn test_missing_access_key() {
        let env = EnvConfig {
            aws_secret_access_key: Some("secret".into()),
            ..Default::default()
        };
        let err = merge_config(env, None).err().unwrap();
        assert!(matches!(
            err,
            ConfigError::MissingCredential(env::AWS_ACCESS_KEY_ID)
        ));
    }

    #[test]
    fn test_missing_secret_key() {
        let env = EnvConfig {
            aws_access_key_id: Some("AKIDEXAMPLE".into()),
            ..Default::default()
        };
        let err = merge_config(env, None).err().unwrap();
        assert!(matches!(
            err,
            ConfigError::MissingCredential(env::AWS_SECRET_ACCESS_KEY)
        ));
    }

    #[test]
    fn test_yaml_overrides_env() {
        let mut env = env_with_credentials();
        env.news_country = Some("us".into());
        env.article_limit = Some(2);
        env.language_region = Some("us-east-2".into());

        let yaml = YamlConfig {
            aws: Some(AwsYaml {
                language_region: Some("eu-west-1".into()),
                ..Default::default()
            }),
            news: Some(NewsYaml {
                country: Some("gb".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let config = merge_config(env, Some(yaml)).unwrap();
        assert_eq!(config.news.country, "gb");
        assert_eq!(config.news.article_limit, 2);
        assert_eq!(config.language_region, AwsRegion::EuWest1);
    }

    #[test]
    fn test_credentials_from_yaml_only() {
        let yaml = YamlConfig {
            aws: Some(AwsYaml {
                access_key_id: Some("AKIDYAML".into()),
                secret_access_key: Some("yaml-secret".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = merge_config(EnvConfig::default(), Some(yaml)).unwrap();
        assert_eq!(config.aws_access_key_id, "AKIDYAML");
    }

    #[test]
    fn test_translation_voice_follows_target_language() {
        let yaml = YamlConfig {
            speech: Some(SpeechYaml {
                target_language: Some("ja".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = merge_config(env_with_credentials(), Some(yaml)).unwrap();
        assert_eq!(config.speech.translation_voice, PollyVoice::Mizuki);
    }

    #[test]
    fn test_label_settings() {
        let mut env = env_with_credentials();
        env.max_labels = Some(5);
        env.min_label_confidence = Some(60.0);
        let yaml = YamlConfig {
            images: Some(ImagesYaml {
                min_label_confidence: Some(90.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = merge_config(env, Some(yaml)).unwrap();
        assert_eq!(config.images.max_labels, Some(5));
        assert_eq!(config.images.min_label_confidence, Some(90.0));

        let mut env = env_with_credentials();
        env.max_labels = Some(0);
        let err = merge_config(env, None).err().unwrap();
        assert!(err.to_string().contains(env::MAX_LABELS));

        let mut env = env_with_credentials();
        env.min_label_confidence = Some(101.0);
        let err = merge_config(env, None).err().unwrap();
        assert!(err.to_string().contains(env::MIN_LABEL_CONFIDENCE));
    }

    #[test]
    fn test_unknown_target_language_requires_voice() {
        let mut env = env_with_credentials();
        env.target_language = Some("sw".into());
        let err = merge_config(env, None).err().unwrap();
        assert!(err.to_string().contains(env::TRANSLATION_VOICE));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut env = env_with_credentials();
        env.vision_region = Some("mars-north-1".into());
        assert!(merge_config(env, None).is_err());

        let mut env = env_with_credentials();
        env.article_limit = Some(0);
        assert!(merge_config(env, None).is_err());

        let mut env = env_with_credentials();
        env.audio_format = Some("flac".into());
        assert!(merge_config(env, None).is_err());

        let mut env = env_with_credentials();
        env.polly_engine = Some("turbo".into());
        assert!(merge_config(env, None).is_err());

        let yaml = YamlConfig {
            images: Some(ImagesYaml {
                similarity_threshold: Some(120.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(merge_config(env_with_credentials(), Some(yaml)).is_err());
    }
}
