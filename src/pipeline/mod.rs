//! The showcase run: news narration, a sentiment batch and image analysis.
//!
//! Each stage awaits one remote call at a time. Service clients are built
//! once from a shared [`AwsSession`] and reused by every stage.

pub mod articles;
pub mod images;
mod sentiment;

use tracing::info;

use crate::config::AppConfig;
use crate::core::aws::AwsSession;
use crate::core::news::NewsClient;
use crate::core::sentiment::SentimentAnalyzer;
use crate::core::translate::Translator;
use crate::core::tts::SpeechSynthesizer;
use crate::core::vision::{FaceComparator, LabelDetector, TextExtractor};
use crate::errors::{ServiceError, ServiceResult};

pub use articles::{ArticleFailure, ArticleReport, audio_file_stem};

/// Stages of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    All,
    News,
    Sentiment,
    Images,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::News => "news",
            Self::Sentiment => "sentiment",
            Self::Images => "images",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Service wrappers used by the stages.
pub struct Services {
    pub synthesizer: SpeechSynthesizer,
    pub translator: Translator,
    pub sentiment: SentimentAnalyzer,
    pub text: TextExtractor,
    pub labels: LabelDetector,
    pub faces: FaceComparator,
}

impl Services {
    /// Build every client from `session`, writing audio to the configured
    /// output directory.
    pub fn from_session(session: &AwsSession, config: &AppConfig) -> Self {
        Self {
            synthesizer: SpeechSynthesizer::new(
                session.polly_client(),
                config.speech.output_dir.clone(),
            ),
            translator: Translator::new(session.translate_client()),
            sentiment: SentimentAnalyzer::new(session.comprehend_client()),
            text: TextExtractor::new(session.textract_client()),
            labels: LabelDetector::from_config(session.rekognition_client(), &config.images),
            faces: FaceComparator::new(session.rekognition_client()),
        }
    }
}

/// Runs the configured stages against the AWS services and the news API.
pub struct Showcase {
    config: AppConfig,
    services: Services,
}

impl Showcase {
    pub fn new(config: AppConfig, services: Services) -> Self {
        Self { config, services }
    }

    /// Build the session and every client from `config`.
    pub fn from_config(config: AppConfig) -> Self {
        let session = AwsSession::from_config(&config);
        let services = Services::from_session(&session, &config);
        Self::new(config, services)
    }

    /// Client for the configured news API.
    ///
    /// Fails with [`ServiceError::NotConfigured`] when no API key is set, so
    /// no request is attempted without one.
    pub fn news_client(&self) -> ServiceResult<NewsClient> {
        let news = &self.config.news;
        let api_key = news
            .api_key
            .as_deref()
            .ok_or(ServiceError::NotConfigured(crate::config::env::NEWS_API_KEY))?;
        NewsClient::new(api_key, &news.api_url, &news.country, news.timeout)
    }

    /// Run `stage`. `Stage::All` runs news, sentiment and images in order.
    pub async fn run(&self, stage: Stage) -> ServiceResult<()> {
        info!(stage = %stage, "Starting run");

        match stage {
            Stage::All => {
                self.run_news().await?;
                self.run_sentiment().await;
                self.run_images().await?;
            }
            Stage::News => {
                self.run_news().await?;
            }
            Stage::Sentiment => self.run_sentiment().await,
            Stage::Images => self.run_images().await?,
        }

        info!(stage = %stage, "Run complete");
        Ok(())
    }
}
