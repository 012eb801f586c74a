//! Shared AWS session.
//!
//! Credentials are resolved once from [`AppConfig`] and every service client
//! is derived from the same session, pinned either to the language-services
//! region (Polly, Translate, Comprehend) or to the vision-services region
//! (Textract, Rekognition).

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_types::SdkConfig;
use tracing::debug;

use super::region::AwsRegion;
use crate::config::AppConfig;

/// Provider name attached to the static credentials
const CREDENTIALS_PROVIDER_NAME: &str = "newsreel";

/// Static credentials plus the two regions the program talks to.
#[derive(Debug, Clone)]
pub struct AwsSession {
    credentials: Credentials,
    language_region: AwsRegion,
    vision_region: AwsRegion,
}

impl AwsSession {
    pub fn new(
        access_key_id: &str,
        secret_access_key: &str,
        session_token: Option<String>,
        language_region: AwsRegion,
        vision_region: AwsRegion,
    ) -> Self {
        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            session_token,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        Self {
            credentials,
            language_region,
            vision_region,
        }
    }

    /// Build the session from the loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.aws_access_key_id,
            &config.aws_secret_access_key,
            config.aws_session_token.clone(),
            config.language_region,
            config.vision_region,
        )
    }

    /// SDK configuration for an arbitrary region using this session's credentials.
    pub fn sdk_config(&self, region: AwsRegion) -> SdkConfig {
        debug!(region = %region, "Building AWS SDK config");
        SdkConfig::builder()
            .region(region.to_sdk())
            .credentials_provider(SharedCredentialsProvider::new(self.credentials.clone()))
            .behavior_version(BehaviorVersion::latest())
            .build()
    }

    pub fn polly_client(&self) -> aws_sdk_polly::Client {
        aws_sdk_polly::Client::new(&self.sdk_config(self.language_region))
    }

    pub fn translate_client(&self) -> aws_sdk_translate::Client {
        aws_sdk_translate::Client::new(&self.sdk_config(self.language_region))
    }

    pub fn comprehend_client(&self) -> aws_sdk_comprehend::Client {
        aws_sdk_comprehend::Client::new(&self.sdk_config(self.language_region))
    }

    pub fn textract_client(&self) -> aws_sdk_textract::Client {
        aws_sdk_textract::Client::new(&self.sdk_config(self.vision_region))
    }

    pub fn rekognition_client(&self) -> aws_sdk_rekognition::Client {
        aws_sdk_rekognition::Client::new(&self.sdk_config(self.vision_region))
    }
}
