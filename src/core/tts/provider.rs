//! Amazon Polly speech synthesis.
//!
//! Wraps Polly's SynthesizeSpeech API and writes the resulting audio
//! stream to `<output_dir>/<name>.<ext>`.
//!
//! # API Reference
//!
//! - Service: Amazon Polly
//! - Operation: SynthesizeSpeech
//! - Output formats: mp3, ogg_vorbis, pcm
//! - Max text length: 3000 characters

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use aws_sdk_polly::Client as PollyClient;
use aws_sdk_polly::primitives::ByteStream;
use aws_sdk_polly::types::{Engine, OutputFormat, VoiceId};
use bytes::Bytes;
use tracing::{debug, error, info};

use super::config::{MAX_TEXT_LENGTH, PollyEngine, PollyOutputFormat, PollyVoice, SpeechOptions};
use crate::errors::{ServiceError, ServiceResult};

const SERVICE: &str = "Polly";

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert PollyEngine to AWS SDK Engine type
fn engine_to_sdk(engine: PollyEngine) -> Engine {
    match engine {
        PollyEngine::Standard => Engine::Standard,
        PollyEngine::Neural => Engine::Neural,
        PollyEngine::LongForm => Engine::LongForm,
        PollyEngine::Generative => Engine::Generative,
    }
}

/// Convert PollyOutputFormat to AWS SDK OutputFormat type
fn output_format_to_sdk(format: PollyOutputFormat) -> OutputFormat {
    match format {
        PollyOutputFormat::Mp3 => OutputFormat::Mp3,
        PollyOutputFormat::OggVorbis => OutputFormat::OggVorbis,
        PollyOutputFormat::Pcm => OutputFormat::Pcm,
    }
}

/// Convert PollyVoice to AWS SDK VoiceId
fn voice_to_sdk(voice: &PollyVoice) -> VoiceId {
    VoiceId::from(voice.as_str())
}

// =============================================================================
// Speech Synthesizer
// =============================================================================

/// Synthesizes text with Amazon Polly and stores the audio on disk.
#[derive(Debug)]
pub struct SpeechSynthesizer {
    client: PollyClient,
    output_dir: PathBuf,
    request_counter: AtomicU64,
}

impl SpeechSynthesizer {
    pub fn new(client: PollyClient, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
            request_counter: AtomicU64::new(0),
        }
    }

    /// Path a narration named `name` would be written to.
    pub fn output_path(&self, name: &str, format: PollyOutputFormat) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", name, format.file_extension()))
    }

    /// Synthesize `text` and return the raw audio bytes.
    ///
    /// Empty or oversized text is rejected before the request is sent.
    pub async fn synthesize(&self, text: &str, options: &SpeechOptions) -> ServiceResult<Bytes> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Cannot synthesize empty text".into(),
            ));
        }

        let char_count = text.chars().count();
        if char_count > MAX_TEXT_LENGTH {
            return Err(ServiceError::InvalidInput(format!(
                "Text length {} exceeds maximum {} characters",
                char_count, MAX_TEXT_LENGTH
            )));
        }

        let request_id = self.request_counter.fetch_add(1, Ordering::Relaxed) + 1;

        debug!(
            request_id = request_id,
            text_len = char_count,
            voice = %options.voice,
            format = %options.format,
            "Synthesizing text with Amazon Polly"
        );

        let mut request = self
            .client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_to_sdk(&options.voice))
            .output_format(output_format_to_sdk(options.format));

        if let Some(engine) = options.engine {
            request = request.engine(engine_to_sdk(engine));
        }

        let response = request.send().await.map_err(|e| {
            error!(request_id = request_id, error = %e, "Polly API error");
            ServiceError::aws(SERVICE, e)
        })?;

        let audio_stream: ByteStream = response.audio_stream;
        let audio = audio_stream.collect().await.map_err(|e| {
            error!(request_id = request_id, error = %e, "Failed to read audio stream");
            ServiceError::AudioStream(e.to_string())
        })?;

        let bytes = audio.into_bytes();
        debug!(
            request_id = request_id,
            audio_bytes = bytes.len(),
            "Successfully synthesized audio"
        );

        Ok(bytes)
    }

    /// Synthesize `text` into `<output_dir>/<name>.<ext>` and return the path.
    pub async fn synthesize_to_file(
        &self,
        name: &str,
        text: &str,
        options: &SpeechOptions,
    ) -> ServiceResult<PathBuf> {
        let audio = self.synthesize(text, options).await?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| ServiceError::io(&self.output_dir, e))?;

        let path = self.output_path(name, options.format);
        tokio::fs::write(&path, &audio)
            .await
            .map_err(|e| ServiceError::io(&path, e))?;

        info!(path = %path.display(), bytes = audio.len(), "Wrote synthesized audio");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_conversion() {
        assert!(matches!(engine_to_sdk(PollyEngine::Neural), Engine::Neural));
        assert!(matches!(
            engine_to_sdk(PollyEngine::Standard),
            Engine::Standard
        ));
        assert!(matches!(
            engine_to_sdk(PollyEngine::LongForm),
            Engine::LongForm
        ));
    }

    #[test]
    fn test_output_format_conversion() {
        assert!(matches!(
            output_format_to_sdk(PollyOutputFormat::Mp3),
            OutputFormat::Mp3
        ));
        assert!(matches!(
            output_format_to_sdk(PollyOutputFormat::OggVorbis),
            OutputFormat::OggVorbis
        ));
    }

    #[test]
    fn test_voice_conversion() {
        assert_eq!(voice_to_sdk(&PollyVoice::Zhiyu), VoiceId::Zhiyu);
        assert_eq!(voice_to_sdk(&PollyVoice::Matthew), VoiceId::Matthew);
        assert_eq!(
            voice_to_sdk(&PollyVoice::Custom("Kazuha".into())).as_str(),
            "Kazuha"
        );
    }
}
