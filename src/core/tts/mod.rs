//! Amazon Polly text-to-speech.
//!
//! Narrations are synthesized in a single SynthesizeSpeech request and
//! written to disk; nothing is streamed or played back.

pub mod config;
pub mod provider;

pub use config::{MAX_TEXT_LENGTH, PollyEngine, PollyOutputFormat, PollyVoice, SpeechOptions};
pub use provider::SpeechSynthesizer;
