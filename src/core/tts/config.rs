//! Configuration types for Amazon Polly speech synthesis.
//!
//! Defines the voice, engine and output format choices exposed to the
//! article narration pipeline.
//!
//! # Example
//!
//! ```rust
//! use newsreel::core::tts::{PollyOutputFormat, PollyVoice, SpeechOptions};
//!
//! let options = SpeechOptions::new(PollyVoice::Zhiyu).with_format(PollyOutputFormat::Mp3);
//! assert_eq!(options.voice.as_str(), "Zhiyu");
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Polly Engine
// =============================================================================

/// Amazon Polly synthesis engine options.
///
/// When no engine is configured the request omits the field and Polly uses
/// the standard engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollyEngine {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "neural")]
    Neural,
    #[serde(rename = "long-form")]
    LongForm,
    #[serde(rename = "generative")]
    Generative,
}

impl PollyEngine {
    /// Convert to AWS API string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Neural => "neural",
            Self::LongForm => "long-form",
            Self::Generative => "generative",
        }
    }

    /// Parse an engine name, returning `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "neural" => Some(Self::Neural),
            "long-form" | "longform" | "long_form" => Some(Self::LongForm),
            "generative" => Some(Self::Generative),
            _ => None,
        }
    }
}

impl std::fmt::Display for PollyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Polly Output Format
// =============================================================================

/// Audio output formats supported by Amazon Polly.
///
/// Mp3 is the default; narrations are written to disk and never streamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PollyOutputFormat {
    #[default]
    #[serde(rename = "mp3")]
    Mp3,
    #[serde(rename = "ogg_vorbis")]
    OggVorbis,
    /// 16-bit signed little-endian mono
    #[serde(rename = "pcm")]
    Pcm,
}

impl PollyOutputFormat {
    /// Convert to AWS API string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::OggVorbis => "ogg_vorbis",
            Self::Pcm => "pcm",
        }
    }

    /// Extension used for files written in this format.
    #[inline]
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::OggVorbis => "ogg",
            Self::Pcm => "pcm",
        }
    }

    /// Parse from string, with fallback to Mp3.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mp3" | "mpeg" => Self::Mp3,
            "ogg_vorbis" | "ogg" | "vorbis" => Self::OggVorbis,
            "pcm" | "raw" => Self::Pcm,
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for PollyOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Polly Voice
// =============================================================================

/// Amazon Polly voices used for narration.
///
/// Only a handful of voices per supported translation language are named;
/// anything else goes through [`PollyVoice::Custom`]. Full list:
/// https://docs.aws.amazon.com/polly/latest/dg/voicelist.html
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PollyVoice {
    /// US English, male
    #[default]
    Matthew,
    /// US English, female
    Joanna,
    /// British English, female
    Amy,
    /// British English, male
    Brian,
    /// Mandarin Chinese, female
    Zhiyu,
    /// Japanese, female
    Mizuki,
    /// Japanese, male
    Takumi,
    /// French, female
    Lea,
    /// French, male
    Mathieu,
    /// German, female
    Vicki,
    /// German, male
    Hans,
    /// Castilian Spanish, female
    Lucia,
    /// Castilian Spanish, male
    Enrique,

    /// Voice ID not listed above, passed through verbatim
    #[serde(rename = "custom")]
    Custom(String),
}

impl PollyVoice {
    /// Convert to AWS voice ID string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Matthew => "Matthew",
            Self::Joanna => "Joanna",
            Self::Amy => "Amy",
            Self::Brian => "Brian",
            Self::Zhiyu => "Zhiyu",
            Self::Mizuki => "Mizuki",
            Self::Takumi => "Takumi",
            Self::Lea => "Lea",
            Self::Mathieu => "Mathieu",
            Self::Vicki => "Vicki",
            Self::Hans => "Hans",
            Self::Lucia => "Lucia",
            Self::Enrique => "Enrique",
            Self::Custom(id) => id,
        }
    }

    /// Parse from string, with fallback to Custom voice if not recognized.
    ///
    /// Unrecognized names keep their original case since Polly voice IDs
    /// are case-sensitive.
    pub fn from_str_or_default(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "matthew" => Self::Matthew,
            "joanna" => Self::Joanna,
            "amy" => Self::Amy,
            "brian" => Self::Brian,
            "zhiyu" => Self::Zhiyu,
            "mizuki" => Self::Mizuki,
            "takumi" => Self::Takumi,
            "lea" | "léa" => Self::Lea,
            "mathieu" => Self::Mathieu,
            "vicki" => Self::Vicki,
            "hans" => Self::Hans,
            "lucia" => Self::Lucia,
            "enrique" => Self::Enrique,
            _ => Self::Custom(trimmed.to_string()),
        }
    }

    /// Default narration voice for a Translate language code.
    ///
    /// Returns `None` when no voice is known for the language.
    pub fn for_language(code: &str) -> Option<Self> {
        let primary = code.split('-').next().unwrap_or(code).to_lowercase();
        match primary.as_str() {
            "en" => Some(Self::Matthew),
            "zh" => Some(Self::Zhiyu),
            "ja" => Some(Self::Mizuki),
            "fr" => Some(Self::Lea),
            "de" => Some(Self::Vicki),
            "es" => Some(Self::Lucia),
            _ => None,
        }
    }
}

impl std::fmt::Display for PollyVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Request Options
// =============================================================================

/// Maximum text length for SynthesizeSpeech API (characters).
pub const MAX_TEXT_LENGTH: usize = 3000;

/// Per-request synthesis options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpeechOptions {
    pub voice: PollyVoice,
    pub format: PollyOutputFormat,
    /// Engine override; `None` leaves the choice to Polly
    pub engine: Option<PollyEngine>,
}

impl SpeechOptions {
    pub fn new(voice: PollyVoice) -> Self {
        Self {
            voice,
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: PollyOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_engine(mut self, engine: Option<PollyEngine>) -> Self {
        self.engine = engine;
        self
    }
}
