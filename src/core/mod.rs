pub mod aws;
pub mod language;
pub mod news;
pub mod sentiment;
pub mod translate;
pub mod tts;
pub mod vision;

// Re-export commonly used types for convenience
pub use aws::{AwsRegion, AwsSession};
pub use news::{Article, NewsClient, TopHeadlines};
pub use sentiment::{SentimentAnalyzer, SentimentReport, SentimentScores};
pub use translate::Translator;
pub use tts::{PollyEngine, PollyOutputFormat, PollyVoice, SpeechOptions, SpeechSynthesizer};
pub use vision::{FaceComparator, FaceMatch, LabelDetector, TextExtractor};
