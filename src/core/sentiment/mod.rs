pub mod client;
pub mod types;

pub use client::{MAX_TEXT_BYTES, SentimentAnalyzer};
pub use types::{SentimentReport, SentimentScores};
