use serde::Serialize;

/// Confidence Comprehend assigns to each sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentScores {
    pub positive: f32,
    pub negative: f32,
    pub neutral: f32,
    pub mixed: f32,
}

/// Sentiment classification of one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    /// POSITIVE, NEGATIVE, NEUTRAL or MIXED
    pub sentiment: String,
    pub scores: SentimentScores,
}

impl std::fmt::Display for SentimentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (positive {:.4}, negative {:.4}, neutral {:.4}, mixed {:.4})",
            self.sentiment,
            self.scores.positive,
            self.scores.negative,
            self.scores.neutral,
            self.scores.mixed
        )
    }
}
