use tracing::info;

use super::Showcase;

impl Showcase {
    /// Print each sample passage with its sentiment, or `None` when the
    /// call failed. Failures never end the stage.
    pub async fn run_sentiment(&self) {
        let language = &self.config.speech.source_language;

        for sample in &self.config.sentiment_samples {
            match self.services.sentiment.try_analyze(sample, language).await {
                Some(report) => println!("{} {}", sample, report),
                None => println!("{} None", sample),
            }
        }

        info!(
            samples = self.config.sentiment_samples.len(),
            "Sentiment stage complete"
        );
    }
}
