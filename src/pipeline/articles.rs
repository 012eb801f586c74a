//! News stage: fetch headlines and narrate each one in two languages.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{error, info, warn};

use super::Showcase;
use crate::core::language::language_name;
use crate::core::news::Article;
use crate::errors::{ServiceError, ServiceResult};

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("static pattern is valid"));

/// File stem for an article's audio: every run of non-word characters
/// becomes one `_`, then the result is lowercased.
///
/// `"Fed Raises Rates!"` becomes `fed_raises_rates_`.
pub fn audio_file_stem(title: &str) -> String {
    NON_WORD.replace_all(title, "_").to_lowercase()
}

/// One article that could not be narrated.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleFailure {
    /// Position in the fetched list
    pub index: usize,
    pub title: Option<String>,
    pub error: String,
}

/// Outcome of the per-article loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleReport {
    /// Articles attempted, including failed ones
    pub processed: usize,
    pub failures: Vec<ArticleFailure>,
}

impl ArticleReport {
    pub fn succeeded(&self) -> usize {
        self.processed - self.failures.len()
    }
}

/// Audio files written for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleAudio {
    pub original: PathBuf,
    pub translated: PathBuf,
}

impl Showcase {
    /// Fetch the top headlines, print the leading articles and narrate them.
    ///
    /// Fetch errors end the stage; per-article errors do not.
    pub async fn run_news(&self) -> ServiceResult<ArticleReport> {
        let client = self.news_client()?;
        let headlines = client.top_headlines().await?;

        let limit = self.config.news.article_limit;
        let leading = &headlines.articles[..headlines.articles.len().min(limit)];
        match serde_json::to_string_pretty(leading) {
            Ok(json) => println!("{}", json),
            Err(e) => warn!(error = %e, "Failed to render articles"),
        }

        let report = self.narrate_articles(&headlines.articles).await;
        info!(
            processed = report.processed,
            failed = report.failures.len(),
            "News stage complete"
        );
        Ok(report)
    }

    /// Narrate the first `article_limit` articles.
    ///
    /// A failing article is logged, printed and recorded in the report; the
    /// loop always moves on to the next one.
    pub async fn narrate_articles(&self, articles: &[Article]) -> ArticleReport {
        let mut report = ArticleReport::default();

        for (index, article) in articles
            .iter()
            .take(self.config.news.article_limit)
            .enumerate()
        {
            report.processed += 1;

            match self.narrate_article(article).await {
                Ok(audio) => {
                    info!(
                        index = index,
                        original = %audio.original.display(),
                        translated = %audio.translated.display(),
                        "Narrated article"
                    );
                }
                Err(e) => {
                    error!(index = index, error = %e, "Failed to narrate article");
                    println!("{}", e);
                    report.failures.push(ArticleFailure {
                        index,
                        title: article.title().map(str::to_string),
                        error: e.to_string(),
                    });
                }
            }
        }

        report
    }

    /// Synthesize the narration, then its translation into
    /// `<stem>_<language>`.
    ///
    /// The stem comes from the title as received, surrounding whitespace
    /// included; the narrated text uses the trimmed title.
    pub async fn narrate_article(&self, article: &Article) -> ServiceResult<ArticleAudio> {
        let (Some(title), Some(text)) = (article.title.as_deref(), article.narration()) else {
            return Err(ServiceError::MissingField {
                service: "News",
                field: "title",
            });
        };

        let speech = &self.config.speech;
        let stem = audio_file_stem(title);

        let original = self
            .services
            .synthesizer
            .synthesize_to_file(&stem, &text, &speech.narration_options())
            .await?;

        let translated_text = self
            .services
            .translator
            .translate(&text, &speech.source_language, &speech.target_language)
            .await?;

        let suffix = language_name(&speech.target_language)
            .map(str::to_string)
            .unwrap_or_else(|| speech.target_language.to_lowercase());
        let translated = self
            .services
            .synthesizer
            .synthesize_to_file(
                &format!("{}_{}", stem, suffix),
                &translated_text,
                &speech.translation_options(),
            )
            .await?;

        Ok(ArticleAudio {
            original,
            translated,
        })
    }
}
