//! Response payloads of the news API.

use serde::{Deserialize, Serialize};

/// Publisher of an article.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One headline from the feed.
///
/// Only `title` and `description` feed the narration; the remaining fields
/// are kept for printing. The API sends `null` for missing values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Article {
    /// Title with surrounding whitespace removed, if non-empty.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Text read aloud for this article: `"<title>... <description>"`.
    ///
    /// Falls back to the bare title when there is no description.
    pub fn narration(&self) -> Option<String> {
        let title = self.title()?;
        match self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
        {
            Some(description) => Some(format!("{}... {}", title, description)),
            None => Some(title.to_string()),
        }
    }
}

/// Body of a successful `top-headlines` response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHeadlines {
    pub status: String,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Body the API returns with `"status": "error"`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub(crate) fn describe(&self) -> String {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (None, Some(message)) => message.clone(),
            (Some(code), None) => code.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: Option<&str>, description: Option<&str>) -> Article {
        Article {
            title: title.map(String::from),
            description: description.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_narration_joins_title_and_description() {
        let a = article(Some("Fed Raises Rates!"), Some("Markets react."));
        assert_eq!(a.narration().as_deref(), Some("Fed Raises Rates!... Markets react."));
    }

    #[test]
    fn test_narration_without_description() {
        let a = article(Some("Storm warning"), None);
        assert_eq!(a.narration().as_deref(), Some("Storm warning"));
        let a = article(Some("Storm warning"), Some("   "));
        assert_eq!(a.narration().as_deref(), Some("Storm warning"));
    }

    #[test]
    fn test_narration_requires_title() {
        assert_eq!(article(None, Some("body")).narration(), None);
        assert_eq!(article(Some("  "), Some("body")).narration(), None);
    }

    #[test]
    fn test_deserialize_headlines_with_nulls() {
        let body = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": {"id": null, "name": "Example News"},
                    "author": null,
                    "title": "First",
                    "description": null,
                    "url": "https://example.com/1",
                    "urlToImage": null,
                    "publishedAt": "2024-01-01T00:00:00Z",
                    "content": null
                },
                {"title": "Second", "description": "More"}
            ]
        }"#;

        let headlines: TopHeadlines = serde_json::from_str(body).unwrap();
        assert_eq!(headlines.total_results, 2);
        assert_eq!(headlines.articles.len(), 2);
        assert_eq!(headlines.articles[0].description, None);
        assert_eq!(
            headlines.articles[0].source.as_ref().and_then(|s| s.name.as_deref()),
            Some("Example News")
        );
        assert_eq!(
            headlines.articles[0].published_at.as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_api_error_description() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"status":"error","code":"apiKeyInvalid","message":"Bad key"}"#)
                .unwrap();
        assert_eq!(body.describe(), "apiKeyInvalid: Bad key");
    }
}
