//! Top-headline feed from newsapi.org.
//!
//! https://newsapi.org/docs/endpoints/top-headlines

pub mod client;
pub mod messages;

pub use client::{DEFAULT_NEWS_API_URL, NewsClient};
pub use messages::{Article, ArticleSource, TopHeadlines};
