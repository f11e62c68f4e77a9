use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::config::NewsConfig;
use crate::error::{ApiError, Result};
use crate::mock_data;
use crate::models::NewsArticle;

#[cfg(test)]
use mockall::automock;

/// Placeholder shipped in the default config; no request is made while it is set.
pub const PLACEHOLDER_NEWS_API_KEY: &str = "YOUR_NEWS_API_KEY";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn top_headlines(&self) -> Result<Vec<NewsArticle>>;
}

// NewsAPI wire format, only the fields the frontend needs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeadlinesResponse {
    status: String,
    #[serde(default)]
    articles: Vec<RawArticle>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(default)]
    source: RawSource,
    title: Option<String>,
    description: Option<String>,
    url_to_image: Option<String>,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawSource {
    name: Option<String>,
}

impl RawArticle {
    fn into_article(self, index: usize) -> NewsArticle {
        let title = self.title.unwrap_or_default();
        NewsArticle {
            id: index.to_string(),
            image_alt: title.clone(),
            title,
            summary: self.description,
            source: self.source.name.unwrap_or_default(),
            category: "business".to_string(),
            sentiment: "neutral".to_string(),
            timestamp: self.published_at.unwrap_or_default(),
            image: self.url_to_image,
        }
    }
}

pub struct NewsApiSource {
    client: Client,
    config: NewsConfig,
}

impl NewsApiSource {
    pub fn new(config: NewsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    async fn top_headlines(&self) -> Result<Vec<NewsArticle>> {
        let body: HeadlinesResponse = self
            .client
            .get(self.config.base_url.as_str())
            .query(&[
                ("country", self.config.country.as_str()),
                ("category", self.config.category.as_str()),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        if body.status != "ok" {
            return Err(ApiError::Upstream(format!(
                "news feed returned status '{}': {}",
                body.status,
                body.message.unwrap_or_default()
            )));
        }

        Ok(body
            .articles
            .into_iter()
            .enumerate()
            .map(|(i, a)| a.into_article(i))
            .collect())
    }
}

/// Headlines for the dashboard. Live data is used only when a real key is
/// configured; any failure falls back to the bundled headlines and is never
/// reported to the caller.
pub struct NewsService {
    source: Option<Arc<dyn NewsSource>>,
}

impl NewsService {
    pub fn new(source: Option<Arc<dyn NewsSource>>) -> Self {
        Self { source }
    }

    pub fn offline() -> Self {
        Self { source: None }
    }

    pub fn from_config(config: &NewsConfig) -> Self {
        if !config.has_live_key() {
            tracing::info!("No news API key configured - serving bundled headlines");
            return Self::offline();
        }
        match NewsApiSource::new(config.clone()) {
            Ok(source) => Self::new(Some(Arc::new(source))),
            Err(e) => {
                tracing::warn!("Failed to build news client: {} - serving bundled headlines", e);
                Self::offline()
            }
        }
    }

    pub async fn headlines(&self) -> Vec<NewsArticle> {
        let Some(source) = &self.source else {
            return mock_data::news(chrono::Utc::now());
        };
        match source.top_headlines().await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!("Error fetching news: {} - falling back to bundled headlines", e);
                mock_data::news(chrono::Utc::now())
            }
        }
    }
}
