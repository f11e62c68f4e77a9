/// HTTP handlers for the chat, sentiment and mock finance endpoints
pub mod chat;
pub mod finance;
pub mod news;

#[cfg(test)]
mod test_handlers;

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::news::NewsService;
use crate::repository::FinanceRepository;
use crate::sentiment::SentimentAnalyzer;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub(crate) analyzer: Arc<SentimentAnalyzer>,
    pub(crate) repository: Arc<dyn FinanceRepository>,
    pub(crate) news: Arc<NewsService>,
}

impl AppState {
    pub fn new(
        analyzer: Arc<SentimentAnalyzer>,
        repository: Arc<dyn FinanceRepository>,
        news: Arc<NewsService>,
    ) -> Self {
        Self {
            analyzer,
            repository,
            news,
        }
    }

    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }
}

/// Lenient JSON body: an empty body reads as `T::default()` so that handlers
/// can answer "field missing" instead of a generic extractor rejection.
pub(crate) fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))
}
