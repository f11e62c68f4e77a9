use axum::Json;
use axum::extract::State;

use super::AppState;
use crate::models::NewsArticle;

/// GET /market-news
///
/// Always succeeds; feed failures are masked with the bundled headlines.
pub async fn market_news(State(state): State<AppState>) -> Json<Vec<NewsArticle>> {
    Json(state.news.headlines().await)
}
