use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use super::{AppState, parse_body};
use crate::chat;
use crate::error::Result;
use crate::models::{ChatRequest, ChatResponse};
use crate::sentiment::{HistoryEntry, HistorySummary};

/// POST /chat
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatResponse>> {
    let req: ChatRequest = parse_body(&body)?;
    let response = chat::respond(&state.analyzer, req.message.as_deref())?;
    tracing::info!(
        sentiment = %response.sentiment_data.sentiment,
        emotions = response.sentiment_data.emotions.len(),
        "chat reply sent"
    );
    Ok(Json(response))
}

/// GET /sentiment/summary
pub async fn summary(State(state): State<AppState>) -> Json<HistorySummary> {
    Json(state.analyzer.summary())
}

/// GET /sentiment/history
pub async fn history(State(state): State<AppState>) -> Json<Vec<HistoryEntry>> {
    Json(state.analyzer.history().entries())
}
