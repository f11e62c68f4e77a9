//! Chat replies: an empathetic prefix from the sentiment pipeline followed by
//! a canned, keyword-routed answer.

use crate::error::{ApiError, Result};
use crate::models::ChatResponse;
use crate::sentiment::SentimentAnalyzer;

pub const FALLBACK_REPLY: &str = "This is a placeholder response.";

/// (keyword, reply), checked in order against the lowercased message.
pub const REPLY_ROUTES: [(&str, &str); 3] = [
    ("help", "I am here to help you with your finances."),
    ("balance", "I can help you check your balance."),
    ("budget", "Let's talk about your budget."),
];

pub fn route_reply(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    REPLY_ROUTES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

/// Run one message through the pipeline. Missing or empty messages are
/// rejected before anything is scored or recorded.
pub fn respond(analyzer: &SentimentAnalyzer, message: Option<&str>) -> Result<ChatResponse> {
    let message = match message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(ApiError::BadRequest("No message provided".to_string())),
    };

    let sentiment_data = analyzer.analyze(message);
    let prefix = analyzer.empathetic_prefix(&sentiment_data);
    let reply = route_reply(message);

    Ok(ChatResponse {
        response: format!("{prefix}{reply}"),
        sentiment_data,
    })
}
