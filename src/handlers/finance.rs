use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::{AppState, parse_body};
use crate::error::{ApiError, Result};
use crate::models::{
    AddWatchlistRequest, MessageResponse, Portfolio, RebalanceResponse, Recommendation, User,
    WatchlistItem,
};

/// GET /user/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>> {
    state
        .repository
        .get_user(&user_id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::user_not_found)
}

/// GET /portfolio/:user_id
pub async fn get_portfolio(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Portfolio>> {
    state
        .repository
        .get_portfolio(&user_id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::user_not_found)
}

/// GET /watchlist/:user_id
pub async fn get_watchlist(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<WatchlistItem>>> {
    state
        .repository
        .get_watchlist(&user_id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::user_not_found)
}

/// POST /watchlist/:user_id
pub async fn add_to_watchlist(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<WatchlistItem>)> {
    // Unknown users are reported before the body is looked at.
    if state.repository.get_watchlist(&user_id).await?.is_none() {
        return Err(ApiError::user_not_found());
    }

    let req: AddWatchlistRequest = parse_body(&body)?;
    let symbol = match req.symbol.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ApiError::BadRequest("Stock symbol not provided".to_string())),
    };

    let item = state.repository.add_to_watchlist(&user_id, symbol).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /watchlist/:user_id/:symbol
pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    Path((user_id, symbol)): Path<(String, String)>,
) -> Result<Json<MessageResponse>> {
    state
        .repository
        .remove_from_watchlist(&user_id, &symbol)
        .await?;
    Ok(Json(MessageResponse {
        message: format!("Stock {} removed from watchlist", symbol.to_uppercase()),
    }))
}

/// GET /recommendations/:user_id
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Recommendation>>> {
    state
        .repository
        .get_recommendations(&user_id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::user_not_found)
}

/// POST /rebalance/:user_id
pub async fn rebalance(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<RebalanceResponse>> {
    let new_portfolio = state.repository.rebalance(&user_id).await?;
    Ok(Json(RebalanceResponse {
        message: "Portfolio rebalanced successfully".to_string(),
        new_portfolio,
    }))
}
