use axum::Router;
use axum::routing::{delete, get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::handlers::{self, AppState};
use crate::news::NewsService;
use crate::repository::InMemoryRepository;
use crate::sentiment::SentimentAnalyzer;

/// Main service struct: owns the shared state and builds the HTTP router
#[derive(Clone)]
pub struct FinanceService {
    state: AppState,
    config: Arc<Config>,
}

impl FinanceService {
    pub fn new(config: Arc<Config>) -> Self {
        tracing::info!("Service::new() - Starting initialization");

        let analyzer = Arc::new(SentimentAnalyzer::new());
        let repository = Arc::new(InMemoryRepository::seeded());
        let news = Arc::new(NewsService::from_config(&config.news));
        tracing::info!("Service::new() - Analyzer, mock store and news feed ready");

        Self {
            state: AppState::new(analyzer, repository, news),
            config,
        }
    }

    pub fn from_state(state: AppState, config: Arc<Config>) -> Self {
        Self { state, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(|| async { "ok" }))
            .route("/chat", post(handlers::chat::chat))
            .route("/sentiment/summary", get(handlers::chat::summary))
            .route("/sentiment/history", get(handlers::chat::history))
            .route("/user/:user_id", get(handlers::finance::get_user))
            .route("/portfolio/:user_id", get(handlers::finance::get_portfolio))
            .route("/market-news", get(handlers::news::market_news))
            .route(
                "/watchlist/:user_id",
                get(handlers::finance::get_watchlist).post(handlers::finance::add_to_watchlist),
            )
            .route(
                "/watchlist/:user_id/:symbol",
                delete(handlers::finance::remove_from_watchlist),
            )
            .route(
                "/recommendations/:user_id",
                get(handlers::finance::get_recommendations),
            )
            .route("/rebalance/:user_id", post(handlers::finance::rebalance))
            // The frontend is served from a different origin.
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }
}
