use async_trait::async_trait;
use rand::Rng;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{ApiError, Result};
use crate::mock_data;
use crate::models::{Portfolio, Recommendation, User, WatchlistItem};
use crate::rebalance::{self, round2};

#[cfg(test)]
use mockall::automock;

/// Access to the per-user finance records.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FinanceRepository: Send + Sync + 'static {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;
    async fn get_portfolio(&self, user_id: &str) -> Result<Option<Portfolio>>;
    async fn get_watchlist(&self, user_id: &str) -> Result<Option<Vec<WatchlistItem>>>;
    async fn add_to_watchlist(&self, user_id: &str, symbol: &str) -> Result<WatchlistItem>;
    async fn remove_from_watchlist(&self, user_id: &str, symbol: &str) -> Result<()>;
    async fn get_recommendations(&self, user_id: &str) -> Result<Option<Vec<Recommendation>>>;
    async fn rebalance(&self, user_id: &str) -> Result<Portfolio>;
}

#[derive(Debug, Default)]
struct FinanceData {
    users: HashMap<String, User>,
    portfolios: HashMap<String, Portfolio>,
    watchlists: HashMap<String, Vec<WatchlistItem>>,
    recommendations: HashMap<String, Vec<Recommendation>>,
}

/// Process-local store seeded with the demo records. Nothing is persisted.
pub struct InMemoryRepository {
    data: RwLock<FinanceData>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl InMemoryRepository {
    pub fn seeded() -> Self {
        Self {
            data: RwLock::new(FinanceData {
                users: mock_data::users(),
                portfolios: mock_data::portfolios(),
                watchlists: mock_data::watchlists(),
                recommendations: mock_data::recommendations(),
            }),
        }
    }

    pub fn empty() -> Self {
        Self {
            data: RwLock::new(FinanceData::default()),
        }
    }
}

/// Quote for a newly watched symbol. There is no market feed, so the numbers
/// are random.
pub fn quote_for<R: Rng + ?Sized>(symbol: &str, rng: &mut R) -> WatchlistItem {
    let symbol = symbol.to_uppercase();
    WatchlistItem {
        id: rng.gen_range(100..=1000).to_string(),
        name: format!("{symbol} Inc."),
        symbol,
        current_price: round2(rng.gen_range(100.0..=5000.0)),
        change_amount: round2(rng.gen_range(-50.0..=50.0)),
        change_percentage: round2(rng.gen_range(-5.0..=5.0)),
        has_alert: false,
        price_target: None,
        alert_price: None,
    }
}

#[async_trait]
impl FinanceRepository for InMemoryRepository {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.data.read().await.users.get(user_id).cloned())
    }

    async fn get_portfolio(&self, user_id: &str) -> Result<Option<Portfolio>> {
        Ok(self.data.read().await.portfolios.get(user_id).cloned())
    }

    async fn get_watchlist(&self, user_id: &str) -> Result<Option<Vec<WatchlistItem>>> {
        Ok(self.data.read().await.watchlists.get(user_id).cloned())
    }

    async fn add_to_watchlist(&self, user_id: &str, symbol: &str) -> Result<WatchlistItem> {
        let mut data = self.data.write().await;
        let list = data
            .watchlists
            .get_mut(user_id)
            .ok_or_else(ApiError::user_not_found)?;
        let item = quote_for(symbol, &mut rand::thread_rng());
        list.push(item.clone());
        tracing::info!("Added {} to watchlist for user {}", item.symbol, user_id);
        Ok(item)
    }

    async fn remove_from_watchlist(&self, user_id: &str, symbol: &str) -> Result<()> {
        let mut data = self.data.write().await;
        let list = data
            .watchlists
            .get_mut(user_id)
            .ok_or_else(ApiError::user_not_found)?;
        let before = list.len();
        list.retain(|item| !item.symbol.eq_ignore_ascii_case(symbol));
        if list.len() < before {
            tracing::info!("Removed {} from watchlist for user {}", symbol, user_id);
            Ok(())
        } else {
            Err(ApiError::NotFound(format!(
                "Stock {} not found in watchlist",
                symbol.to_uppercase()
            )))
        }
    }

    async fn get_recommendations(&self, user_id: &str) -> Result<Option<Vec<Recommendation>>> {
        Ok(self.data.read().await.recommendations.get(user_id).cloned())
    }

    async fn rebalance(&self, user_id: &str) -> Result<Portfolio> {
        let mut data = self.data.write().await;
        let risk = data
            .users
            .get(user_id)
            .map(|u| u.profile.risk_tolerance.clone())
            .ok_or_else(ApiError::user_not_found)?;
        let portfolio = data
            .portfolios
            .get_mut(user_id)
            .ok_or_else(ApiError::user_not_found)?;
        rebalance::rebalance(portfolio, &risk, &mut rand::thread_rng());
        tracing::info!(
            "Rebalanced portfolio for user {} ({}), total value now {}",
            user_id,
            risk,
            portfolio.total_value
        );
        Ok(portfolio.clone())
    }
}
