pub mod chat;
pub mod config;
pub mod error;
pub mod handlers;
pub mod mock_data;
pub mod models;
pub mod news;
pub mod rebalance;
pub mod repository;
pub mod sentiment;
pub mod service;

pub use crate::config::Config;
pub use crate::error::{ApiError, Result};
pub use crate::sentiment::{SentimentAnalyzer, SentimentResult};
pub use crate::service::FinanceService;
