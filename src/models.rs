use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentResult;

// Mock finance records. Field names follow the frontend's camelCase JSON.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: String,
    pub risk_tolerance: String,
    pub time_horizon: String,
    pub investment_goal: String,
    pub experience: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile: UserProfile,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Change {
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AllocationSlice {
    pub name: String,
    pub percentage: f64,
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub shares: f64,
    pub current_price: f64,
    pub market_value: f64,
    pub gain_loss: f64,
    pub change_percentage: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub total_value: f64,
    pub daily_change: Change,
    pub overall_return: Change,
    pub allocation: Vec<AllocationSlice>,
    pub assets: Vec<Asset>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub change_amount: f64,
    pub change_percentage: f64,
    pub has_alert: bool,
    pub price_target: Option<f64>,
    pub alert_price: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub summary: Option<String>,
    pub source: String,
    pub category: String,
    pub sentiment: String,
    pub timestamp: String,
    pub image: Option<String>,
    pub image_alt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct AllocationShift {
    pub current: f64,
    pub recommended: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedImpact {
    pub return_increase: f64,
    pub risk_change: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub allocation: AllocationShift,
    pub expected_impact: ExpectedImpact,
    pub last_updated: String,
}

// Request / response bodies

#[derive(Debug, Deserialize, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub sentiment_data: SentimentResult,
}

#[derive(Debug, Deserialize, Default)]
pub struct AddWatchlistRequest {
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RebalanceResponse {
    pub message: String,
    pub new_portfolio: Portfolio,
}
