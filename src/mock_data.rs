//! Seed records for the in-memory stores and the offline news feed.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::models::{
    AllocationShift, AllocationSlice, Asset, Change, ExpectedImpact, NewsArticle, Portfolio,
    Recommendation, User, UserProfile, WatchlistItem,
};

pub const DEMO_USER_ID: &str = "1";

pub(crate) fn slice(name: &str, percentage: f64, color: &str) -> AllocationSlice {
    AllocationSlice {
        name: name.to_string(),
        percentage,
        color: color.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn asset(
    id: &str,
    symbol: &str,
    name: &str,
    shares: f64,
    current_price: f64,
    market_value: f64,
    gain_loss: f64,
    change_percentage: f64,
    kind: &str,
) -> Asset {
    Asset {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        shares,
        current_price,
        market_value,
        gain_loss,
        change_percentage,
        kind: kind.to_string(),
    }
}

pub fn users() -> HashMap<String, User> {
    let user = User {
        id: DEMO_USER_ID.to_string(),
        name: "Student Investor".to_string(),
        email: "student@example.com".to_string(),
        profile: UserProfile {
            age: "20-24".to_string(),
            risk_tolerance: "Moderate-Aggressive".to_string(),
            time_horizon: "8-10 years".to_string(),
            investment_goal: "Education + Early Wealth".to_string(),
            experience: "Beginner/Intermediate".to_string(),
        },
    };
    HashMap::from([(DEMO_USER_ID.to_string(), user)])
}

pub fn portfolios() -> HashMap<String, Portfolio> {
    let portfolio = Portfolio {
        total_value: 85420.0,
        daily_change: Change {
            amount: 1250.0,
            percentage: 1.48,
        },
        overall_return: Change {
            amount: 12420.0,
            percentage: 17.02,
        },
        allocation: vec![
            slice("Index Funds", 40.0, "#4F46E5"),
            slice("Mutual Funds", 25.0, "#10B981"),
            slice("ETFs", 20.0, "#F59E0B"),
            slice("Stocks", 10.0, "#8B5CF6"),
            slice("Gold/SGBs", 5.0, "#EC4899"),
        ],
        assets: vec![
            asset("1", "NIFTY50", "UTI Nifty 50 Index Fund", 245.5, 142.35, 34950.0, 4850.0, 1.62, "Index Fund"),
            asset("2", "PPFAS", "Parag Parikh Flexi Cap Fund", 312.8, 68.50, 21420.0, 3280.0, 0.95, "Mutual Fund"),
            asset("3", "GOLDBEES", "Nippon India Gold ETF", 75.0, 56.80, 4260.0, 520.0, 0.42, "ETF"),
            asset("4", "INFY", "Infosys Ltd.", 5.0, 1485.60, 7428.0, -340.0, -1.15, "Stock"),
            asset("5", "HDFC", "HDFC Balanced Advantage Fund", 425.2, 40.75, 17330.0, 2890.0, 1.28, "Mutual Fund"),
            asset("6", "TATA", "Tata Digital India Fund", 85.5, 42.10, 3600.0, 720.0, 2.35, "Mutual Fund"),
        ],
    };
    HashMap::from([(DEMO_USER_ID.to_string(), portfolio)])
}

pub fn watchlists() -> HashMap<String, Vec<WatchlistItem>> {
    let item = |id: &str,
                symbol: &str,
                name: &str,
                current_price: f64,
                change_amount: f64,
                change_percentage: f64,
                has_alert: bool,
                price_target: Option<f64>,
                alert_price: Option<f64>| WatchlistItem {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        current_price,
        change_amount,
        change_percentage,
        has_alert,
        price_target,
        alert_price,
    };
    let list = vec![
        item("1", "TCS", "Tata Consultancy Services", 4125.50, 45.20, 1.11, true, Some(4500.0), Some(4000.0)),
        item("2", "RELIANCE", "Reliance Industries Ltd.", 2485.75, -18.25, -0.73, false, Some(2700.0), None),
        item("3", "HDFCBANK", "HDFC Bank Ltd.", 1685.60, 22.40, 1.35, true, Some(1800.0), Some(1600.0)),
    ];
    HashMap::from([(DEMO_USER_ID.to_string(), list)])
}

pub fn recommendations() -> HashMap<String, Vec<Recommendation>> {
    let rec = |id: &str,
               kind: &str,
               title: &str,
               description: &str,
               priority: &str,
               shift: (f64, f64),
               impact: (f64, &str),
               last_updated: &str| Recommendation {
        id: id.to_string(),
        kind: kind.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority: priority.to_string(),
        status: "pending".to_string(),
        allocation: AllocationShift {
            current: shift.0,
            recommended: shift.1,
        },
        expected_impact: ExpectedImpact {
            return_increase: impact.0,
            risk_change: impact.1.to_string(),
        },
        last_updated: last_updated.to_string(),
    };
    let list = vec![
        rec(
            "1",
            "increase_exposure",
            "Boost Your SIP Amount",
            "You're saving ₹3,000/month. Increasing to ₹5,000 could grow your corpus by ₹2.5L extra over 8 years with compounding.",
            "medium",
            (3000.0, 5000.0),
            (2.5, "Same"),
            "1 hour ago",
        ),
        rec(
            "2",
            "diversify",
            "Add International Exposure",
            "Consider Motilal Oswal Nasdaq 100 ETF for global diversification. Young investors benefit from higher equity allocation.",
            "low",
            (0.0, 10.0),
            (1.8, "Slightly Higher"),
            "1 day ago",
        ),
        rec(
            "3",
            "rebalance",
            "Lock in Gains from IT Sector",
            "Your Tata Digital India Fund is up 25%. Consider booking partial profits and moving to index funds for stability.",
            "high",
            (15.0, 10.0),
            (-0.5, "Lower"),
            "3 hours ago",
        ),
    ];
    HashMap::from([(DEMO_USER_ID.to_string(), list)])
}

/// Offline headlines, timestamped relative to `now`.
pub fn news(now: DateTime<Utc>) -> Vec<NewsArticle> {
    let article = |id: &str,
                   title: &str,
                   summary: &str,
                   source: &str,
                   category: &str,
                   age: Duration,
                   image: &str,
                   image_alt: &str| NewsArticle {
        id: id.to_string(),
        title: title.to_string(),
        summary: Some(summary.to_string()),
        source: source.to_string(),
        category: category.to_string(),
        sentiment: "positive".to_string(),
        timestamp: (now - age).to_rfc3339(),
        image: Some(image.to_string()),
        image_alt: image_alt.to_string(),
    };
    vec![
        article(
            "1",
            "RBI Holds Repo Rate Steady at 6.5%, Signals Positive Growth",
            "Reserve Bank of India maintains accommodative stance amid strong GDP growth projections for FY26, beneficial for equity markets.",
            "Economic Times",
            "economy",
            Duration::minutes(30),
            "https://images.unsplash.com/photo-1633059050703-0f1b50828402",
            "Reserve Bank of India building exterior",
        ),
        article(
            "2",
            "Nifty 50 Hits New All-Time High on IT & Banking Rally",
            "Indian benchmark index crosses 25,000 mark as IT giants report strong quarterly results and FII inflows continue.",
            "Moneycontrol",
            "stocks",
            Duration::hours(1),
            "https://images.unsplash.com/photo-1726585554553-23c7d72ef47e",
            "Stock market charts showing upward trend",
        ),
        article(
            "3",
            "Gold Prices Rise as Festival Season Approaches",
            "Sovereign Gold Bonds see increased interest from young investors as gold touches ₹75,000/10g ahead of Diwali.",
            "Mint",
            "markets",
            Duration::minutes(90),
            "https://images.unsplash.com/photo-1726731782158-fcf6822b6ca4",
            "Gold bars and coins representing precious metals investment",
        ),
        article(
            "4",
            "Mutual Fund SIP Inflows Cross ₹25,000 Crore Monthly",
            "Retail investors continue to show strong faith in systematic investment plans, with equity funds seeing highest inflows.",
            "AMFI India",
            "markets",
            Duration::hours(2),
            "https://images.unsplash.com/photo-1643616997533-b2765f43011d",
            "Growth chart representing mutual fund investments",
        ),
    ]
}
