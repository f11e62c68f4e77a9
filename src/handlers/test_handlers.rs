use super::*;
use crate::config::Config;
use crate::mock_data::DEMO_USER_ID;
use crate::repository::{InMemoryRepository, MockFinanceRepository};
use crate::service::FinanceService;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_service() -> FinanceService {
    let state = AppState::new(
        Arc::new(SentimentAnalyzer::new()),
        Arc::new(InMemoryRepository::seeded()),
        Arc::new(NewsService::offline()),
    );
    FinanceService::from_state(state, Arc::new(Config::default()))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

#[tokio::test]
async fn health_is_ok() {
    let service = test_service();
    assert_eq!(service.config().server.bind, "0.0.0.0:5000");
    let router = service.router();
    let (status, body) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".into()));
}

#[tokio::test]
async fn chat_returns_prefixed_reply_and_sentiment() {
    let router = test_service().router();
    let (status, body) = send(
        &router,
        Method::POST,
        "/chat",
        Some(json!({ "message": "I'm so worried about my debt" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "I understand this is stressful. Let's work through this together. This is a placeholder response."
    );
    assert_eq!(body["sentiment_data"]["sentiment"], "negative");
    assert_eq!(body["sentiment_data"]["emoji"], "😟");
    assert_eq!(body["sentiment_data"]["emotions"], json!(["stressed"]));
}

#[tokio::test]
async fn neutral_chat_message_with_punctuation_has_no_prefix() {
    let service = test_service();
    let router = service.router();
    for message in ["Show me my portfolio!", "What is an index fund?"] {
        let (status, body) = send(&router, Method::POST, "/chat", Some(json!({ "message": message }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "This is a placeholder response.", "{message}");
        assert_eq!(body["sentiment_data"]["sentiment"], "neutral");
        assert_eq!(body["sentiment_data"]["compound"], 0.0);
    }

    let (_, summary) = send(&router, Method::GET, "/sentiment/summary", None).await;
    assert_eq!(summary["neutral"], 2);
    assert_eq!(summary["negative"], 0);
    assert_eq!(summary["overall_mood"], "neutral");
}

#[tokio::test]
async fn empty_chat_message_is_a_client_error() {
    let service = test_service();
    let router = service.router();
    for payload in [Some(json!({ "message": "" })), Some(json!({})), None] {
        let (status, body) = send(&router, Method::POST, "/chat", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No message provided");
    }
    assert!(service.state().analyzer().history().is_empty());
}

#[tokio::test]
async fn malformed_chat_body_is_a_client_error() {
    let router = test_service().router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn summary_tracks_chat_history() {
    let router = test_service().router();
    let (_, body) = send(&router, Method::GET, "/sentiment/summary", None).await;
    assert_eq!(body, json!({ "message": "No conversation history yet." }));

    send(&router, Method::POST, "/chat", Some(json!({ "message": "I'm excited to start investing!" }))).await;
    send(&router, Method::POST, "/chat", Some(json!({ "message": "I'm so worried about my debt" }))).await;

    let (status, body) = send(&router, Method::GET, "/sentiment/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_messages"], 2);
    assert_eq!(body["positive"], 1);
    assert_eq!(body["negative"], 1);

    let (_, history) = send(&router, Method::GET, "/sentiment/history", None).await;
    assert_eq!(history[0]["text"], "I'm excited to start investing!");
    assert_eq!(history[1]["sentiment"], "negative");
}

#[tokio::test]
async fn user_and_portfolio_lookup() {
    let router = test_service().router();
    let (status, body) = send(&router, Method::GET, &format!("/user/{DEMO_USER_ID}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["riskTolerance"], "Moderate-Aggressive");

    let (status, body) = send(&router, Method::GET, "/portfolio/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalValue"], 85420.0);
    assert_eq!(body["assets"][0]["type"], "Index Fund");

    for uri in ["/user/42", "/portfolio/42", "/watchlist/42", "/recommendations/42"] {
        let (status, body) = send(&router, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "User not found");
    }
}

#[tokio::test]
async fn watchlist_crud() {
    let router = test_service().router();

    let (status, item) = send(&router, Method::POST, "/watchlist/1", Some(json!({ "symbol": "infy" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["symbol"], "INFY");
    assert_eq!(item["name"], "INFY Inc.");
    assert_eq!(item["hasAlert"], false);

    let (_, list) = send(&router, Method::GET, "/watchlist/1", None).await;
    assert_eq!(list.as_array().unwrap().len(), 4);

    let (status, body) = send(&router, Method::DELETE, "/watchlist/1/Infy", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Stock INFY removed from watchlist");

    let (status, body) = send(&router, Method::DELETE, "/watchlist/1/infy", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Stock INFY not found in watchlist");
}

#[tokio::test]
async fn watchlist_add_validation_order() {
    let router = test_service().router();

    // unknown user wins over a missing symbol
    let (status, body) = send(&router, Method::POST, "/watchlist/42", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, body) = send(&router, Method::POST, "/watchlist/1", Some(json!({ "symbol": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Stock symbol not provided");
}

#[tokio::test]
async fn rebalance_applies_profile_target() {
    let router = test_service().router();
    let (status, body) = send(&router, Method::POST, "/rebalance/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Portfolio rebalanced successfully");
    let pcts: Vec<f64> = body["new_portfolio"]["allocation"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["percentage"].as_f64().unwrap())
        .collect();
    assert_eq!(pcts, vec![45.0, 22.0, 18.0, 8.0, 7.0]);

    let (status, _) = send(&router, Method::POST, "/rebalance/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn market_news_falls_back_to_bundled_headlines() {
    let router = test_service().router();
    let (status, body) = send(&router, Method::GET, "/market-news", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert!(items[0]["imageAlt"].is_string());
}

#[tokio::test]
async fn repository_errors_surface_as_json() {
    let mut repo = MockFinanceRepository::new();
    repo.expect_get_user()
        .returning(|_| Err(ApiError::Internal("store unavailable".into())));
    let state = AppState::new(
        Arc::new(SentimentAnalyzer::new()),
        Arc::new(repo),
        Arc::new(NewsService::offline()),
    );
    let router = FinanceService::from_state(state, Arc::new(Config::default())).router();

    let (status, body) = send(&router, Method::GET, "/user/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal error: store unavailable");
}

#[test]
fn parse_body_treats_blank_as_default() {
    let req: crate::models::ChatRequest = parse_body(&Bytes::from_static(b"  \n")).unwrap();
    assert!(req.message.is_none());
    assert!(parse_body::<crate::models::ChatRequest>(&Bytes::from_static(b"[")).is_err());
}
