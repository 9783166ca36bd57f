//! HTTP API integration tests.
//!
//! These drive the full router in-process with `tower::ServiceExt::oneshot`;
//! no network or external services are required.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use content_forge::api::{create_router, AppState};
use content_forge::config::Config;

fn test_app() -> Router {
    let state = AppState::new(Config::default());
    state.set_ready(true);
    create_router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn service_info_lists_endpoints() {
    let (status, body) = get(test_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert!(body["endpoints"]["POST /api/v1/generate/carousel"].is_string());
}

#[tokio::test]
async fn industries_include_known_verticals() {
    let (status, body) = get(test_app(), "/api/v1/industries").await;

    assert_eq!(status, StatusCode::OK);
    let industries: Vec<String> = body["industries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();

    assert!(industries.contains(&"ecommerce".to_string()));
    assert!(industries.contains(&"saas".to_string()));
    assert!(industries.contains(&"general".to_string()));
}

#[tokio::test]
async fn default_brand_is_listed() {
    let (status, body) = get(test_app(), "/api/v1/brands").await;

    assert_eq!(status, StatusCode::OK);
    let brands = body["brands"].as_array().unwrap();
    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0]["name"], "Default Brand");
    assert_eq!(brands[0]["industry"], "ecommerce");
}

#[tokio::test]
async fn create_brand_then_generate_for_it() {
    let state = AppState::new(Config::default());
    state.set_ready(true);

    let (status, body) = post(
        create_router(state.clone()),
        "/api/v1/brands",
        json!({
            "name": "BlazeIgnite",
            "industry": "marketing",
            "voice": "professional",
            "target_audience": "entrepreneurs",
            "content_pillars": ["email marketing", "automation"],
            "posting_frequency": 5
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["brand"]["voice"], "professional");

    let (status, body) = post(
        create_router(state.clone()),
        "/api/v1/generate/single",
        json!({ "brand_name": "BlazeIgnite", "topic": "automation" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"]["brand_voice"], "professional");
    assert_eq!(
        body["content"]["best_posting_time"],
        "Monday/Wednesday 8:00 AM or 6:00 PM"
    );
}

#[tokio::test]
async fn duplicate_brand_is_conflict() {
    let state = AppState::new(Config::default());
    state.set_ready(true);

    let req = json!({
        "name": "Acme",
        "content_pillars": ["tips"]
    });

    let (status, _) = post(create_router(state.clone()), "/api/v1/brands", req.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(create_router(state), "/api/v1/brands", req).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn carousel_generation_happy_path() {
    let (status, body) = post(
        test_app(),
        "/api/v1/generate/carousel",
        json!({
            "topic": "email marketing",
            "industry": "ecommerce",
            "brand_voice": "friendly",
            "num_slides": 7,
            "template": "tips"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let content = &body["content"];
    assert_eq!(content["content_type"], "carousel");
    assert_eq!(content["slides"].as_array().unwrap().len(), 7);
    assert_eq!(content["brand_voice"], "friendly");

    let score = content["engagement_score"].as_u64().unwrap();
    assert!(score <= 100);

    let hashtags = content["hashtags"].as_array().unwrap();
    assert!(hashtags
        .iter()
        .any(|t| t.as_str().unwrap() == "#emailmarketing"));
}

#[tokio::test]
async fn carousel_defaults_apply_to_empty_body() {
    let (status, body) = post(test_app(), "/api/v1/generate/carousel", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    // Default topic, template, and slide count.
    assert_eq!(body["content"]["slides"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn carousel_slide_count_is_clamped() {
    let (status, body) = post(
        test_app(),
        "/api/v1/generate/carousel",
        json!({ "topic": "seo", "num_slides": 50 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let slides = body["content"]["slides"].as_array().unwrap();
    assert!(slides.len() <= 10);
}

#[tokio::test]
async fn blank_topic_is_rejected() {
    let (status, body) = post(
        test_app(),
        "/api/v1/generate/carousel",
        json!({ "topic": "   " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn caption_generation_returns_caption_and_hashtags() {
    let (status, body) = post(
        test_app(),
        "/api/v1/generate/caption",
        json!({ "topic": "meal prep", "industry": "food" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["caption"].as_str().unwrap().contains("meal prep"));
    assert!(!body["hashtags"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn hashtag_sets_are_numbered() {
    let (status, body) = post(
        test_app(),
        "/api/v1/generate/hashtags",
        json!({ "topic": "workout", "industry": "fitness", "num_sets": 3 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let sets = body["hashtag_sets"].as_array().unwrap();
    assert_eq!(sets.len(), 3);

    for (i, set) in sets.iter().enumerate() {
        assert_eq!(set["set_number"].as_u64().unwrap(), i as u64 + 1);
        let count = set["count"].as_u64().unwrap() as usize;
        assert_eq!(set["hashtags"].as_array().unwrap().len(), count);
    }
}

#[tokio::test]
async fn calendar_produces_weeks_times_posts_entries() {
    let (status, body) = post(
        test_app(),
        "/api/v1/generate/calendar",
        json!({
            "brand_name": "Acme",
            "industry": "saas",
            "weeks": 2,
            "posts_per_week": 3
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let calendar = body["calendar"].as_array().unwrap();
    assert_eq!(calendar.len(), 6);

    for entry in calendar {
        assert_eq!(entry["content_type"], "carousel");
        assert_eq!(entry["date"].as_str().unwrap().len(), 10);
        assert!(!entry["hashtags"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn calendar_rejects_zero_weeks() {
    let (status, body) = post(
        test_app(),
        "/api/v1/generate/calendar",
        json!({ "weeks": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn single_post_for_unknown_brand_is_404() {
    let (status, body) = post(
        test_app(),
        "/api/v1/generate/single",
        json!({ "brand_name": "Nobody", "topic": "seo" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Nobody"));
}

#[tokio::test]
async fn analyze_returns_insights() {
    let (status, body) = post(
        test_app(),
        "/api/v1/analyze",
        json!({
            "history": [
                { "topic": "email marketing", "engagement_score": 82 },
                { "topic": "seo", "engagement_score": 64 }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["insights"]["total_posts"], 2);
    assert_eq!(body["insights"]["best_performing_topic"], "email marketing");
    assert_eq!(body["insights"]["average_engagement_score"], 73.0);
}

#[tokio::test]
async fn analyze_empty_history_is_rejected() {
    let (status, body) = post(test_app(), "/api/v1/analyze", json!({ "history": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn status_reports_generation_totals() {
    let state = AppState::new(Config::default());
    state.set_ready(true);

    let (status, _) = post(
        create_router(state.clone()),
        "/api/v1/generate/carousel",
        json!({ "topic": "seo" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(create_router(state), "/api/v1/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["stats"]["carousels_generated"], 1);
}
