//! Vision client behaviour against a mock completions endpoint

use crate::common::TestDatabase;
use resale_catalog::config::{Config, VisionConfig};
use resale_catalog::core::models::Rank;
use resale_catalog::core::vision::{ImageAnalyzer, VisionClient};
use resale_catalog::server::AppState;
use resale_catalog::storage::{ImageStore, StorageLayer};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(content: Value) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content.to_string() },
            "finish_reason": "stop"
        }]
    })
}

fn vision_config(server: &MockServer) -> VisionConfig {
    VisionConfig {
        api_key: Some("sk-integration".to_string()),
        api_base: server.uri(),
        timeout: 5,
        ..VisionConfig::default()
    }
}

async fn image_store(dir: &TempDir, filenames: &[&str]) -> Arc<ImageStore> {
    let images = Arc::new(ImageStore::new(dir.path()).await.unwrap());
    for filename in filenames {
        images.store(filename, b"\xFF\xD8\xFFimage").await.unwrap();
    }
    images
}

#[tokio::test]
async fn test_response_missing_level_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "title": ["Cashmere scarf"],
            "category": "Accessories > Scarves",
            "condition": "Good"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let images = image_store(&dir, &["S1_a.jpg"]).await;
    let client = VisionClient::new(vision_config(&server), images).unwrap();

    let result = client.analyze("S1", &["S1_a.jpg".to_string()]).await;
    assert!(result.is_degraded());
    assert_eq!(result.level, Rank::B);
    assert!(result.titles.is_empty());
    assert!(result.category.is_empty());
}

#[tokio::test]
async fn test_malformed_content_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "I cannot help with that." } }]
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let images = image_store(&dir, &["S2_a.jpg"]).await;
    let client = VisionClient::new(vision_config(&server), images).unwrap();

    assert!(client.try_analyze("S2", &["S2_a.jpg".to_string()]).await.is_err());
    let result = client.analyze("S2", &["S2_a.jpg".to_string()]).await;
    assert_eq!(result.level, Rank::B);
}

#[tokio::test]
async fn test_batch_run_through_vision_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "title": ["Canvas tote bag natural", "Natural canvas tote"],
            "category": "Bags > Totes",
            "level": "A",
            "measurement": "W40 x H35cm",
            "condition": "Very good",
            "shop1": "Mercari"
        }))))
        .expect(2)
        .mount(&server)
        .await;

    let database = TestDatabase::new().await;
    database.product("T1", &["T1_a.jpg"]).await;
    database.product("T2", &["T2_a.jpg", "T2_b.jpg"]).await;
    database.product("T3", &[]).await;

    let dir = TempDir::new().unwrap();
    let images = image_store(&dir, &["T1_a.jpg", "T2_a.jpg", "T2_b.jpg"]).await;

    let mut config = Config::default();
    config.catalog.vision = vision_config(&server);
    config.catalog.batch.item_delay_ms = 0;
    let storage = StorageLayer::from_parts(database.db_arc(), images);
    let state = AppState::new(config, storage).unwrap();

    let ids: Vec<String> = ["T1", "T2", "T3"].iter().map(|s| s.to_string()).collect();
    let run = database.db().create_work_process(None, &ids).await.unwrap();

    let summary = state
        .runner
        .spawn(run.id)
        .await
        .unwrap()
        .handle
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.analyzed, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.degraded, 0);

    let t2 = database.db().get_latest_product("T2").await.unwrap();
    assert_eq!(t2.title.as_deref(), Some("Canvas tote bag natural"));
    assert_eq!(t2.category.as_deref(), Some("Bags > Totes"));
    assert_eq!(t2.shop1.as_deref(), Some("Mercari"));

    let finished = database.db().get_work_process(run.id).await.unwrap();
    assert!(finished.finished);
    assert_eq!(finished.finished_products, 3);
}

#[tokio::test]
async fn test_unreachable_endpoint_falls_back() {
    let dir = TempDir::new().unwrap();
    let images = image_store(&dir, &["N1_a.jpg"]).await;
    let config = VisionConfig {
        api_key: Some("sk-integration".to_string()),
        api_base: "http://127.0.0.1:9".to_string(),
        timeout: 1,
        ..VisionConfig::default()
    };
    let client = VisionClient::new(config, images).unwrap();

    let result = client.analyze("N1", &["N1_a.jpg".to_string()]).await;
    assert!(result.is_degraded());
}
