//! Review workflow: titles, categories, deletion

use crate::common::TestApp;
use crate::common::analyzer::sample_analysis;
use actix_web::{test, web};
use resale_catalog::core::models::CategoryRow;
use resale_catalog::server::create_app;
use serde_json::{Value, json};

async fn analyzed_product(app: &TestApp, management_number: &str, title: &str) {
    let images = [format!("{}_1.jpg", management_number)];
    let image_refs: Vec<&str> = images.iter().map(String::as_str).collect();
    app.database.product(management_number, &image_refs).await;
    app.database
        .db()
        .update_latest_product(management_number, &sample_analysis(title).to_update())
        .await
        .unwrap();
}

fn category_rows() -> Vec<CategoryRow> {
    let row = |levels: &[&str], code: &str| CategoryRow {
        levels: levels.iter().map(|s| s.to_string()).collect(),
        code: code.to_string(),
    };
    vec![
        row(&["Fashion", "Women", "Coats"], "FWC"),
        row(&["Fashion", "Women", "Bags"], "FWB"),
        row(&["Fashion", "Men", "Shoes"], "FMS"),
        row(&["Watches", "Men"], "WM"),
    ]
}

#[actix_web::test]
async fn test_select_title_is_idempotent_and_validated() {
    let app = TestApp::new().await;
    analyzed_product(&app, "P100", "Wool coat").await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let req = test::TestRequest::get()
        .uri("/products/P100/candidate-titles")
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["managementNumber"], "P100");
    assert_eq!(body["candidateTitles"], json!(["Wool coat", "Wool coat (alt)"]));

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/products/P100/select-title")
            .set_json(json!({ "title": "Wool coat (alt)" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&service, req).await;
        assert_eq!(body["title"], "Wool coat (alt)");
    }

    let req = test::TestRequest::post()
        .uri("/products/P100/select-title")
        .set_json(json!({ "title": "Something else" }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), 400);

    let product = app.database.db().get_latest_product("P100").await.unwrap();
    assert_eq!(product.title.as_deref(), Some("Wool coat (alt)"));
}

#[actix_web::test]
async fn test_category_picker_accumulates_path() {
    let app = TestApp::new().await;
    app.state.categories.seed(&category_rows()).await.unwrap();
    app.database.product("C100", &["C100_1.jpg"]).await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let req = test::TestRequest::get()
        .uri("/categories/top-level")
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["options"], json!(["Fashion", "Watches"]));

    let req = test::TestRequest::post()
        .uri("/categories/level/1")
        .set_json(json!({ "category": "Fashion", "managementNumber": "C100" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["level"], 2);
    assert_eq!(body["options"], json!(["Men", "Women"]));
    assert_eq!(body["product"]["categoryList"], json!(["Fashion"]));

    let req = test::TestRequest::post()
        .uri("/categories/level/2")
        .set_json(json!({ "category": "Fashion", "category2": "Women", "managementNumber": "C100" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["options"], json!(["Bags", "Coats"]));
    assert_eq!(body["product"]["categoryList"], json!(["Fashion", "Women"]));
    assert_eq!(body["product"]["category"], "Women");

    let req = test::TestRequest::post()
        .uri("/categories/level/3")
        .set_json(json!({
            "category": "Fashion",
            "category2": "Women",
            "category3": "Coats",
            "managementNumber": "C100"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["code"], "FWC");
    assert!(body["options"].as_array().unwrap().is_empty());

    // Choosing a new top level starts over
    let req = test::TestRequest::post()
        .uri("/categories/level/1")
        .set_json(json!({ "category": "Watches", "managementNumber": "C100" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["product"]["categoryList"], json!(["Watches"]));

    let req = test::TestRequest::post()
        .uri("/categories/resolve")
        .set_json(json!({ "path": ["Watches", "Men"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["code"], "WM");
}

#[actix_web::test]
async fn test_category_level_requires_full_path() {
    let app = TestApp::new().await;
    app.state.categories.seed(&category_rows()).await.unwrap();
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/categories/level/2")
        .set_json(json!({ "category": "Fashion" }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri("/categories/level/1")
        .set_json(json!({ "category": "Garden" }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_bulk_delete_clears_history_and_images() {
    let app = TestApp::new().await;
    app.state.storage.images().store("D1_1.jpg", b"old").await.unwrap();
    app.state.storage.images().store("D1_2.jpg", b"new").await.unwrap();
    app.database.product("D1", &["D1_1.jpg"]).await;
    app.database.product("D1", &["D1_2.jpg"]).await;
    app.database.product("D2", &["D2_1.jpg"]).await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/products/bulk-delete")
        .set_json(json!({ "managementNumbers": ["D1", "NOPE"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["deleted"], json!(["D1"]));
    assert_eq!(body["failed"][0]["managementNumber"], "NOPE");

    assert!(app.database.db().find_latest_product("D1").await.unwrap().is_none());
    assert!(app.database.db().find_latest_product("D2").await.unwrap().is_some());
    assert!(!app.image_exists("D1_1.jpg"));
    assert!(!app.image_exists("D1_2.jpg"));
}

#[actix_web::test]
async fn test_delete_product_reports_missing_images() {
    let app = TestApp::new().await;
    app.database.product("M1", &["M1_gone.jpg"]).await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let req = test::TestRequest::delete().uri("/products/M1").to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["product"]["managementNumber"], "M1");
    assert_eq!(body["data"]["imageCleanup"]["missing"], json!(["M1_gone.jpg"]));

    let req = test::TestRequest::get().uri("/products/M1").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_folder_delete_cascades_to_products() {
    let app = TestApp::new().await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let body = crate::common::MultipartBody::new()
        .file("images", "FD1_a.jpg", &crate::common::fixtures::jpeg_bytes(512))
        .file("images", "FD2_a.jpg", &crate::common::fixtures::jpeg_bytes(512))
        .text("folderName", "To discard");
    let req = test::TestRequest::post()
        .uri("/batch/upload-directory")
        .insert_header(("content-type", crate::common::MultipartBody::content_type()))
        .set_payload(body.finish())
        .to_request();
    let upload: Value = test::call_and_read_body_json(&service, req).await;
    let folder_id = upload["folderId"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/folders/{}/export-name", folder_id))
        .to_request();
    let folder: Value = test::call_and_read_body_json(&service, req).await;
    let export = folder["exportFilename"].as_str().unwrap();
    assert!(export.starts_with("products_export_"));
    assert!(export.ends_with(".xlsx"));
    let expected_path = std::path::Path::new("exports").join(export);
    assert_eq!(
        folder["exportPath"].as_str().unwrap(),
        expected_path.to_string_lossy()
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/folders/{}", folder_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["data"]["productsDeleted"], 2);

    assert!(!app.image_exists("FD1_a.jpg"));
    assert!(!app.image_exists("FD2_a.jpg"));
    assert!(app.database.db().find_latest_product("FD1").await.unwrap().is_none());

    let req = test::TestRequest::get()
        .uri(&format!("/folders/{}", folder_id))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), 404);
}
