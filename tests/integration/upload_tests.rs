//! Upload grouping through `POST /batch/upload-directory`

use crate::common::fixtures::jpeg_bytes;
use crate::common::{MultipartBody, TestApp};
use actix_web::{test, web};
use resale_catalog::server::create_app;
use serde_json::Value;

fn upload_request(body: MultipartBody) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/batch/upload-directory")
        .insert_header(("content-type", MultipartBody::content_type()))
        .set_payload(body.finish())
}

#[actix_web::test]
async fn test_oversized_file_is_skipped() {
    let app = TestApp::new().await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let body = MultipartBody::new()
        .file("images", "P001_a.jpg", &jpeg_bytes(500 * 1024))
        .file("images", "P002_b.jpg", &jpeg_bytes(2 * 1024 * 1024));

    let resp = test::call_service(&service, upload_request(body).to_request()).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["totalProducts"], 1);
    assert_eq!(body["totalImages"], 1);
    assert_eq!(body["productGroups"][0]["managementNumber"], "P001");
    assert_eq!(body["productGroups"][0]["images"][0], "P001_a.jpg");

    let skipped = body["uploadSummary"]["skippedFiles"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["filename"], "P002_b.jpg");
    assert_eq!(skipped[0]["reason"], "File too large");
    assert_eq!(body["uploadSummary"]["totalFiles"], 2);
    assert_eq!(body["uploadSummary"]["validFiles"], 1);

    assert!(app.image_exists("P001_a.jpg"));
    assert!(!app.image_exists("P002_b.jpg"));

    let run_id = body["workProcessId"].as_i64().unwrap() as i32;
    let run = app.database.db().get_work_process(run_id).await.unwrap();
    assert_eq!(run.product_ids, vec!["P001"]);
    assert_eq!(run.finished_products, 0);
    assert!(!run.finished);
}

#[actix_web::test]
async fn test_upload_without_valid_images_is_rejected() {
    let app = TestApp::new().await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let body = MultipartBody::new().file("images", "noid.jpg", &jpeg_bytes(100 * 1024));

    let resp = test::call_service(&service, upload_request(body).to_request()).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("No valid images to process")
    );

    let stats = app.database.db().stats().await.unwrap();
    assert_eq!(stats.products, 0);
    assert_eq!(stats.work_processes, 0);
    assert!(!app.image_exists("noid.jpg"));
}

#[actix_web::test]
async fn test_groups_follow_first_appearance_and_strip_paths() {
    let app = TestApp::new().await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let body = MultipartBody::new()
        .file("files", "batch/B200_front.jpg", &jpeg_bytes(1024))
        .file("files", "batch/A100_front.jpg", &jpeg_bytes(1024))
        .file("files", "batch/B200_back.jpg", &jpeg_bytes(1024))
        .text("price", "4800");

    let resp = test::call_service(&service, upload_request(body).to_request()).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let groups = body["productGroups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["managementNumber"], "B200");
    assert_eq!(groups[0]["images"].as_array().unwrap().len(), 2);
    assert_eq!(groups[1]["managementNumber"], "A100");

    let product = app.database.db().get_latest_product("B200").await.unwrap();
    assert_eq!(product.price, Some(4800));
    assert_eq!(product.images, vec!["B200_front.jpg", "B200_back.jpg"]);
}

#[actix_web::test]
async fn test_upload_with_worker_and_folder() {
    let app = TestApp::new().await;
    let worker = app.database.db().create_worker("Sato").await.unwrap();
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let body = MultipartBody::new()
        .file("images", "F1_a.jpg", &jpeg_bytes(2048))
        .file("images", "F2_a.jpg", &jpeg_bytes(2048))
        .text("workerId", &worker.id.to_string())
        .text("folderName", "October intake");

    let resp = test::call_service(&service, upload_request(body).to_request()).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let folder_id = body["folderId"].as_i64().unwrap() as i32;

    let folder = app.database.db().get_folder(folder_id).await.unwrap();
    assert_eq!(folder.name, "October intake");
    assert_eq!(folder.product_count, 2);
    assert_eq!(folder.worker_id, Some(worker.id));

    let product = app.database.db().get_latest_product("F2").await.unwrap();
    assert_eq!(product.worker_id, Some(worker.id));
    assert_eq!(product.folder_id, Some(folder_id));
}

#[actix_web::test]
async fn test_upload_for_unknown_worker_is_404() {
    let app = TestApp::new().await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let body = MultipartBody::new()
        .file("images", "P001_a.jpg", &jpeg_bytes(1024))
        .text("workerId", "77");

    let resp = test::call_service(&service, upload_request(body).to_request()).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_upload_with_invalid_price_is_400() {
    let app = TestApp::new().await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let body = MultipartBody::new()
        .file("images", "P001_a.jpg", &jpeg_bytes(1024))
        .text("price", "cheap");

    let resp = test::call_service(&service, upload_request(body).to_request()).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_reupload_shadows_previous_row() {
    let app = TestApp::new().await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    for (name, price) in [("R1_a.jpg", "1000"), ("R1_b.jpg", "2000")] {
        let body = MultipartBody::new()
            .file("images", name, &jpeg_bytes(1024))
            .text("price", price);
        let resp = test::call_service(&service, upload_request(body).to_request()).await;
        assert_eq!(resp.status(), 200);
    }

    let latest = app.database.db().get_latest_product("R1").await.unwrap();
    assert_eq!(latest.price, Some(2000));
    assert_eq!(latest.images, vec!["R1_b.jpg"]);
}
