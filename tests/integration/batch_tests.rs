//! Batch runs end to end: start, poll, finish

use crate::common::analyzer::sample_analysis;
use crate::common::assertions::ProductAssertions;
use crate::common::{ScriptedAnalyzer, TestApp};
use actix_web::{test, web};
use resale_catalog::core::models::{Rank, WorkProcess};
use resale_catalog::server::create_app;
use serde_json::{Value, json};
use std::time::Duration;

async fn wait_until_finished(app: &TestApp, run_id: i32) -> WorkProcess {
    for _ in 0..100 {
        let run = app.database.db().get_work_process(run_id).await.unwrap();
        if run.finished {
            return run;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("work process {} did not finish", run_id);
}

#[actix_web::test]
async fn test_run_skips_product_without_images() {
    let analyzer = ScriptedAnalyzer::new()
        .with_result("A", sample_analysis("Trench coat beige"))
        .with_result("C", sample_analysis("Leather loafers"));
    let app = TestApp::with_analyzer(analyzer).await;

    app.database.product("A", &["A_1.jpg"]).await;
    app.database.product("B", &[]).await;
    app.database.product("C", &["C_1.jpg", "C_2.jpg"]).await;
    let ids: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    let run = app.database.db().create_work_process(None, &ids).await.unwrap();

    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;
    let req = test::TestRequest::post()
        .uri("/batch/start-processing")
        .set_json(json!({ "workProcessId": run.id }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["workProcessId"], run.id);
    assert_eq!(body["totalProducts"], 3);
    assert!(body["startTime"].is_string());

    let finished = wait_until_finished(&app, run.id).await;
    assert_eq!(finished.finished_products, 3);
    assert_eq!(finished.current_product_id.as_deref(), Some("C"));

    assert_eq!(app.analyzer.analyzed(), vec!["A", "C"]);
    assert_eq!(
        app.analyzer.filenames_for("C").unwrap(),
        vec!["C_1.jpg", "C_2.jpg"]
    );

    let db = app.database.db();
    db.get_latest_product("A").await.unwrap().assert_titled("Trench coat beige");
    db.get_latest_product("B").await.unwrap().assert_unanalyzed();
    let c = db.get_latest_product("C").await.unwrap();
    c.assert_titled("Leather loafers");
    assert_eq!(c.level, Some(Rank::A));
    assert_eq!(c.candidate_titles.len(), 2);
}

#[actix_web::test]
async fn test_missing_product_is_counted() {
    let app = TestApp::new().await;
    let ids = vec!["GHOST".to_string()];
    let run = app.database.db().create_work_process(None, &ids).await.unwrap();

    let started = app.state.runner.spawn(run.id).await.unwrap();
    let summary = started.handle.await.unwrap().unwrap();
    assert_eq!(summary.skipped, 1);

    let finished = app.database.db().get_work_process(run.id).await.unwrap();
    assert!(finished.finished);
    assert_eq!(finished.finished_products, 1);
    assert!(app.analyzer.analyzed().is_empty());
}

#[actix_web::test]
async fn test_unanalyzable_product_gets_fallback() {
    // No scripted result: the analyzer answers with the fallback record
    let app = TestApp::new().await;
    app.database.product("FB1", &["FB1_1.jpg"]).await;
    let run = app
        .database
        .db()
        .create_work_process(None, &["FB1".to_string()])
        .await
        .unwrap();

    let summary = app
        .state
        .runner
        .spawn(run.id)
        .await
        .unwrap()
        .handle
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.degraded, 1);

    let product = app.database.db().get_latest_product("FB1").await.unwrap();
    assert_eq!(product.level, Some(Rank::B));
    assert!(product.title.is_none());
}

#[actix_web::test]
async fn test_starting_finished_run_is_rejected() {
    let app = TestApp::new().await;
    let run = app.database.db().create_work_process(None, &[]).await.unwrap();
    app.database.db().mark_finished(run.id).await.unwrap();

    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;
    let req = test::TestRequest::post()
        .uri("/batch/start-processing")
        .set_json(json!({ "workProcessId": run.id }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_start_unknown_run_is_404() {
    let app = TestApp::new().await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/batch/start-processing")
        .set_json(json!({ "workProcessId": 4040 }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_force_finish_and_active_listing() {
    let app = TestApp::new().await;
    let worker = app.database.db().create_worker("Tanaka").await.unwrap();
    let ids = vec!["X1".to_string(), "X2".to_string()];
    let run = app
        .database
        .db()
        .create_work_process(Some(worker.id), &ids)
        .await
        .unwrap();

    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let req = test::TestRequest::get()
        .uri(&format!("/batch/work-processes/active?workerId={}", worker.id))
        .to_request();
    let active: Vec<Value> = test::call_and_read_body_json(&service, req).await;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["productIds"], json!(["X1", "X2"]));

    let req = test::TestRequest::patch()
        .uri(&format!("/batch/work-process/{}/finish", run.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["finished"], true);
    assert_eq!(body["finishedProducts"], 0);

    let req = test::TestRequest::get()
        .uri(&format!("/batch/work-process/{}", run.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(body["finished"], true);

    let req = test::TestRequest::get()
        .uri(&format!("/batch/work-processes/active?workerId={}", worker.id))
        .to_request();
    let active: Vec<Value> = test::call_and_read_body_json(&service, req).await;
    assert!(active.is_empty());
}

#[actix_web::test]
async fn test_upload_then_process() {
    let analyzer = ScriptedAnalyzer::new().with_result("U1", sample_analysis("Denim jacket"));
    let app = TestApp::with_analyzer(analyzer).await;
    let service = test::init_service(create_app(web::Data::new(app.state.clone()))).await;

    let body = crate::common::MultipartBody::new()
        .file("images", "U1_front.jpg", &crate::common::fixtures::jpeg_bytes(4096))
        .file("images", "U1_back.jpg", &crate::common::fixtures::jpeg_bytes(4096));
    let req = test::TestRequest::post()
        .uri("/batch/upload-directory")
        .insert_header(("content-type", crate::common::MultipartBody::content_type()))
        .set_payload(body.finish())
        .to_request();
    let upload: Value = test::call_and_read_body_json(&service, req).await;
    let run_id = upload["workProcessId"].as_i64().unwrap() as i32;

    let req = test::TestRequest::post()
        .uri("/batch/start-processing")
        .set_json(json!({ "workProcessId": run_id }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert!(resp.status().is_success());

    let finished = wait_until_finished(&app, run_id).await;
    assert_eq!(finished.finished_products, 1);

    let req = test::TestRequest::get().uri("/products/U1").to_request();
    let product: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(product["title"], "Denim jacket");
    assert_eq!(product["images"], json!(["U1_front.jpg", "U1_back.jpg"]));
}
