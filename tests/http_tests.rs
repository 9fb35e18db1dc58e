mod common;

use actix_web::{App, http::StatusCode, test, web};
use common::{Engine, SEMINARIST, STUDENT};
use rust_rubric_engine::config::GradingConfig;
use rust_rubric_engine::models::{AppStartTime, ErrorCode};
use rust_rubric_engine::routes::configure_api_routes;
use rust_rubric_engine::utils::{json_error_handler, path_error_handler, query_error_handler};
use serde_json::{Value, json};

macro_rules! app {
    ($engine:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(web::Data::new($engine.storage.clone()))
                .app_data(web::Data::new($engine.grading))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(configure_api_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn grading_flow_over_http() {
    let engine = Engine::connect(GradingConfig::default()).await;
    let app = app!(engine);
    let task_id = engine.task.id;

    // 阻断评分标准
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/tasks/{task_id}/criteria/blocking"))
        .set_json(json!({ "name": "Plagiarism", "final_mark": 1.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let blocking_id = body["data"]["criterion"]["id"].as_i64().unwrap();

    // 主要评分标准
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/tasks/{task_id}/groups"))
        .set_json(json!({ "name": "Quality" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let group_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/groups/{group_id}/criteria"))
        .set_json(json!({ "name": "Correctness" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let main_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["weight"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/tasks/{task_id}/criteria/main"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["groups"][0]["criteria"][0]["id"], main_id);

    // 提交
    let req = test::TestRequest::post()
        .uri("/api/v1/works")
        .set_json(json!({ "student_id": STUDENT, "task_id": task_id, "content_ref": "s3://lab1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let work_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["status"], "submitted");
    assert_eq!(body["data"]["seminarist_id"], SEMINARIST);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/works?student_id={STUDENT}&task_id={task_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["work"]["id"], work_id);

    // 评分
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/works/{work_id}/marks"))
        .set_json(json!({ "criterion_id": main_id, "mark": 0.75 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/works/{work_id}/grade"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["grade"], 7.5);
    assert_eq!(body["data"]["outcome"]["kind"], "scored");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/works/{work_id}/marks/{blocking_id}/trigger"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/works/{work_id}/grade"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["grade"], 1.0);
    assert_eq!(body["data"]["outcome"]["kind"], "blocked");

    // 状态流转
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/works/{work_id}/graded"))
        .set_json(json!({ "role": "assistant" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/works/{work_id}/graded"))
        .set_json(json!({ "role": "seminarist" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::InvalidOperation as i32);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/works/{work_id}/status"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "graded_by_assistant");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/students/{STUDENT}/disciplines/{}/grade", common::DISCIPLINE))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["works_count"], 1);
    assert_eq!(body["data"]["grade"], 1.0);
}

#[actix_web::test]
async fn errors_map_to_http_status() {
    let engine = Engine::connect(GradingConfig::default()).await;
    let app = app!(engine);

    let req = test::TestRequest::get()
        .uri("/api/v1/tasks/9999/criteria/blocking")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::NotFound as i32);

    let req = test::TestRequest::put()
        .uri("/api/v1/criteria/1/weight")
        .set_json(json!({ "weight": "heavy" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::BadRequest as i32);

    let req = test::TestRequest::get()
        .uri("/api/v1/works/abc/status")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/works/777/status")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "pending");

    let req = test::TestRequest::get()
        .uri("/api/v1/system/health")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "ok");
}
