use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tower::ServiceExt;

use crate::eligibility::router::{assess_handler, eligibility_router};

#[tokio::test]
async fn assess_handler_returns_unprocessable_for_missing_identity() {
    let (service, notifier) = build_service();

    let response =
        assess_handler::<RecordingNotifier>(State(service), axum::Json(anonymous_submission()))
            .await
            .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(
        body,
        json!({ "error": "Please enter your Name and Register Number to proceed." })
    );
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn assessment_route_reports_missing_identity_as_json_error() {
    let (service, notifier) = build_service();
    let router = eligibility_router(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/eligibility/assessments")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&anonymous_submission()).expect("serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(
        body["error"],
        "Please enter your Name and Register Number to proceed."
    );
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn assessment_route_accepts_payloads() {
    let (service, notifier) = build_service();
    let router = eligibility_router(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/eligibility/assessments")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission()).expect("serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["eligible_count"], 8);
    assert_eq!(body["premier"], json!(["Google", "Microsoft"]));
    assert_eq!(body["skill_gaps"][0]["label"], "Amazon (Needs C++)");
    assert_eq!(body["skill_gaps"][0]["missing_skill"], "C++");
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn assessment_route_rejects_unknown_skills() {
    let (service, notifier) = build_service();
    let router = eligibility_router(service);
    let payload = json!({
        "name": "Asha Raman",
        "register_number": "R123",
        "cgpa": 8.0,
        "skills": ["COBOL"]
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/eligibility/assessments")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn criteria_route_lists_table_and_form_options() {
    let (service, _) = build_service();
    let router = eligibility_router(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/eligibility/criteria")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let companies = body["companies"].as_array().expect("companies array");
    assert_eq!(companies.len(), 13);
    assert_eq!(companies[0]["company"], "Google");
    assert_eq!(companies[0]["tier"], "premier");
    assert_eq!(companies[8]["required_skill"], serde_json::Value::Null);
    assert_eq!(body["skills"].as_array().map(Vec::len), Some(9));
    assert_eq!(body["branches"][6], "AI/DS");
}
