use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use study_priority_algo::ScoreValidation;
use study_priority_backend::config::Config;

mod common;

#[tokio::test]
async fn test_health_root() {
    let app = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_health_live() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/live")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_info_reports_policy() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/info")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["service"], "study-priority-backend");
    assert_eq!(body["policy"]["mastered_threshold"], 0.8);
    assert_eq!(body["scoreValidation"], "clamp");
}

#[tokio::test]
async fn test_404_not_found() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_priorities_ranked_and_categorized() {
    let app = common::create_test_app();
    let payload = json!({
        "records": [
            {"subject": "Math", "topic_name": "Geometry", "importance_score": 0.3, "mastery_score": 0.2},
            {"subject": "Math", "topic_name": "Calculus", "importance_score": 0.9, "mastery_score": 0.1},
            {"subject": "Math", "topic_name": "Algebra", "importance_score": 0.9, "mastery_score": 0.85},
            {"subject": "Physics", "topic_name": "Optics", "importance_score": 0.7, "mastery_score": 0.6}
        ]
    });

    let response = app
        .oneshot(common::post_json("/api/priorities", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["success"], true);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["topic_name"], "Calculus");
    assert_eq!(data[0]["recommendation"], "Study Now");
    assert_eq!(data[0]["rank"], 1);
    assert_eq!(data[1]["topic_name"], "Optics");
    assert_eq!(data[1]["recommendation"], "Revise Later");
    assert_eq!(data[2]["topic_name"], "Geometry");
    assert_eq!(data[2]["recommendation"], "Deprioritize");
    assert_eq!(data[3]["topic_name"], "Algebra");
    assert_eq!(data[3]["recommendation"], "Mastered");
}

#[tokio::test]
async fn test_priorities_accepts_bare_array_and_empty_input() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::post_json("/api/priorities", &json!([])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_priorities_missing_field_is_validation_error() {
    let app = common::create_test_app();
    let payload = json!([
        {"subject": "Math", "topic_name": "Calculus", "importance_score": 0.9}
    ]);

    let response = app
        .oneshot(common::post_json("/api/priorities", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Calculus"));
    assert!(message.contains("mastery_score"));
}

#[tokio::test]
async fn test_priorities_invalid_json_is_bad_request() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/priorities")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_strict_mode_rejects_out_of_range_scores() {
    let app = common::create_test_app_with(Config {
        score_validation: ScoreValidation::Strict,
        ..Config::default()
    });
    let payload = json!([
        {"subject": "Math", "topic_name": "Calculus", "importance_score": 1.4, "mastery_score": 0.1}
    ]);

    let response = app
        .oneshot(common::post_json("/api/priorities", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("importance_score"));
}

#[tokio::test]
async fn test_clamp_mode_accepts_out_of_range_scores() {
    let app = common::create_test_app();
    let payload = json!([
        {"subject": "Math", "topic_name": "Calculus", "importance_score": 1.4, "mastery_score": -0.3}
    ]);

    let response = app
        .oneshot(common::post_json("/api/priorities", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["data"][0]["importance_score"], 1.0);
    assert_eq!(body["data"][0]["mastery_score"], 0.0);
    assert_eq!(body["data"][0]["priority_score"], 1.0);
}

#[tokio::test]
async fn test_batch_keeps_failures_per_student() {
    let app = common::create_test_app();
    let payload = json!({
        "students": [
            {"student_id": 1, "records": [
                {"subject": "Math", "topic_name": "Calculus", "importance_score": 0.9, "mastery_score": 0.1}
            ]},
            {"student_id": 2, "records": [
                {"subject": "Math", "topic_name": "Broken", "importance_score": "high", "mastery_score": 0.1}
            ]},
            {"student_id": 3, "records": []}
        ]
    });

    let response = app
        .oneshot(common::post_json("/api/priorities/batch", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["student_id"], 1);
    assert_eq!(data[0]["priorities"][0]["recommendation"], "Study Now");
    assert_eq!(data[1]["student_id"], 2);
    assert!(data[1]["error"].as_str().unwrap().contains("Broken"));
    assert!(data[1].get("priorities").is_none());
    assert_eq!(data[2]["priorities"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_batch_results_stay_with_their_student() {
    let app = common::create_test_app();
    let payload = json!({
        "students": [
            {"student_id": 7, "records": {"records": "not an array"}},
            {"student_id": 8, "records": [
                {"subject": "Math", "topic_name": "Algebra", "importance_score": 0.2, "mastery_score": 0.1},
                {"subject": "Math", "topic_name": "Calculus", "importance_score": 0.9, "mastery_score": 0.1}
            ]},
            {"student_id": 9, "records": [
                {"subject": "Physics", "topic_name": "Optics", "importance_score": 0.7, "mastery_score": 0.6}
            ]}
        ]
    });

    let response = app
        .oneshot(common::post_json("/api/priorities/batch", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert!(data[0]["error"].as_str().is_some());
    assert!(data[0].get("priorities").is_none());

    assert_eq!(data[1]["student_id"], 8);
    let second = data[1]["priorities"].as_array().unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0]["topic_name"], "Calculus");

    assert_eq!(data[2]["student_id"], 9);
    assert_eq!(data[2]["priorities"][0]["topic_name"], "Optics");
}

#[tokio::test]
async fn test_batch_rejects_too_many_students() {
    let app = common::create_test_app();
    let students: Vec<serde_json::Value> = (0..501)
        .map(|id| json!({"student_id": id, "records": []}))
        .collect();
    let payload = json!({ "students": students });

    let response = app
        .oneshot(common::post_json("/api/priorities/batch", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_batch_accepts_maximum_students() {
    let app = common::create_test_app();
    let students: Vec<serde_json::Value> = (0..500)
        .map(|id| json!({"student_id": id, "records": []}))
        .collect();
    let payload = json!({ "students": students });

    let response = app
        .oneshot(common::post_json("/api/priorities/batch", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 500);
}

fn evidence() -> serde_json::Value {
    json!({
        "student_id": 12,
        "questions": [
            {"subject": "Math", "topic": "Calculus", "year": 2025, "marks": 15},
            {"subject": "Math", "topic": "Calculus", "year": 2024, "marks": 10},
            {"subject": "Math", "topic": "Algebra", "year": 2020, "marks": 5}
        ],
        "answers": [
            {"subject": "Math", "topic": "Calculus", "is_correct": false, "time_taken_seconds": 45},
            {"subject": "Math", "topic": "Calculus", "is_correct": false, "time_taken_seconds": 60},
            {"subject": "Math", "topic": "Calculus", "is_correct": true, "time_taken_seconds": 30}
        ]
    })
}

#[tokio::test]
async fn test_study_plan_generation() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::post_json("/api/study-plan", &evidence()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let plan = &body["data"];
    assert_eq!(plan["student_id"], 12);
    assert!(plan["generated_at"].as_str().is_some());

    let priorities = plan["priorities"].as_array().unwrap();
    assert_eq!(priorities.len(), 2);
    assert_eq!(priorities[0]["topic_name"], "Calculus");
    assert_eq!(priorities[0]["recommendation"], "Study Now");
    assert_eq!(priorities[1]["topic_name"], "Algebra");
    assert_eq!(priorities[1]["mastery_score"], 0.0);
}

#[tokio::test]
async fn test_study_plan_export_is_text_attachment() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::post_json("/api/study-plan/export", &evidence()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(
        disposition,
        "attachment; filename=\"study-plan-student-12.txt\""
    );

    let text = String::from_utf8(common::body_bytes(response).await).unwrap();
    assert!(text.contains("Student ID: 12"));
    assert!(text.contains("Study These Now (1 topics)"));
    assert!(text.contains("1. Calculus (Math)"));
}
