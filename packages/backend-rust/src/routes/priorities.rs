use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use study_priority_algo::{parse_records, PriorityEntry, TopicRecord};

use crate::response::{ok, AppError};
use crate::state::AppState;

/// Upper bound on snapshots per batch request
const MAX_BATCH_STUDENTS: usize = 500;

#[derive(Debug, Deserialize)]
struct BatchRequest {
    students: Vec<StudentSnapshot>,
}

#[derive(Debug, Deserialize)]
struct StudentSnapshot {
    student_id: i64,
    records: Value,
}

#[derive(Debug, Serialize)]
struct BatchItem {
    student_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    priorities: Option<Vec<PriorityEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", post(compute_priorities))
        .route("/batch", post(compute_batch))
}

async fn compute_priorities(
    State(state): State<AppState>,
    body: Result<Json<Value>, axum::extract::rejection::JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = body.map_err(|e| AppError::bad_request(e.body_text()))?;

    let records = parse_records(&payload)?;
    let entries = state.engine().compute(&records)?;

    tracing::info!(topics = entries.len(), "priorities computed");
    Ok(ok(entries))
}

async fn compute_batch(
    State(state): State<AppState>,
    body: Result<Json<BatchRequest>, axum::extract::rejection::JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = body.map_err(|e| AppError::bad_request(e.body_text()))?;

    if payload.students.len() > MAX_BATCH_STUDENTS {
        return Err(AppError::validation(format!(
            "students may contain at most {MAX_BATCH_STUDENTS} snapshots"
        )));
    }

    // Parse failures stay attached to their own student
    let parsed: Vec<(i64, Result<Vec<TopicRecord>, String>)> = payload
        .students
        .into_iter()
        .map(|s| {
            (
                s.student_id,
                parse_records(&s.records).map_err(|e| e.to_string()),
            )
        })
        .collect();

    // One snapshot per student keeps results aligned with `parsed`
    let snapshots: Vec<Vec<TopicRecord>> = parsed
        .iter()
        .map(|(_, r)| r.as_ref().ok().cloned().unwrap_or_default())
        .collect();
    let computed = state.engine().compute_batch(&snapshots);

    let mut failures = 0usize;
    let items: Vec<BatchItem> = parsed
        .into_iter()
        .zip(computed)
        .map(|((student_id, parsed), computed)| {
            let outcome = parsed.and_then(|_| computed.map_err(|e| e.to_string()));
            match outcome {
                Ok(priorities) => BatchItem {
                    student_id,
                    priorities: Some(priorities),
                    error: None,
                },
                Err(error) => {
                    failures += 1;
                    BatchItem {
                        student_id,
                        priorities: None,
                        error: Some(error),
                    }
                }
            }
        })
        .collect();

    tracing::info!(students = items.len(), failures, "batch priorities computed");
    Ok(ok(items))
}
