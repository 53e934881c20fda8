use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Json;
use chrono::{Datelike, Utc};

use crate::response::{ok, AppError};
use crate::services::study_plan::{
    build_study_plan, export_file_name, render_text, StudentEvidence, StudyPlan,
};
use crate::state::AppState;

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", post(generate_plan))
        .route("/export", post(export_plan))
}

fn plan_from_body(
    state: &AppState,
    body: Result<Json<StudentEvidence>, JsonRejection>,
) -> Result<StudyPlan, AppError> {
    let Json(evidence) = body.map_err(|e| AppError::bad_request(e.body_text()))?;
    let plan = build_study_plan(state.engine(), &evidence, Utc::now().year())?;

    tracing::info!(
        student_id = plan.student_id,
        topics = plan.priorities.len(),
        "study plan generated"
    );
    Ok(plan)
}

async fn generate_plan(
    State(state): State<AppState>,
    body: Result<Json<StudentEvidence>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let plan = plan_from_body(&state, body)?;
    Ok(ok(plan))
}

async fn export_plan(
    State(state): State<AppState>,
    body: Result<Json<StudentEvidence>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let plan = plan_from_body(&state, body)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(plan.student_id)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render_text(&plan),
    ))
}
