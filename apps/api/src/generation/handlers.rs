//! Axum route handlers for the two generation endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{build_ats_prompt, build_interview_prompt};
use crate::generation::questions::extract_questions;
use crate::state::AppState;

/// Role used for question generation when the caller supplies none.
const DEFAULT_JOB_ROLE: &str = "Software Engineer";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub success: bool,
    pub optimized_resume: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsRequest {
    #[serde(default)]
    pub resume_text: String,
    pub job_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /optimize
///
/// Rewrites a resume into an ATS-friendly form targeted at one job
/// description. Validates input, confirms the active provider is usable,
/// then relays the rendered prompt through the router.
pub async fn handle_optimize(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let Json(request) =
        payload.map_err(|_| AppError::Validation("Request body is required".to_string()))?;

    let resume_text = request.resume_text.trim();
    let job_description = request.job_description.trim();

    if resume_text.is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }
    if job_description.is_empty() {
        return Err(AppError::Validation(
            "Job description is required".to_string(),
        ));
    }

    state.providers.check_ready()?;

    let prompt = build_ats_prompt(resume_text, job_description);
    let optimized_resume = state
        .providers
        .dispatch(&prompt)
        .await
        .map_err(|source| AppError::Provider {
            context: "AI optimization failed",
            source,
        })?;

    Ok(Json(OptimizeResponse {
        success: true,
        optimized_resume,
    }))
}

/// POST /generate-questions
///
/// Generates up to seven interview questions tailored to a resume and a
/// target role. The role falls back to a sensible default when absent or
/// blank.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<QuestionsRequest>, JsonRejection>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let Json(request) =
        payload.map_err(|_| AppError::Validation("Request body is required".to_string()))?;

    let resume_text = request.resume_text.trim();
    if resume_text.is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }

    let job_role = request
        .job_role
        .as_deref()
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .unwrap_or(DEFAULT_JOB_ROLE);

    state.providers.check_ready()?;

    info!("Generating interview questions for job role: {job_role}");
    let prompt = build_interview_prompt(resume_text, job_role);
    let raw = state
        .providers
        .dispatch(&prompt)
        .await
        .map_err(|source| AppError::Provider {
            context: "Failed to generate questions",
            source,
        })?;

    let questions = extract_questions(&raw);

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
    }))
}
