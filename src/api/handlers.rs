//! HTTP request handlers

use super::assets::get_index_html;
use super::question::{compose_question, find_invalid, DIETARY_PREFERENCES, WORKOUT_LEVELS};
use super::types::{ErrorResponse, HealthResponse, QueryRequest, QueryResponse};
use super::AppState;
use crate::llm::LlmErrorKind;
use crate::runtime::QueryError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root serves the form
        .route("/", get(serve_form))
        .route("/api/query", post(run_query))
        .route("/api/health", get(health))
        .route("/version", get(get_version))
        .with_state(state)
}

async fn serve_form() -> impl IntoResponse {
    match get_index_html() {
        Some(content) => Html(content).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html("<h1>404 - form not found</h1>".to_string()),
        )
            .into_response(),
    }
}

async fn run_query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    if req.question.trim().is_empty() {
        return Err(AppError::BadRequest("Please enter a question.".to_string()));
    }
    if let Some(level) = find_invalid(&req.workout_levels, WORKOUT_LEVELS) {
        return Err(AppError::BadRequest(format!("Unknown fitness level: {level}")));
    }
    if let Some(pref) = find_invalid(&req.dietary_preferences, DIETARY_PREFERENCES) {
        return Err(AppError::BadRequest(format!("Unknown dietary preference: {pref}")));
    }

    let runtime = state.runtime_for(req.api_key.as_deref()).ok_or_else(|| {
        AppError::BadRequest(
            "No Google API key configured. Enter one in the form or set GOOGLE_API_KEY.".to_string(),
        )
    })?;

    let question = compose_question(
        &req.question,
        &req.workout_levels,
        &req.dietary_preferences,
    );
    tracing::info!(question = %question, "Running query");

    let response = runtime.ask(&question).await?;

    Ok(Json(QueryResponse { question, response }))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.config.model.clone(),
        configured: state.runtime.is_some(),
    })
}

async fn get_version() -> impl IntoResponse {
    env!("CARGO_PKG_VERSION")
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Unauthorized(String),
    BadGateway(String),
    Internal(String),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::UnknownAction { .. } => AppError::BadGateway(err.to_string()),
            QueryError::Backend(e) if e.kind == LlmErrorKind::Auth => {
                AppError::Unauthorized(e.message)
            }
            QueryError::Backend(e) => AppError::BadGateway(e.message),
            QueryError::Transition(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::warn!(status = %status, error = %message, "Query failed");
        }

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
