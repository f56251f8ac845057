//! API routes

use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

type AppStateArc = Arc<AppState>;

/// Body of `POST /predict`
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PredictRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct SubstitutionResponse {
    pub ingredient: String,
    pub substitutes: Vec<String>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

// ============================================================================
// Chat Routes
// ============================================================================

pub fn chat_routes() -> Router<AppStateArc> {
    Router::new().route("/predict", post(predict))
}

async fn predict(
    State(state): State<AppStateArc>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!("Rejected predict body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let message = match request.message.as_deref().map(str::trim) {
        Some(message) if !message.is_empty() => message,
        _ => return error_response(StatusCode::BAD_REQUEST, "No message provided"),
    };
    let ingredients = request.ingredients.unwrap_or_default();

    info!(
        "Chat request ({} chars, {} ingredients)",
        message.len(),
        ingredients.len()
    );

    let reply = state.responder.respond(message, &ingredients).await;
    Json(reply).into_response()
}

// ============================================================================
// Substitution Routes
// ============================================================================

pub fn substitution_routes() -> Router<AppStateArc> {
    Router::new().route("/substitutions/:ingredient", get(substitutions))
}

async fn substitutions(
    State(state): State<AppStateArc>,
    Path(ingredient): Path<String>,
) -> Response {
    match state.substitutions.lookup(&ingredient) {
        Some(substitutes) => Json(SubstitutionResponse {
            ingredient,
            substitutes: substitutes.to_vec(),
        })
        .into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("No substitutes known for '{}'", ingredient),
        ),
    }
}
