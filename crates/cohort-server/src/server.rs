//! Router and handlers for the prediction endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use cohort_core::predictor::Predictor;

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub prediction: Vec<i64>,
}

/// Build the application router over a loaded predictor.
pub fn app(predictor: Arc<Predictor>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .with_state(AppState { predictor })
}

/// `POST /predict`: body is a list of `[minutes_watched, clv_wins, region,
/// channel]` rows; the response carries one cluster id per row, in input
/// order. Any invalid row rejects the whole batch with 422 and no partial
/// results.
async fn predict(
    State(state): State<AppState>,
    Json(batch): Json<Vec<Vec<Value>>>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<Value>)> {
    let prediction = state.predictor.predict_values(&batch).map_err(|e| {
        log::warn!("rejected batch of {} rows: {}", batch.len(), e);
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    Ok(Json(PredictResponse { prediction }))
}

async fn health() -> &'static str {
    "OK"
}
