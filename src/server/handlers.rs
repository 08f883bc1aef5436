use super::types::RenderContext;
use crate::{
    predictor::Predictor,
    record::{format_currency, PredictionRecord, Submission},
    Error, Result,
};
use axum::{extract::State, response::Html, Form};
use std::sync::Arc;
use tracing::{info, warn};

/// Message shown when the artifact failed to load at startup.
pub const MODEL_NOT_LOADED: &str = "Error: Model not loaded.";

#[derive(Clone)]
pub struct AppState {
    pub predictor: Option<Arc<dyn Predictor>>,
}

pub async fn show_form() -> Html<String> {
    Html(RenderContext::empty().to_html())
}

/// Submission path. Always renders the page; coercion and predictor
/// failures degrade into the prediction line instead of an error status.
pub async fn predict(
    State(state): State<AppState>,
    Form(submission): Form<Submission>,
) -> Html<String> {
    info!(
        "Received prediction request for job title: {}",
        submission.job_title
    );

    let prediction_text = match run_submission(&state, &submission) {
        Ok(text) => {
            info!("Prediction succeeded: {}", text);
            text
        }
        Err(Error::PredictorUnavailable) => {
            warn!("Prediction requested but no model is loaded");
            MODEL_NOT_LOADED.to_string()
        }
        Err(e) => {
            warn!("Prediction failed: {}", e);
            format!("An error occurred: {}", e)
        }
    };

    Html(RenderContext::with_submission(prediction_text, &submission).to_html())
}

fn run_submission(state: &AppState, submission: &Submission) -> Result<String> {
    let record = PredictionRecord::from_submission(submission)?;
    let predictor = state
        .predictor
        .as_deref()
        .ok_or(Error::PredictorUnavailable)?;
    let value = predictor.predict(&record)?;
    Ok(format_currency(value))
}
