pub mod handlers;
mod types;

pub use types::RenderContext;

use crate::{
    config::Config,
    predictor::{LinearModel, Predictor},
    Result,
};
use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub async fn run(config: Config) -> Result<()> {
    // Load the model artifact once; a failed load leaves the server running
    // without a predictor and submissions report the sentinel message.
    let artifact_path = &config.model.artifact_path;
    let predictor: Option<Arc<dyn Predictor>> = match LinearModel::load(artifact_path) {
        Ok(model) => {
            info!("Model loaded successfully from: {}", artifact_path);
            Some(Arc::new(model))
        }
        Err(e) => {
            error!("Error loading model from {}: {}", artifact_path, e);
            None
        }
    };

    // Create application state
    let app_state = handlers::AppState { predictor };

    // Create router
    let app = Router::new()
        .route("/", get(handlers::show_form).post(handlers::predict))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
