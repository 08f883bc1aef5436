mod linear;

pub use linear::LinearModel;

use crate::{record::PredictionRecord, Result};

/// The trained model, consumed as an opaque function from one fixed-schema
/// input row to a salary estimate. Constructed once at startup and passed
/// by reference into the request handlers.
pub trait Predictor: Send + Sync {
    fn predict(&self, record: &PredictionRecord) -> Result<f64>;
}
