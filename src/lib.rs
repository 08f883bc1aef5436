pub mod config;
pub mod error;
pub mod options;
pub mod predictor;
pub mod record;
pub mod server;

pub use error::{Error, Result};
