//! Error type for the calculator's I/O-facing surfaces
//!
//! The amortization engine never errors: invalid loan inputs simply produce
//! no result. Everything around it (preference files, schedule export,
//! currency and theme codes) reports through `EmiError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

pub type Result<T> = std::result::Result<T, EmiError>;
