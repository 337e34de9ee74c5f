use gffstats_core::GffError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error(transparent)]
    Gff(#[from] GffError),
    #[error("Failed to serialize statistics: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
