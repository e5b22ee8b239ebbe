//! Crate-level error type

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordleError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Saved Game Rejected: {0}")]
    Snapshot(#[from] crate::game::SnapshotError),

    #[error("Answer list is empty")]
    EmptyAnswerList,
}

pub type WordleResult<T> = Result<T, WordleError>;
