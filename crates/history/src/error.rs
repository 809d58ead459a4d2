//! Error types for history operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HistoryError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Browser history is empty")]
    EmptyCollection,

    #[error("No links match '{0}'")]
    NoMatches(String),
}
