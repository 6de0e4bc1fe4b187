//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("year {0} is not present in the dataset")]
    InvalidYear(u16),

    #[error("town '{0}' is not present in the dataset")]
    InvalidTown(String),

    #[error("the dataset contains no records")]
    EmptyDataset,
}
