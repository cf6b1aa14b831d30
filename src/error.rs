use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Attempt to query empty data")]
    EmptyData,

    #[error("Index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("No function registered under name: {0}")]
    FunctionNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
