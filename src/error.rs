use thiserror::Error;

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Excel(String),

    #[error("Missing input file: {0}")]
    MissingFile(String),

    #[error("Malformed date in spreadsheet row {row}: {value:?}")]
    MalformedDate { row: usize, value: String },

    #[error("Parse error: {0}")]
    Parse(String),
}
