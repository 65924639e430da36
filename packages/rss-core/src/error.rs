use thiserror::Error;

#[derive(Error, Debug)]
pub enum RssError {
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    #[error("Column schemas differ between '{mean_path}' and '{variance_path}': {detail}")]
    SchemaMismatch {
        mean_path: String,
        variance_path: String,
        detail: String,
    },

    #[error("Malformed record in '{file}' at line {line}: {detail}")]
    MalformedRecord {
        file: String,
        line: u64,
        detail: String,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RssError>;
