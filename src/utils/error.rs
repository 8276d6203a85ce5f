use thiserror::Error;

#[derive(Error, Debug)]
pub enum PunchError {
    #[error("unable to read '{name}' with any supported spreadsheet reader")]
    UnreadableFileError { name: String },

    #[error("no header row containing 'Punch Records' found in the first {scanned} rows")]
    MissingHeaderError { scanned: usize },

    #[error("'Punch Records' column not found. Available columns: {}", available.join(", "))]
    MissingColumnError { available: Vec<String> },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Invalid xlsx file: {0}")]
    XlsxError(#[from] calamine::XlsxError),

    #[error("Invalid xls file: {0}")]
    XlsError(#[from] calamine::XlsError),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PunchError>;
