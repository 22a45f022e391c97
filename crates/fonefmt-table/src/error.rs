use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("input is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("column not found: {0}")]
    MissingColumn(String),
    #[error("input has no header row")]
    EmptyInput,
    #[error("table too large: {0}")]
    TooLarge(String),
    #[cfg(feature = "xlsx")]
    #[error("xlsx read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),
    #[cfg(feature = "xlsx")]
    #[error("xlsx write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, TableError>;
