use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaggingError>;

#[derive(Error, Debug)]
pub enum TaggingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    #[error("EXIF read error: {0}")]
    ExifRead(#[from] exif::Error),

    #[error("EXIF write error for '{path}': {message}")]
    ExifWrite { path: String, message: String },

    #[error("No GPS tag group found in '{0}'")]
    MissingGps(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
