use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Failed to write package archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid hyperlink target '{0}'")]
    InvalidHyperlink(String),
}
