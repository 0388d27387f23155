use thiserror::Error;

/// Errors that abort an IGC parse or conversion.
///
/// Malformed fix lines and extension groups are not errors; they are
/// dropped by the decoders and never surface here.
#[derive(Debug, Error)]
pub enum IgcError {
    /// No header line carried a usable `DTE` date, so no timestamp can be built
    #[error("no flight date found in IGC header records")]
    NoDateFound,
    /// Input had no non-blank lines
    #[error("IGC input is empty")]
    EmptyInput,
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl IgcError {
    /// True for the fatal "header date missing" condition, as opposed to I/O trouble.
    pub fn is_no_date(&self) -> bool {
        matches!(self, IgcError::NoDateFound)
    }
}

pub type Result<T> = std::result::Result<T, IgcError>;
