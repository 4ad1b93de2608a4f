use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Tree operations themselves never fail; these come from reading crime rows and writing KML.
#[derive(Error, Debug)]
pub enum CrimeTreeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Expected at least {expected} fields, found {found}: {line}")]
    MalformedRow {
        line: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid number in field `{field}`: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CrimeTreeError>;
