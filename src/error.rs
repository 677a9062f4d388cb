use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tricount operations.
///
/// Parse-level problems are not errors in this sense: they accumulate as
/// diagnostics on the parse report. This type covers the cases where no
/// parse happens at all (unreadable source) and `check` failures.
#[derive(Error, Diagnostic, Debug)]
pub enum StlError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tricount::io))]
    IoError(#[from] std::io::Error),

    #[error("cannot read {}: {}", path.display(), message)]
    #[diagnostic(code(tricount::read))]
    Read {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(tricount::json))]
    Json(#[from] serde_json::Error),

    #[error("{message}")]
    #[diagnostic(code(tricount::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, StlError>;
