use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appicon operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    #[diagnostic(code(appicon::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(appicon::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Source logo not found: {path}")]
    #[diagnostic(code(appicon::source))]
    SourceNotFound {
        path: std::path::PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid dimension: {size}px with {padding}% padding leaves no room for the logo")]
    #[diagnostic(code(appicon::dimension))]
    InvalidDimension { size: u32, padding: f64 },

    #[error("Validation error: {message}")]
    #[diagnostic(code(appicon::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{failed} of {total} icons failed")]
    #[diagnostic(code(appicon::batch))]
    Batch { failed: usize, total: usize },
}

impl IconError {
    /// Short label for per-entry failure reports.
    pub fn kind(&self) -> &'static str {
        match self {
            IconError::IoError(_) | IconError::Io { .. } => "io",
            IconError::SourceNotFound { .. } => "source-not-found",
            IconError::InvalidDimension { .. } => "invalid-dimension",
            IconError::Validation { .. } => "validation",
            IconError::Batch { .. } => "batch",
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
