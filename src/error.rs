use std::path::PathBuf;
use thiserror::Error;

/// Marker for "a fatal error was already written to the diagnostic stream".
///
/// Carries no message on purpose: whoever constructs it has reported the
/// failure already, so the only thing left to decide is the exit code. Build
/// it through [`crate::cli::context::Context::fatal`] (or the `fatal!` macro)
/// rather than directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("fatal error already reported")]
pub struct Reported;

/// Outcome of a command handler.
pub type CommandResult = std::result::Result<(), Reported>;

/// Failures raised below the command boundary (filesystem, name validation).
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no Revel application found at '{path}' (missing conf/app.conf)")]
    NotAnApp { path: PathBuf },

    #[error("models directory '{path}' does not exist; run setup first")]
    MissingModels { path: PathBuf },

    #[error("invalid model name '{0}': must start with a letter and contain only letters and digits")]
    InvalidName(String),

    #[error("model name '{name}' is reserved: it would map to '{file}'")]
    ReservedName { name: String, file: String },

    #[error("invalid field '{0}': expected name:type")]
    InvalidField(String),

    #[error("unknown field type '{kind}' for field '{field}' (known: {known})")]
    UnknownType {
        field: String,
        kind: String,
        known: String,
    },

    #[error("field '{0}' clashes with the generated {0} member")]
    ReservedField(String),

    #[error("field '{field}' duplicates an earlier field (both become {go_name})")]
    DuplicateField { field: String, go_name: String },

    #[error("'{path}' already exists (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    #[error("'{path}' does not exist")]
    NotFound { path: PathBuf },
}

impl ScaffoldError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
