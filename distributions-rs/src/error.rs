//! Driver error types.

use thiserror::Error;
use ziggurat_rs::TableError;

/// Errors reported by the `distributions` command line.
#[derive(Error, Debug)]
pub enum CliError {
    /// A flag value that parses but makes no sense for the command.
    #[error("invalid argument --{name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The sampler tables failed validation.
    #[error("ziggurat tables failed validation: {0}")]
    Tables(#[from] TableError),
}

impl CliError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias for driver operations.
pub type Result<T> = std::result::Result<T, CliError>;
