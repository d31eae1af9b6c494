//! Error types for the command interpreter
//!
//! Every variant is recoverable at the session level: the failing
//! command is reported and the session continues unless the run was
//! configured to halt on the first error.

use thiserror::Error;

/// Errors raised while interpreting a command line
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The verb is not in the registry
    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),

    /// Wrong number of operands for a known verb
    #[error("wrong operand count for {verb}; usage: {usage}")]
    BadArity {
        verb: &'static str,
        usage: &'static str,
    },

    /// An operand failed to parse or validate
    #[error("bad operand for {verb}: {message}")]
    BadOperand {
        verb: &'static str,
        message: String,
    },

    /// Script files may only nest so deep
    #[error("script nesting exceeds {0} levels")]
    NestingLimit(usize),

    /// Core error (store lookups, pixel access)
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Transformation error
    #[error("operation error: {0}")]
    Op(#[from] rasterlab_ops::OpError),

    /// Loader/exporter failure
    #[error("I/O failure: {0}")]
    Io(#[from] rasterlab_io::IoError),
}

/// Result type for interpreter operations
pub type ScriptResult<T> = Result<T, ScriptError>;
