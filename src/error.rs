//! Error types for batchop.
//!
//! Error codes are organized by category:
//!
//! - **BOP-E001 to BOP-E099**: Filesystem and I/O errors
//! - **BOP-E100 to BOP-E199**: Command and predicate parsing errors
//! - **BOP-E200 to BOP-E299**: Batch execution errors
//! - **BOP-E300 to BOP-E399**: Interactive session errors
//! - **BOP-E900 to BOP-E999**: Internal errors

use thiserror::Error;

/// Main error type for batchop operations.
///
/// Parsing errors are recoverable: they are reported to the caller and, in
/// the interactive session, never terminate the loop or mutate the live
/// selection. [`BopError::DoubleNegation`] and [`BopError::PatternTable`]
/// signal a defect in the built-in pattern table rather than bad user input.
#[derive(Error, Debug)]
pub enum BopError {
    /// Root directory does not exist or is not a directory.
    #[error("Root directory not found: {path}")]
    RootNotFound { path: String },

    /// Empty command string provided.
    #[error("Command cannot be empty")]
    EmptyCommand,

    /// First word of the command is not a known command.
    #[error("Unknown command: {word}")]
    UnknownCommand { word: String },

    /// Command is documented but not implemented yet.
    #[error("Unsupported command: {word}")]
    UnsupportedCommand { word: String },

    /// No predicate phrase matches at this word.
    #[error("Unknown predicate at: {word}")]
    UnknownPredicate { word: String },

    /// User-supplied glob pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {reason}")]
    BadPattern { pattern: String, reason: String },

    /// The external remover reported failure for a path.
    #[error("Delete failed for {path}: {reason}")]
    DeleteFailed { path: String, reason: String },

    /// Reading a line of interactive input failed.
    #[error("Input error: {reason}")]
    Readline { reason: String },

    /// Two negation markers matched within a single phrase.
    #[error("Phrase matched two negation markers")]
    DoubleNegation,

    /// A phrase's captures did not line up with its filter constructor.
    #[error("Pattern table error: {detail}")]
    PatternTable { detail: &'static str },

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BopError {
    /// Returns the error code for this error.
    pub const fn error_code(&self) -> &'static str {
        match self {
            BopError::RootNotFound { .. } => "BOP-E001",
            BopError::IoError(_) => "BOP-E002",
            BopError::EmptyCommand => "BOP-E101",
            BopError::UnknownCommand { .. } => "BOP-E102",
            BopError::UnsupportedCommand { .. } => "BOP-E103",
            BopError::UnknownPredicate { .. } => "BOP-E104",
            BopError::BadPattern { .. } => "BOP-E105",
            BopError::DeleteFailed { .. } => "BOP-E201",
            BopError::Readline { .. } => "BOP-E301",
            BopError::DoubleNegation => "BOP-E901",
            BopError::PatternTable { .. } => "BOP-E902",
        }
    }

    /// Returns a short machine-readable name for this error.
    pub const fn name(&self) -> &'static str {
        match self {
            BopError::RootNotFound { .. } => "root_not_found",
            BopError::IoError(_) => "io_error",
            BopError::EmptyCommand => "empty_command",
            BopError::UnknownCommand { .. } => "unknown_command",
            BopError::UnsupportedCommand { .. } => "unsupported_command",
            BopError::UnknownPredicate { .. } => "unknown_predicate",
            BopError::BadPattern { .. } => "bad_pattern",
            BopError::DeleteFailed { .. } => "delete_failed",
            BopError::Readline { .. } => "readline",
            BopError::DoubleNegation => "double_negation",
            BopError::PatternTable { .. } => "pattern_table",
        }
    }

    /// Returns the severity level for this error.
    pub const fn severity(&self) -> &'static str {
        match self {
            BopError::DoubleNegation | BopError::PatternTable { .. } => "bug",
            _ => "error",
        }
    }

    /// Returns remediation hints for this error, if available.
    pub const fn remediation(&self) -> Option<&'static str> {
        match self {
            BopError::RootNotFound { .. } => {
                Some("Ensure the root path exists and is a directory.")
            }
            BopError::EmptyCommand => {
                Some("Provide a command such as 'list files' or 'count everything'.")
            }
            BopError::UnknownCommand { .. } => {
                Some("Supported commands: list, count, delete.")
            }
            BopError::UnsupportedCommand { .. } => {
                Some("This command is planned but not implemented. Use list, count or delete.")
            }
            BopError::UnknownPredicate { .. } => {
                Some("Predicates include: is a file, is a folder, is empty, is hidden, named <glob>, in <glob>, bigger than <n> <unit>, ends with <ext>. Prefix with 'not' to negate.")
            }
            BopError::BadPattern { .. } => {
                Some("Patterns use shell glob syntax: *, ? and bracket classes.")
            }
            BopError::DeleteFailed { .. } => {
                Some("Check permissions on the listed path; earlier deletions are not rolled back.")
            }
            BopError::Readline { .. } => None,
            BopError::DoubleNegation | BopError::PatternTable { .. } => {
                Some("This is a bug in the built-in pattern table, not in your input.")
            }
            BopError::IoError(_) => Some("Check file permissions and disk space."),
        }
    }
}
