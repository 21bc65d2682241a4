// Common error types for create-ts

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while asking the user questions
#[derive(Debug, Error)]
pub enum PromptError {
    /// An enumerated prompt was configured without any options
    #[error("No option specified")]
    NoOptions,

    /// Standard input reached end-of-file before an answer was given
    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while scaffolding a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Must use simple project name, given: {}", quoted(.0))]
    InvalidName(String),

    #[error("Target directory {} already exists and is not empty", .0.display())]
    TargetNotEmpty(PathBuf),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {file}: {source}")]
    Json {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Scaffolding task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl ScaffoldError {
    /// Attach the offending path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Render a name the way it was typed, quotes and escapes included
fn quoted(name: &str) -> String {
    serde_json::to_string(name).unwrap_or_else(|_| format!("\"{name}\""))
}

/// Error as presented to the person at the terminal
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    /// Validation and input problems the user can fix by re-running
    pub const EXIT_USAGE: i32 = 1;
    /// Filesystem failures
    pub const EXIT_IO: i32 = 2;
    /// Bugs and runtime failures
    pub const EXIT_INTERNAL: i32 = 3;

    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        let (hint, exit_code) = match err {
            ScaffoldError::InvalidName(_) => (
                Some("Use a single directory name such as my-project, or '.' for the current directory".to_string()),
                Self::EXIT_USAGE,
            ),
            ScaffoldError::TargetNotEmpty(_) => (
                Some("Choose a new project name or empty the directory first".to_string()),
                Self::EXIT_USAGE,
            ),
            ScaffoldError::Prompt(PromptError::InputClosed) => (None, Self::EXIT_USAGE),
            ScaffoldError::Io { .. } | ScaffoldError::Prompt(PromptError::Io(_)) => {
                (None, Self::EXIT_IO)
            }
            ScaffoldError::Json { .. }
            | ScaffoldError::Task(_)
            | ScaffoldError::Prompt(PromptError::NoOptions) => (None, Self::EXIT_INTERNAL),
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code,
        }
    }

    /// Print the error (and hint, if any) to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{hint}");
        }
    }
}
