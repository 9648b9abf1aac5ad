// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] crate::domain::DomainError),

    /// trim_galore ran but exited unsuccessfully (`None` when killed by a signal)
    #[error("trim_galore failed with exit code {}", display_code(.code))]
    ExternalTool { code: Option<i32> },

    #[error("Execution error: {0}")]
    Execution(#[from] crate::port::ExecutionError),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

impl AppError {
    /// Exit code the adapter itself should terminate with
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ExternalTool { code: Some(c) } if *c != 0 => *c,
            _ => 1,
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
