// Command Executor Port
// Abstraction for running a validated trim_galore command

use crate::domain::TrimCommand;
use async_trait::async_trait;
use thiserror::Error;

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub duration_ms: i64,
    pub exit_code: Option<i32>,
}

impl ExecutionResult {
    pub fn from_exit_code(exit_code: Option<i32>, duration_ms: i64) -> Self {
        let status = match exit_code {
            Some(0) => ExecutionStatus::Success,
            Some(_) => ExecutionStatus::Failed,
            None => ExecutionStatus::Killed,
        };
        Self {
            status,
            duration_ms,
            exit_code,
        }
    }
}

/// Execution status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStatus {
    Success,
    Failed,
    /// Terminated by a signal, no exit code
    Killed,
}

/// Execution errors (the child never produced an exit status)
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Command Executor trait
///
/// Implementations:
/// - ShellExecutor (infra-system): runs the command through a shell
/// - MockCommandExecutor: records commands for tests
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run the command to completion.
    ///
    /// A non-zero exit is reported through `ExecutionResult`, not as an error.
    ///
    /// # Errors
    /// - ExecutionError::SpawnFailed if the process cannot be started
    /// - ExecutionError::IoError if waiting on the process fails
    async fn execute(&self, command: &TrimCommand) -> Result<ExecutionResult, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock executor behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Exit with the given code
        Exit(i32),
        /// Terminated by a signal
        Killed,
        /// Fail to spawn with message
        SpawnFail(String),
    }

    /// Mock Command Executor for testing
    pub struct MockCommandExecutor {
        behavior: MockBehavior,
        commands: Arc<Mutex<Vec<TrimCommand>>>,
    }

    impl MockCommandExecutor {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                commands: Arc::new(Mutex::new(Vec::new())),
            }
        }
        pub fn new_success() -> Self {
            Self::new(MockBehavior::Exit(0))
        }
        pub fn new_exit(code: i32) -> Self {
            Self::new(MockBehavior::Exit(code))
        }
        pub fn call_count(&self) -> usize {
            self.commands.lock().unwrap().len()
        }
        pub fn commands(&self) -> Vec<TrimCommand> {
            self.commands.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandExecutor for MockCommandExecutor {
        async fn execute(&self, command: &TrimCommand) -> Result<ExecutionResult, ExecutionError> {
            self.commands.lock().unwrap().push(command.clone());

            match &self.behavior {
                MockBehavior::Exit(code) => Ok(ExecutionResult::from_exit_code(Some(*code), 10)),
                MockBehavior::Killed => Ok(ExecutionResult::from_exit_code(None, 10)),
                MockBehavior::SpawnFail(msg) => Err(ExecutionError::SpawnFailed(msg.clone())),
            }
        }
    }
}
