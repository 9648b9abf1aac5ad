// Shell executor: runs a TrimCommand through `<shell> -c`
// reason: tokio for async process management, shell for the log redirection fragment
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::info;

use trim_galore_pe_core::domain::TrimCommand;
use trim_galore_pe_core::port::task_executor::{
    CommandExecutor, ExecutionError, ExecutionResult,
};
use trim_galore_pe_core::port::TimeProvider;

/// Default shell used to interpret the command line
pub const DEFAULT_SHELL: &str = "bash";

/// Strict-mode prologue prepended to every command
const STRICT_MODE: &str = "set -euo pipefail; ";

/// Shell executor
/// Serializes the structured command only here, at the spawn boundary
pub struct ShellExecutor {
    time_provider: Arc<dyn TimeProvider>,
    shell: String,
    working_dir: Option<PathBuf>,
}

impl ShellExecutor {
    /// Create a new shell executor
    ///
    /// # Example
    /// ```ignore
    /// let executor = ShellExecutor::new(Arc::new(SystemTimeProvider)).with_shell("/bin/bash");
    /// ```
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            time_provider,
            shell: DEFAULT_SHELL.to_string(),
            working_dir: None,
        }
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Full script handed to `<shell> -c`
    pub fn script(&self, command: &TrimCommand) -> String {
        format!("{}{}", STRICT_MODE, command.to_shell())
    }

    /// Spawn child process and wait for its exit status.
    /// stdout/stderr are inherited; the log fragment redirects them.
    async fn spawn_and_wait(&self, script: &str) -> Result<std::process::ExitStatus, ExecutionError> {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| ExecutionError::SpawnFailed(format!("{}: {}", self.shell, e)))?;

        child
            .wait()
            .await
            .map_err(|e| ExecutionError::IoError(e.to_string()))
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command: &TrimCommand) -> Result<ExecutionResult, ExecutionError> {
        let script = self.script(command);
        let start_time = self.time_provider.now_millis();

        info!(
            shell = %self.shell,
            command = %command,
            working_dir = ?self.working_dir,
            "Starting trim_galore"
        );

        let status = self.spawn_and_wait(&script).await?;

        let duration_ms = self.time_provider.now_millis() - start_time;
        let result = ExecutionResult::from_exit_code(status.code(), duration_ms);

        info!(
            duration_ms = %duration_ms,
            exit_code = ?result.exit_code,
            status = ?result.status,
            "trim_galore process exited"
        );

        Ok(result)
    }
}
