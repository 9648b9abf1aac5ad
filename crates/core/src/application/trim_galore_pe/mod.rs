// trim_galore paired-end use case: validate, build, run

pub mod validate;

pub use validate::{build_command, build_command_for};

use crate::domain::{TaskDescriptor, TrimCommand, TRIM_GALORE_PROGRAM};
use crate::error::{AppError, Result};
use crate::port::{CommandExecutor, ExecutionStatus};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs one trimming task through a command executor
pub struct TrimGalorePe {
    executor: Arc<dyn CommandExecutor>,
    program: String,
}

impl TrimGalorePe {
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            executor,
            program: TRIM_GALORE_PROGRAM.to_string(),
        }
    }

    /// Use a different trim_galore executable (path or name)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Validate the task and build the command without running it
    pub fn prepare(&self, task: &TaskDescriptor) -> Result<TrimCommand> {
        let command = build_command_for(task, &self.program).inspect_err(|e| {
            debug!(error = %e, "Task rejected");
        })?;

        debug!(
            r1 = %command.reads.r1,
            r2 = %command.reads.r2,
            out_dir = %command.out_dir,
            "Task validated"
        );
        Ok(command)
    }

    /// Validate, then run trim_galore to completion.
    ///
    /// # Errors
    /// - AppError::Domain if the task is malformed (nothing is spawned)
    /// - AppError::Execution if the process cannot be spawned or awaited
    /// - AppError::ExternalTool if trim_galore exits unsuccessfully
    pub async fn run(&self, task: &TaskDescriptor) -> Result<TrimCommand> {
        let command = self.prepare(task)?;

        let result = self.executor.execute(&command).await?;

        match result.status {
            ExecutionStatus::Success => {
                info!(duration_ms = result.duration_ms, "trim_galore finished");
                Ok(command)
            }
            ExecutionStatus::Failed | ExecutionStatus::Killed => {
                warn!(
                    exit_code = ?result.exit_code,
                    status = ?result.status,
                    "trim_galore failed"
                );
                Err(AppError::ExternalTool {
                    code: result.exit_code,
                })
            }
        }
    }
}
