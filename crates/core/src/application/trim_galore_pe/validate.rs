// Task validation and command construction (pure, no I/O)

use crate::domain::error::{DomainError, Result};
use crate::domain::paths::dirname;
use crate::domain::{
    PairedReads, TaskDescriptor, TrimCommand, EXPECTED_OUTPUTS, EXPECTED_READS, FORBIDDEN_FLAG,
    READS_PATTERN, TRIM_GALORE_PROGRAM,
};

/// Pick the two read files out of the inputs, keeping their order
pub fn select_reads(inputs: &[String]) -> Result<PairedReads> {
    let reads: Vec<&String> = inputs
        .iter()
        .filter(|path| path.contains(READS_PATTERN))
        .collect();

    if reads.len() != EXPECTED_READS {
        return Err(DomainError::ReadCount { found: reads.len() });
    }

    Ok(PairedReads {
        r1: reads[0].clone(),
        r2: reads[1].clone(),
    })
}

/// Reject caller-supplied `--fastqc`; the adapter adds its own
pub fn check_extra_params(extra: &str) -> Result<()> {
    if extra.contains(FORBIDDEN_FLAG) {
        return Err(DomainError::ForbiddenFlag);
    }
    Ok(())
}

pub fn check_output_count(outputs: &[String]) -> Result<()> {
    if outputs.len() != EXPECTED_OUTPUTS {
        return Err(DomainError::OutputCount {
            found: outputs.len(),
        });
    }
    Ok(())
}

/// Shared directory of all outputs (literal string comparison)
pub fn resolve_output_dir(outputs: &[String]) -> Result<String> {
    let Some((first, rest)) = outputs.split_first() else {
        return Err(DomainError::OutputCount { found: 0 });
    };

    let out_dir = dirname(first);
    for path in rest {
        let dir = dirname(path);
        if dir != out_dir {
            return Err(DomainError::OutputDirMismatch {
                expected: out_dir.to_string(),
                found: dir.to_string(),
                path: path.clone(),
            });
        }
    }

    Ok(out_dir.to_string())
}

/// Validate the task and build the invocation of `program`
pub fn build_command_for(task: &TaskDescriptor, program: &str) -> Result<TrimCommand> {
    let reads = select_reads(&task.inputs)?;

    let extra = task.params.extra();
    check_extra_params(extra)?;

    check_output_count(&task.outputs)?;
    let out_dir = resolve_output_dir(&task.outputs)?;

    Ok(TrimCommand {
        program: program.to_string(),
        extra: extra.to_string(),
        out_dir,
        reads,
        log: task.log.clone(),
    })
}

/// Validate the task and build the default `trim_galore` invocation
pub fn build_command(task: &TaskDescriptor) -> Result<TrimCommand> {
    build_command_for(task, TRIM_GALORE_PROGRAM)
}
