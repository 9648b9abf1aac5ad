// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Input must contain 2 fastq files. Given: {found}.")]
    ReadCount { found: usize },

    #[error(
        "The trim_galore paired-end adapter cannot be run with the `--fastqc` flag. \
         Please remove the flag from extra params. \
         You can use the fastqc wrapper on the input and output files instead."
    )]
    ForbiddenFlag,

    #[error("Output must contain 8 files. Given: {found}.")]
    OutputCount { found: usize },

    #[error(
        "trim_galore can only output files to a single directory. \
         Please indicate only one directory for the output files \
         (expected '{expected}', found '{found}' for {path})."
    )]
    OutputDirMismatch {
        expected: String,
        found: String,
        path: String,
    },
}

impl DomainError {
    /// Shape errors in the task's inputs or outputs
    pub fn is_validation(&self) -> bool {
        !self.is_configuration()
    }

    /// Errors in caller-supplied parameters
    pub fn is_configuration(&self) -> bool {
        matches!(self, DomainError::ForbiddenFlag)
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
