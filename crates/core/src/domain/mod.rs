// Domain Layer - Task descriptor, validation rules and the trim_galore command

pub mod command;
pub mod error;
pub mod paths;
pub mod task;

// Re-exports
pub use command::{Arg, PairedReads, TrimCommand};
pub use error::DomainError;
pub use task::{LogDirective, Params, TaskDescriptor};

/// Executable invoked when no override is configured
pub const TRIM_GALORE_PROGRAM: &str = "trim_galore";

/// Substring identifying read files among the inputs
pub const READS_PATTERN: &str = "fastq.gz";

/// Paired-end: forward and reverse
pub const EXPECTED_READS: usize = 2;

/// Files trim_galore produces with `--paired --fastqc`
pub const EXPECTED_OUTPUTS: usize = 8;

/// Flag callers must not pass through `params.extra`
pub const FORBIDDEN_FLAG: &str = "--fastqc";
