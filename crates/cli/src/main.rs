//! trim-galore-pe - run trim_galore on paired-end reads as one workflow step

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use trim_galore_pe_core::domain::{LogDirective, TaskDescriptor, TrimCommand, TRIM_GALORE_PROGRAM};
use trim_galore_pe_core::port::time_provider::SystemTimeProvider;
use trim_galore_pe_core::{AppError, TrimGalorePe};
use trim_galore_pe_infra_system::subprocess_executor::DEFAULT_SHELL;
use trim_galore_pe_infra_system::ShellExecutor;

#[derive(Parser, Debug)]
#[command(name = "trim-galore-pe")]
#[command(about = "Validate a paired-end trimming task and run trim_galore", long_about = None)]
#[command(version)]
struct Cli {
    /// Task descriptor (JSON: inputs, outputs, params.extra, log)
    #[arg(short, long)]
    task: Option<PathBuf>,

    /// Input file (repeatable, appended to the descriptor's inputs)
    #[arg(short, long = "input")]
    inputs: Vec<String>,

    /// Expected output file (repeatable, appended to the descriptor's outputs)
    #[arg(short, long = "output")]
    outputs: Vec<String>,

    /// Extra flags passed verbatim to trim_galore
    #[arg(short, long, allow_hyphen_values = true)]
    extra: Option<String>,

    /// Log file receiving trim_galore's stdout and stderr
    #[arg(short, long)]
    log: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long, requires = "log")]
    log_append: bool,

    /// trim_galore executable
    #[arg(long, env = "TRIM_GALORE_BIN", default_value = TRIM_GALORE_PROGRAM)]
    trim_galore: String,

    /// Shell used to run the command line
    #[arg(long, env = "TRIM_GALORE_PE_SHELL", default_value = DEFAULT_SHELL)]
    shell: String,

    /// Validate and print the command without running it
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Descriptor from `--task`, with flags applied on top
    fn task_descriptor(&self) -> Result<TaskDescriptor> {
        let mut task = match &self.task {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read task file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid task descriptor in {}", path.display()))?
            }
            None => TaskDescriptor::default(),
        };

        task.inputs.extend(self.inputs.iter().cloned());
        task.outputs.extend(self.outputs.iter().cloned());
        if let Some(extra) = &self.extra {
            task.params.extra = Some(extra.clone());
        }
        if let Some(log) = &self.log {
            task.log = LogDirective::to_file(log.clone());
        }
        if self.log_append {
            task.log.append = true;
        }

        Ok(task)
    }
}

async fn run(cli: Cli) -> Result<()> {
    let task = cli.task_descriptor()?;

    let executor = Arc::new(ShellExecutor::new(Arc::new(SystemTimeProvider)).with_shell(&cli.shell));
    let service = TrimGalorePe::new(executor).with_program(&cli.trim_galore);

    let command = run_task(&service, &task, cli.dry_run).await?;
    if cli.dry_run {
        println!("{}", command);
    }
    Ok(())
}

/// Validate the task; run it unless `dry_run`
async fn run_task(
    service: &TrimGalorePe,
    task: &TaskDescriptor,
    dry_run: bool,
) -> Result<TrimCommand> {
    if dry_run {
        return Ok(service.prepare(task)?);
    }

    let command = service.run(task).await?;
    info!(out_dir = %command.out_dir, "Trimming step completed");
    Ok(command)
}

/// Process exit code for a failed run: the child's code when trim_galore failed, else 1
fn exit_code(e: &anyhow::Error) -> i32 {
    e.downcast_ref::<AppError>().map_or(1, AppError::exit_code)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("{} {:#}", "warning:".yellow().bold(), e);
    }

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(exit_code(&e));
    }
}
