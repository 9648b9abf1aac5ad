//! End-to-end tests: real ShellExecutor against a stub trim_galore script

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use trim_galore_pe_core::domain::{DomainError, LogDirective, TaskDescriptor};
use trim_galore_pe_core::port::time_provider::SystemTimeProvider;
use trim_galore_pe_core::{AppError, TrimGalorePe};
use trim_galore_pe_infra_system::ShellExecutor;

/// Fresh scratch directory per test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "trim_galore_pe_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Stub that records its arguments one per line and exits with `exit_code`
fn write_stub(dir: &Path, exit_code: i32) -> PathBuf {
    let stub = dir.join("trim_galore");
    let args_file = dir.join("args.txt");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\necho 'stub stdout'\necho 'stub stderr' >&2\nexit {}\n",
        args_file.display(),
        exit_code
    );
    std::fs::write(&stub, script).unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();
    stub
}

fn recorded_args(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("args.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn outputs_in(dir: &Path) -> Vec<String> {
    (1..=8)
        .map(|i| dir.join(format!("out_{i}")).display().to_string())
        .collect()
}

fn service(stub: &Path) -> TrimGalorePe {
    let executor = Arc::new(ShellExecutor::new(Arc::new(SystemTimeProvider)));
    TrimGalorePe::new(executor).with_program(stub.display().to_string())
}

#[tokio::test]
async fn test_arguments_reach_tool_in_order() {
    let dir = scratch_dir("args_order");
    let stub = write_stub(&dir, 0);
    let out_dir = dir.join("trimmed");
    let task = TaskDescriptor::new(
        vec![
            "adapters.fa".to_string(),
            "s_R1.fastq.gz".to_string(),
            "s_R2.fastq.gz".to_string(),
        ],
        outputs_in(&out_dir),
    )
    .with_extra("-q 20 --length 36")
    .with_log(LogDirective::to_file(dir.join("trim.log").display().to_string()));

    service(&stub).run(&task).await.unwrap();

    assert_eq!(
        recorded_args(&dir),
        vec![
            "-q".to_string(),
            "20".to_string(),
            "--length".to_string(),
            "36".to_string(),
            "--paired".to_string(),
            "--fastqc".to_string(),
            "-o".to_string(),
            out_dir.display().to_string(),
            "s_R1.fastq.gz".to_string(),
            "s_R2.fastq.gz".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_log_captures_both_streams() {
    let dir = scratch_dir("log_capture");
    let stub = write_stub(&dir, 0);
    let log_path = dir.join("trim.log");
    let task = TaskDescriptor::new(
        vec!["a_R1.fastq.gz".to_string(), "a_R2.fastq.gz".to_string()],
        outputs_in(&dir),
    )
    .with_log(LogDirective::to_file(log_path.display().to_string()));

    service(&stub).run(&task).await.unwrap();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("stub stdout"));
    assert!(log.contains("stub stderr"));
}

#[tokio::test]
async fn test_log_append_keeps_previous_content() {
    let dir = scratch_dir("log_append");
    let stub = write_stub(&dir, 0);
    let log_path = dir.join("trim.log");
    std::fs::write(&log_path, "earlier run\n").unwrap();
    let task = TaskDescriptor::new(
        vec!["a_R1.fastq.gz".to_string(), "a_R2.fastq.gz".to_string()],
        outputs_in(&dir),
    )
    .with_log(LogDirective::to_file(log_path.display().to_string()).appending());

    service(&stub).run(&task).await.unwrap();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.starts_with("earlier run\n"));
    assert!(log.contains("stub stdout"));
}

#[tokio::test]
async fn test_non_zero_exit_propagates() {
    let dir = scratch_dir("exit_code");
    let stub = write_stub(&dir, 3);
    let task = TaskDescriptor::new(
        vec!["a_R1.fastq.gz".to_string(), "a_R2.fastq.gz".to_string()],
        outputs_in(&dir),
    )
    .with_log(LogDirective::to_file(dir.join("trim.log").display().to_string()));

    let err = service(&stub).run(&task).await.unwrap_err();

    assert!(matches!(err, AppError::ExternalTool { code: Some(3) }));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_rejected_task_spawns_nothing() {
    let dir = scratch_dir("rejected");
    let stub = write_stub(&dir, 0);
    let task = TaskDescriptor::new(
        vec!["a_R1.fastq.gz".to_string(), "a_R2.fastq.gz".to_string()],
        outputs_in(&dir),
    )
    .with_extra("--fastqc");

    let err = service(&stub).run(&task).await.unwrap_err();

    assert!(matches!(err, AppError::Domain(DomainError::ForbiddenFlag)));
    assert!(!dir.join("args.txt").exists());
}

#[tokio::test]
async fn test_descriptor_from_json() {
    let dir = scratch_dir("json_descriptor");
    let stub = write_stub(&dir, 0);
    let outputs = outputs_in(&dir);
    let json = serde_json::json!({
        "inputs": ["x_1.fastq.gz", "x_2.fastq.gz"],
        "outputs": outputs,
        "params": {"extra": "--illumina"},
        "log": {"path": dir.join("trim.log").display().to_string(), "stdout": false}
    });
    let task: TaskDescriptor = serde_json::from_value(json).unwrap();

    service(&stub).run(&task).await.unwrap();

    let args = recorded_args(&dir);
    assert_eq!(args.first().map(String::as_str), Some("--illumina"));
    // stderr only: stdout is not captured in the log
    let log = std::fs::read_to_string(dir.join("trim.log")).unwrap();
    assert!(log.contains("stub stderr"));
    assert!(!log.contains("stub stdout"));
}

#[tokio::test]
async fn test_relative_paths_resolve_in_working_dir() {
    let dir = scratch_dir("working_dir");
    let stub = write_stub(&dir, 0);
    let executor =
        Arc::new(ShellExecutor::new(Arc::new(SystemTimeProvider)).with_working_dir(&dir));
    let service = TrimGalorePe::new(executor).with_program(stub.display().to_string());
    let task = TaskDescriptor::new(
        vec!["a_R1.fastq.gz".to_string(), "a_R2.fastq.gz".to_string()],
        (1..=8).map(|i| format!("trimmed/out_{i}")).collect(),
    )
    .with_log(LogDirective::to_file("logs_trim.log"));

    service.run(&task).await.unwrap();

    assert!(dir.join("logs_trim.log").exists());
    assert_eq!(recorded_args(&dir)[3], "trimmed");
}
