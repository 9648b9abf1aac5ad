// Task Descriptor (supplied by the workflow engine)

use serde::{Deserialize, Serialize};

use super::command::shell_quote;

/// One trimming step as described by the workflow engine.
///
/// Read-only: validation borrows it and derives new values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Input paths in engine order; may include non-read files
    #[serde(default)]
    pub inputs: Vec<String>,

    /// Expected output paths
    #[serde(default)]
    pub outputs: Vec<String>,

    #[serde(default)]
    pub params: Params,

    #[serde(default)]
    pub log: LogDirective,
}

impl TaskDescriptor {
    pub fn new(inputs: Vec<String>, outputs: Vec<String>) -> Self {
        Self {
            inputs,
            outputs,
            ..Default::default()
        }
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.params.extra = Some(extra.into());
        self
    }

    pub fn with_log(mut self, log: LogDirective) -> Self {
        self.log = log;
        self
    }
}

/// Tool parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Free-form flags passed to trim_galore verbatim
    #[serde(default)]
    pub extra: Option<String>,
}

impl Params {
    /// Extra flags, empty when absent
    pub fn extra(&self) -> &str {
        self.extra.as_deref().unwrap_or("")
    }
}

/// Where the tool's stdout/stderr go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDirective {
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default = "default_true")]
    pub stdout: bool,

    #[serde(default = "default_true")]
    pub stderr: bool,

    #[serde(default)]
    pub append: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LogDirective {
    fn default() -> Self {
        Self {
            path: None,
            stdout: true,
            stderr: true,
            append: false,
        }
    }
}

impl LogDirective {
    /// Capture both streams into `path`
    pub fn to_file(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn appending(mut self) -> Self {
        self.append = true;
        self
    }

    pub fn stderr_only(mut self) -> Self {
        self.stdout = false;
        self.stderr = true;
        self
    }

    /// Shell redirection fragment, with a leading space when non-empty
    pub fn render(&self) -> String {
        let path = match &self.path {
            Some(p) if !p.is_empty() => shell_quote(p),
            _ => return String::new(),
        };
        let op = if self.append { ">>" } else { ">" };

        match (self.stdout, self.stderr) {
            (true, true) => format!(" {op} {path} 2>&1"),
            (false, true) => format!(" 2{op} {path}"),
            (true, false) => format!(" {op} {path}"),
            (false, false) => String::new(),
        }
    }
}
