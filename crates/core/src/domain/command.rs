// trim_galore Command Model
//
// Arguments stay structured until `to_shell`, which the executor calls at the
// spawn boundary.

use serde::{Deserialize, Serialize};

use super::paths::output_dir_arg;
use super::task::LogDirective;

/// Forward and reverse read files, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedReads {
    pub r1: String,
    pub r2: String,
}

/// A validated trim_galore invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimCommand {
    pub program: String,
    /// Caller's extra flags, kept as one raw shell fragment
    pub extra: String,
    pub out_dir: String,
    pub reads: PairedReads,
    pub log: LogDirective,
}

/// One element of the argument list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arg {
    /// Shell fragment inserted as-is (the caller's extra flags)
    Raw(String),
    /// Single word, quoted when serialized
    Word(String),
}

impl Arg {
    pub fn word(value: impl Into<String>) -> Self {
        Arg::Word(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Arg::Raw(s) | Arg::Word(s) => s,
        }
    }

    /// Shell form of this element
    pub fn render(&self) -> String {
        match self {
            Arg::Raw(s) => s.clone(),
            Arg::Word(s) => shell_quote(s),
        }
    }
}

impl TrimCommand {
    /// Argument list after the program name.
    ///
    /// The extra fragment (if any) is a single raw element and is not re-tokenized.
    pub fn args(&self) -> Vec<Arg> {
        let mut args = Vec::with_capacity(7);
        let extra = self.extra.trim();
        if !extra.is_empty() {
            args.push(Arg::Raw(extra.to_string()));
        }
        args.push(Arg::word("--paired"));
        args.push(Arg::word("--fastqc"));
        args.push(Arg::word("-o"));
        args.push(Arg::word(output_dir_arg(&self.out_dir)));
        args.push(Arg::word(self.reads.r1.as_str()));
        args.push(Arg::word(self.reads.r2.as_str()));
        args
    }

    /// Flat shell string: `(program <extra> --paired --fastqc -o <dir> <r1> <r2>)<log>`
    pub fn to_shell(&self) -> String {
        let words: Vec<String> = std::iter::once(shell_quote_program(&self.program))
            .chain(self.args().iter().map(Arg::render))
            .collect();

        format!("({}){}", words.join(" "), self.log.render())
    }
}

impl std::fmt::Display for TrimCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_shell())
    }
}

/// Quote a single word for POSIX shells; plain words pass through unchanged
pub fn shell_quote(word: &str) -> String {
    let is_plain = !word.is_empty()
        && word
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"_-./,:=+@%".contains(&b));
    if is_plain {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// Quote the command word; `NAME=value` there would be read as an assignment
fn shell_quote_program(program: &str) -> String {
    if program.contains('=') {
        return format!("'{}'", program.replace('\'', r"'\''"));
    }
    shell_quote(program)
}
