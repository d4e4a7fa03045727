//! Tool Runner Port
//!
//! Launch an external program, block until it exits, classify the result.
//! Implementations: `ProcessRunner` (real child processes) and scripted
//! runners in tests.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::StageOutcome;

/// A fully specified external command.
///
/// Arguments are passed to the program verbatim; no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: OsString,
    args: Vec<OsString>,
    working_dir: Option<PathBuf>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Run the program inside `dir` instead of the current directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Program name for diagnostics
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Command line as a user would type it (for display only)
    pub fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|part| quote_for_display(&part.to_string_lossy()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.working_dir {
            Some(dir) => write!(f, "{} (in '{}')", self.command_line(), dir.display()),
            None => f.write_str(&self.command_line()),
        }
    }
}

fn quote_for_display(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+@%".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// Trait for running external tools.
pub trait ToolRunner {
    /// Run the invocation to completion and classify how it ended.
    fn run(&self, invocation: &ToolInvocation) -> StageOutcome;
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn run(&self, invocation: &ToolInvocation) -> StageOutcome {
        (**self).run(invocation)
    }
}
