use crate::shader::FileList;

use anyhow::Context;
use std::ffi::{OsStr, OsString};
use std::process::{Command, ExitStatus};

pub const DEFAULT_PROGRAM: &str = "glslc";
pub const COMPILE_ONLY_FLAG: &str = "-c";

/// External shader compiler, run once over a whole [`FileList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    program: OsString,
}

impl Compiler {
    pub fn new<S: Into<OsString>>(program: S) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Arguments passed to the compiler: `-c` followed by one argument per file.
    pub fn args<'a>(&self, files: &'a FileList) -> impl Iterator<Item = &'a OsStr> {
        std::iter::once(OsStr::new(COMPILE_ONLY_FLAG))
            .chain(files.iter().map(|path| path.as_os_str()))
    }

    pub fn command(&self, files: &FileList) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(files));
        cmd
    }

    /// Human readable rendering of the command line, for logs and dry runs.
    pub fn display(&self, files: &FileList) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args(files))
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the compiler and blocks until it exits.
    ///
    /// The child inherits stdio, its diagnostics go straight to the terminal.
    pub fn invoke(&self, files: &FileList) -> Result<ExitStatus, anyhow::Error> {
        let program = self.program.to_string_lossy();
        if files.is_empty() {
            log::warn!("No shader sources found, running {program} without inputs");
        }
        log::info!("running {}", self.display(files));

        let status = self
            .command(files)
            .status()
            .with_context(|| format!("failed to run shader compiler {program}"))?;

        if !status.success() {
            log::warn!("{program} exited with {status}");
        }
        Ok(status)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}
