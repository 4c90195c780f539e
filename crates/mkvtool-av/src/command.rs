//! Builder for external tool invocations.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::{Error, Result};

/// Output captured from a tool execution.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Process exit status.
    pub status: ExitStatus,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

/// A program plus its argument list.
///
/// Building a command has no side effects; it only runs through
/// [`ToolCommand::execute`], which the live runner calls. Its `Display` form
/// is a shell-quoted command line, which is what dry-run mode prints.
///
/// # Example
///
/// ```
/// use mkvtool_av::ToolCommand;
///
/// let mut cmd = ToolCommand::new("mkvmerge");
/// cmd.arg("-o").arg("out file.mkv").arg("in.mkv");
/// assert_eq!(cmd.to_string(), "mkvmerge -o 'out file.mkv' in.mkv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// Create a new command for the given program path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(s.as_ref().to_os_string());
        self
    }

    /// Append multiple arguments.
    pub fn args<I, S>(&mut self, iter: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(iter.into_iter().map(|s| s.as_ref().to_os_string()));
        self
    }

    /// The program path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The arguments, in order.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Program file name, used in error messages.
    pub fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }

    /// Run the command to completion and capture its output, whatever the
    /// exit status.
    ///
    /// # Errors
    ///
    /// - [`Error::ToolNotFound`] if the program does not exist.
    /// - [`Error::ToolFailed`] for any other spawn failure.
    pub fn output(&self) -> Result<ToolOutput> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(self.tool_name())
                } else {
                    Error::tool_failed(self.tool_name(), format!("failed to spawn: {e}"))
                }
            })?;

        Ok(ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run the command to completion, capturing stdout and stderr.
    ///
    /// MKVToolNix exits with 0 on success, 1 when it finished with warnings
    /// and 2 on errors; status 1 counts as success.
    ///
    /// # Errors
    ///
    /// - [`Error::ToolNotFound`] if the program does not exist.
    /// - [`Error::ToolFailed`] for any other spawn failure or a failing exit
    ///   status (the message carries the tool's diagnostics).
    pub fn execute(&self) -> Result<ToolOutput> {
        let result = self.output()?;

        match result.status.code() {
            Some(0) => Ok(result),
            Some(1) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "{} finished with warnings: {}",
                    self.tool_name(),
                    diagnostics(&result)
                );
                Ok(result)
            }
            _ => Err(self.failure(&result)),
        }
    }

    /// `ToolFailed` describing a failing run of this command.
    pub(crate) fn failure(&self, output: &ToolOutput) -> Error {
        Error::tool_failed(
            self.tool_name(),
            format!("exited with {}: {}", output.status, diagnostics(output)),
        )
    }
}

/// MKVToolNix reports errors on stdout, other tools on stderr.
fn diagnostics(output: &ToolOutput) -> String {
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    output
        .stdout
        .lines()
        .filter(|l| l.starts_with("Error") || l.starts_with("Warning"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Quote an argument for display in a POSIX shell.
pub fn shell_quote(arg: &OsStr) -> Cow<'_, str> {
    let text = arg.to_string_lossy();
    let safe = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if safe {
        text
    } else {
        Cow::Owned(format!("'{}'", text.replace('\'', r"'\''")))
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(self.program.as_os_str()))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_when_needed() {
        let mut cmd = ToolCommand::new("/usr/bin/mkvpropedit");
        cmd.arg("It's here.mkv")
            .args(["--edit", "track:@3"])
            .arg("");
        assert_eq!(
            cmd.to_string(),
            r"/usr/bin/mkvpropedit 'It'\''s here.mkv' --edit track:@3 ''"
        );
    }

    #[test]
    fn test_tool_name() {
        assert_eq!(ToolCommand::new("/opt/mkv/mkvmerge").tool_name(), "mkvmerge");
    }

    #[test]
    fn test_execute_nonexistent_tool() {
        let result = ToolCommand::new("nonexistent_tool_xyz_12345").execute();
        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_success_and_failure() {
        let mut ok = ToolCommand::new("sh");
        ok.args(["-c", "echo hello"]);
        let out = ok.execute().unwrap();
        assert_eq!(out.stdout.trim(), "hello");

        let mut warn = ToolCommand::new("sh");
        warn.args(["-c", "exit 1"]);
        assert!(warn.execute().is_ok());

        let mut fail = ToolCommand::new("sh");
        fail.args(["-c", "echo 'Error: bad file'; exit 2"]);
        let err = fail.execute().unwrap_err().to_string();
        assert!(err.contains("Error: bad file"), "unexpected error: {err}");
    }
}
