// Standard library
use std::ffi::OsStr;
use std::path::Path;
use std::process::ExitStatus;

// External crates
use crate::error::Result;
use duct::cmd;
use tracing::debug;
use which::which;

/// Render a command line for logs and error messages.
pub fn display_command<A: AsRef<OsStr>>(command: &OsStr, args: &[A]) -> String {
    let mut parts = vec![command.to_string_lossy().into_owned()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run a command with stdio inherited from this process and wait for it.
///
/// A non-zero exit is not an error here; the status is handed back so the
/// caller decides. `Err` means the process could not be started at all.
pub fn run_command_visible<A: AsRef<OsStr>>(command: &OsStr, args: &[A]) -> Result<ExitStatus> {
    debug!("Running: {}", display_command(command, args));

    let handle = cmd(command, args).unchecked().start()?;
    let output = handle.wait()?;

    debug!(
        "Finished with status {:?}: {}",
        output.status.code(),
        display_command(command, args)
    );
    Ok(output.status)
}

/// Checks if a command-line tool is available.
///
/// Bare names are looked up on `PATH`; anything with a directory component
/// is checked on disk.
pub fn is_tool_installed(tool: &Path) -> bool {
    if tool.components().count() > 1 {
        return tool.is_file();
    }
    which(tool).is_ok()
}
