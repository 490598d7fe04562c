//! The `readme_installs.txt` note written into every scaffolded project.

use std::fs;
use std::path::Path;

use mkpyproj_core::error::{Result, ScaffoldError};

use crate::steps::PIP_UPGRADE_ARGS;

pub const NOTE_FILE_NAME: &str = "readme_installs.txt";

/// Everything the note records. Rendering is a pure function of these fields.
#[derive(Debug, Clone, Copy)]
pub struct InstallNote<'a> {
    pub date: &'a str,
    pub interpreter_path: &'a Path,
    pub project_path: &'a Path,
    pub env_interpreter: &'a Path,
}

impl InstallNote<'_> {
    /// The pip upgrade invocation as it was run inside the environment.
    pub fn pip_upgrade_command(&self) -> String {
        format!(
            "{} {}",
            self.env_interpreter.display(),
            PIP_UPGRADE_ARGS.join(" ")
        )
    }

    /// The install line names the environment's interpreter, not `interpreter_path`.
    pub fn render(&self) -> String {
        let content = format!(
            r#"
{date}

## version of python used for the project
"{interpreter}"

## project folder
{project}

## select interpreter
F1 F1 choose the recommended version of python for the project

## List of pip installs done for project so far:
{upgrade}

## example for installing other python packages - use at commandline
repeat the command above with the package name in place of "--upgrade pip", e.g. pandas
"#,
            date = self.date,
            interpreter = self.interpreter_path.display(),
            project = self.project_path.display(),
            upgrade = self.pip_upgrade_command(),
        );
        content.trim().to_string()
    }

    /// Write the rendered note to `path`, replacing any previous content.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|e| {
            ScaffoldError::Filesystem(format!("failed to write {}: {}", path.display(), e))
        })
    }
}
