//! Scaffold a Python project.
//!
//! [`ProjectScaffolder::create_project`] creates the project folder, builds a
//! virtual environment in it with the requested interpreter, upgrades pip
//! inside that environment and writes `readme_installs.txt` describing what
//! was done.

pub mod note;
pub mod runner;
pub mod scaffolder;
pub mod steps;

pub use note::{InstallNote, NOTE_FILE_NAME};
pub use runner::{CommandRunner, StepOutcome, SystemRunner};
pub use scaffolder::{
    FailurePolicy, ProjectScaffolder, ScaffoldOptions, ScaffoldReport, ENV_DIR_NAME,
};
pub use steps::Step;
