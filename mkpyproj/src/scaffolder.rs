// Standard library
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// External crates
use mkpyproj_core::command_stream::display_command;
use mkpyproj_core::error::{Result, ScaffoldError};
use mkpyproj_core::proj_progress;
use mkpyproj_messages::{msg, MESSAGES};
use mkpyproj_platform::PlatformProvider;
use tracing::{debug, info, info_span, warn};

// Internal imports
use crate::note::{InstallNote, NOTE_FILE_NAME};
use crate::runner::{CommandRunner, StepOutcome, SystemRunner};
use crate::steps::Step;

pub const ENV_DIR_NAME: &str = ".venv";

/// What to do when a subprocess step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and carry on; the note file is still written.
    #[default]
    BestEffort,
    /// Abort at the first failed step. Nothing after it runs.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Name of the environment directory inside the project.
    pub env_dir_name: String,
    /// Name of the note file inside the project.
    pub note_file_name: String,
    pub failure_policy: FailurePolicy,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            env_dir_name: ENV_DIR_NAME.to_string(),
            note_file_name: NOTE_FILE_NAME.to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Result of a completed scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub env_dir: PathBuf,
    pub env_interpreter: PathBuf,
    pub note_path: PathBuf,
    pub create_env: StepOutcome,
    pub upgrade_pip: StepOutcome,
}

impl ScaffoldReport {
    pub fn failed_steps(&self) -> Vec<(Step, &StepOutcome)> {
        [
            (Step::CreateEnv, &self.create_env),
            (Step::UpgradePip, &self.upgrade_pip),
        ]
        .into_iter()
        .filter(|(_, outcome)| !outcome.is_success())
        .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed_steps().is_empty()
    }
}

/// Creates a project folder with a virtual environment and an install note.
pub struct ProjectScaffolder<R = SystemRunner> {
    runner: R,
    platform: Arc<dyn PlatformProvider>,
    options: ScaffoldOptions,
}

impl ProjectScaffolder<SystemRunner> {
    /// Scaffolder that runs real processes and uses the host's layout.
    pub fn new() -> Self {
        Self::with_runner(SystemRunner, mkpyproj_platform::current())
    }
}

impl Default for ProjectScaffolder<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> ProjectScaffolder<R> {
    pub fn with_runner(runner: R, platform: Arc<dyn PlatformProvider>) -> Self {
        Self {
            runner,
            platform,
            options: ScaffoldOptions::default(),
        }
    }

    pub fn options(mut self, options: ScaffoldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.options.failure_policy = policy;
        self
    }

    pub fn env_dir(&self, project_path: &Path) -> PathBuf {
        project_path.join(&self.options.env_dir_name)
    }

    /// Scaffold `project_path` with the interpreter at `interpreter_path`.
    ///
    /// Steps run strictly in order: create the folder, create the
    /// environment, upgrade pip, write the note. Folder and note failures
    /// are always errors. Subprocess failures are errors only under
    /// [`FailurePolicy::Strict`]; otherwise they are reported in the
    /// returned [`ScaffoldReport`].
    pub fn create_project(
        &self,
        date: &str,
        project_path: &Path,
        interpreter_path: &Path,
    ) -> Result<ScaffoldReport> {
        let span = info_span!("scaffold", project = %project_path.display());
        let _enter = span.enter();

        proj_progress!(
            "{}",
            msg!(
                MESSAGES.scaffold.ensuring_dir,
                path = project_path.display().to_string()
            )
        );
        fs::create_dir_all(project_path).map_err(|e| {
            ScaffoldError::Filesystem(format!(
                "failed to create project folder {}: {}",
                project_path.display(),
                e
            ))
        })?;
        info!("Project folder ready");

        let env_dir = self.env_dir(project_path);
        let env_interpreter = self.platform.venv_interpreter(&env_dir);
        debug!(
            platform = self.platform.name(),
            env_interpreter = %env_interpreter.display(),
            "Resolved environment layout"
        );

        proj_progress!(
            "{}",
            msg!(
                MESSAGES.scaffold.creating_env,
                path = env_dir.display().to_string()
            )
        );
        let create_env = self.run_step(
            Step::CreateEnv,
            interpreter_path.as_os_str(),
            Step::CreateEnv.args(&env_dir),
        )?;

        proj_progress!(
            "{}",
            msg!(
                MESSAGES.scaffold.upgrading_pip,
                interpreter = env_interpreter.display().to_string()
            )
        );
        let upgrade_pip = self.run_step(
            Step::UpgradePip,
            env_interpreter.as_os_str(),
            Step::UpgradePip.args(&env_dir),
        )?;

        let note_path = project_path.join(&self.options.note_file_name);
        proj_progress!(
            "{}",
            msg!(
                MESSAGES.scaffold.writing_note,
                path = note_path.display().to_string()
            )
        );
        InstallNote {
            date,
            interpreter_path,
            project_path,
            env_interpreter: &env_interpreter,
        }
        .write(&note_path)?;
        info!(note = %note_path.display(), "Note written");

        Ok(ScaffoldReport {
            project_dir: project_path.to_path_buf(),
            env_dir,
            env_interpreter,
            note_path,
            create_env,
            upgrade_pip,
        })
    }

    fn run_step(&self, step: Step, program: &OsStr, args: Vec<OsString>) -> Result<StepOutcome> {
        let span = info_span!("step", step = step.as_str());
        let _enter = span.enter();

        info!("Starting {}", step);
        let outcome = self.runner.run(program, &args);

        if outcome.is_success() {
            info!("Finished {}", step);
            return Ok(outcome);
        }

        warn!(%outcome, "{} failed", step);
        if self.options.failure_policy == FailurePolicy::Strict {
            return Err(ScaffoldError::Command(format!(
                "{} {}: {}",
                step,
                outcome,
                display_command(program, &args)
            )));
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkpyproj_platform::PlatformRegistry;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Records every invocation and replays queued outcomes (default: success).
    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<(OsString, Vec<OsString>)>>,
        outcomes: RefCell<VecDeque<StepOutcome>>,
    }

    impl RecordingRunner {
        fn with_outcomes(outcomes: Vec<StepOutcome>) -> Self {
            Self {
                calls: RefCell::default(),
                outcomes: RefCell::new(outcomes.into()),
            }
        }

        fn calls(&self) -> Vec<(OsString, Vec<OsString>)> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &OsStr, args: &[OsString]) -> StepOutcome {
            self.calls
                .borrow_mut()
                .push((program.to_owned(), args.to_vec()));
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or(StepOutcome::Succeeded)
        }
    }

    fn unix_scaffolder(runner: &RecordingRunner) -> ProjectScaffolder<&RecordingRunner> {
        let platform = PlatformRegistry::for_name("unix").unwrap();
        ProjectScaffolder::with_runner(runner, platform)
    }

    fn launch_failed() -> StepOutcome {
        StepOutcome::LaunchFailed {
            reason: "No such file or directory".to_string(),
        }
    }

    #[test]
    fn test_creates_folder_runs_steps_and_writes_note() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("nested").join("demo");
        let runner = RecordingRunner::default();

        let report = unix_scaffolder(&runner)
            .create_project("06/02/24", &project, Path::new("/usr/bin/python3.11"))
            .unwrap();

        assert!(project.is_dir());
        assert_eq!(report.env_dir, project.join(".venv"));
        assert_eq!(
            report.env_interpreter,
            project.join(".venv").join("bin").join("python")
        );
        assert_eq!(report.note_path, project.join("readme_installs.txt"));
        assert!(report.all_succeeded());

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, OsString::from("/usr/bin/python3.11"));
        assert_eq!(calls[0].1, Step::CreateEnv.args(&report.env_dir));
        assert_eq!(calls[1].0.as_os_str(), report.env_interpreter.as_os_str());
        assert_eq!(calls[1].1, Step::UpgradePip.args(&report.env_dir));

        let content = fs::read_to_string(&report.note_path).unwrap();
        assert_eq!(content.lines().next(), Some("06/02/24"));
        assert!(content.contains("\"/usr/bin/python3.11\""));
        assert!(content.contains(&format!(
            "{} -m pip install --upgrade pip",
            report.env_interpreter.display()
        )));
    }

    #[test]
    fn test_existing_folder_is_not_an_error_and_note_is_replaced() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().to_path_buf();
        let runner = RecordingRunner::default();
        let scaffolder = unix_scaffolder(&runner);

        scaffolder
            .create_project("01/01/2024", &project, Path::new("python3"))
            .unwrap();
        let report = scaffolder
            .create_project("12/31/2024", &project, Path::new("python3"))
            .unwrap();

        let content = fs::read_to_string(report.note_path).unwrap();
        assert!(content.starts_with("12/31/2024"));
        assert!(!content.contains("01/01/2024"));
        // Environment creation is re-invoked on every run.
        assert_eq!(runner.calls().len(), 4);
    }

    #[test]
    fn test_best_effort_writes_note_even_when_steps_fail() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("demo");
        let runner = RecordingRunner::with_outcomes(vec![
            launch_failed(),
            StepOutcome::Exited { code: Some(1) },
        ]);

        let report = unix_scaffolder(&runner)
            .create_project("06/02/24", &project, Path::new("/missing/python"))
            .unwrap();

        assert_eq!(runner.calls().len(), 2);
        assert!(!report.all_succeeded());
        let failed: Vec<Step> = report.failed_steps().into_iter().map(|(s, _)| s).collect();
        assert_eq!(failed, vec![Step::CreateEnv, Step::UpgradePip]);
        assert!(report.note_path.is_file());
    }

    #[test]
    fn test_strict_stops_at_failed_env_creation() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("demo");
        let runner = RecordingRunner::with_outcomes(vec![launch_failed()]);

        let err = unix_scaffolder(&runner)
            .failure_policy(FailurePolicy::Strict)
            .create_project("06/02/24", &project, Path::new("/missing/python"))
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::Command(_)));
        assert!(err.to_string().contains("virtual environment creation"));
        assert_eq!(runner.calls().len(), 1);
        assert!(project.is_dir());
        assert!(!project.join(NOTE_FILE_NAME).exists());
    }

    #[test]
    fn test_strict_stops_at_failed_pip_upgrade() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("demo");
        let runner = RecordingRunner::with_outcomes(vec![
            StepOutcome::Succeeded,
            StepOutcome::Exited { code: Some(2) },
        ]);

        let err = unix_scaffolder(&runner)
            .failure_policy(FailurePolicy::Strict)
            .create_project("06/02/24", &project, Path::new("python3"))
            .unwrap_err();

        assert!(err.to_string().contains("pip upgrade exit code 2"));
        assert_eq!(runner.calls().len(), 2);
        assert!(!project.join(NOTE_FILE_NAME).exists());
    }

    #[test]
    fn test_folder_creation_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("a-file");
        fs::write(&blocker, "not a directory").unwrap();
        let runner = RecordingRunner::default();

        let err = unix_scaffolder(&runner)
            .create_project("06/02/24", &blocker.join("demo"), Path::new("python3"))
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::Filesystem(_)));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_note_write_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().to_path_buf();
        fs::create_dir_all(project.join(NOTE_FILE_NAME)).unwrap();
        let runner = RecordingRunner::default();

        let err = unix_scaffolder(&runner)
            .create_project("06/02/24", &project, Path::new("python3"))
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::Filesystem(_)));
        assert_eq!(runner.calls().len(), 2);
    }

    #[test]
    fn test_custom_options_and_windows_layout() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("demo");
        let runner = RecordingRunner::default();
        let options = ScaffoldOptions {
            env_dir_name: "env".to_string(),
            note_file_name: "NOTES.txt".to_string(),
            ..ScaffoldOptions::default()
        };

        let report =
            ProjectScaffolder::with_runner(&runner, PlatformRegistry::for_name("windows").unwrap())
                .options(options)
                .create_project("06/02/24", &project, Path::new("py"))
                .unwrap();

        assert_eq!(report.env_dir, project.join("env"));
        assert_eq!(
            report.env_interpreter,
            project.join("env").join("Scripts").join("python.exe")
        );
        assert!(project.join("NOTES.txt").is_file());
        assert!(!project.join(NOTE_FILE_NAME).exists());
    }

    #[test]
    fn test_missing_interpreter_with_real_processes() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("demo");

        let report = ProjectScaffolder::new()
            .create_project(
                "06/02/24",
                &project,
                Path::new("/definitely/not/here/python3.11"),
            )
            .unwrap();

        assert!(matches!(report.create_env, StepOutcome::LaunchFailed { .. }));
        assert!(!report.upgrade_pip.is_success());
        let content = fs::read_to_string(&report.note_path).unwrap();
        assert!(content.contains("/definitely/not/here/python3.11"));
    }
}
