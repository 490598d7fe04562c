// Standard library
use std::path::PathBuf;
use std::sync::Arc;

// External crates
use chrono::Local;
use clap::Parser;
use mkpyproj_core::error::{Result, ScaffoldError};
use mkpyproj_core::{is_tool_installed, proj_println, proj_success, proj_warning};
use mkpyproj_messages::{msg, MESSAGES};
use mkpyproj_platform::{PlatformProvider, PlatformRegistry};
use tracing::warn;

// Internal imports
use mkpyproj::{FailurePolicy, ProjectScaffolder, SystemRunner};

/// Date format written to the note file (mm/dd/yyyy).
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Set up a Python project with a virtual environment.
#[derive(Parser, Debug)]
#[command(name = "mkpyproj")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The path to the project directory
    pub project_path: PathBuf,

    /// The path to the preferred Python executable
    #[arg(value_name = "PYTHON")]
    pub python_path: PathBuf,

    /// Stop at the first failed step instead of writing the note anyway
    #[arg(long)]
    pub strict: bool,

    /// Date recorded in the note [default: today, mm/dd/yyyy]
    #[arg(long)]
    pub date: Option<String>,

    /// Environment layout to assume: unix, macos or windows [default: host]
    #[arg(long, value_name = "NAME")]
    pub platform: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

fn resolve_platform(name: Option<&str>) -> Result<Arc<dyn PlatformProvider>> {
    match name {
        None => Ok(mkpyproj_platform::current()),
        Some(name) => PlatformRegistry::for_name(name).ok_or_else(|| {
            ScaffoldError::Config(msg!(
                MESSAGES.scaffold.unknown_platform,
                name = name,
                supported = PlatformRegistry::supported_platforms().join(", ")
            ))
        }),
    }
}

pub fn execute(args: Args) -> Result<()> {
    let platform = resolve_platform(args.platform.as_deref())?;
    let date = args.date.unwrap_or_else(today);
    let policy = if args.strict {
        FailurePolicy::Strict
    } else {
        FailurePolicy::BestEffort
    };

    proj_println!(
        "{}",
        msg!(
            MESSAGES.scaffold.header,
            path = args.project_path.display().to_string(),
            interpreter = args.python_path.display().to_string()
        )
    );

    if !is_tool_installed(&args.python_path) {
        warn!(interpreter = %args.python_path.display(), "Interpreter not found");
        proj_warning!(
            "{}",
            msg!(
                MESSAGES.scaffold.interpreter_not_found,
                interpreter = args.python_path.display().to_string()
            )
        );
    }

    let scaffolder =
        ProjectScaffolder::with_runner(SystemRunner, Arc::clone(&platform)).failure_policy(policy);
    let report = scaffolder.create_project(&date, &args.project_path, &args.python_path)?;

    for (step, outcome) in report.failed_steps() {
        proj_warning!(
            "{}",
            msg!(
                MESSAGES.scaffold.step_failed,
                step = step.to_string(),
                outcome = outcome.to_string()
            )
        );
    }
    if !report.all_succeeded() {
        proj_println!(
            "{}",
            msg!(MESSAGES.common.error_hint, hint = MESSAGES.scaffold.strict_hint)
        );
    }

    proj_success!(
        "{}",
        msg!(
            MESSAGES.scaffold.note_written,
            path = report.note_path.display().to_string()
        )
    );
    proj_println!();
    proj_println!(
        "{}",
        msg!(
            MESSAGES.scaffold.complete,
            path = report.project_dir.display().to_string()
        )
    );
    proj_println!(
        "{}",
        msg!(
            MESSAGES.scaffold.summary_env,
            path = report.env_dir.display().to_string()
        )
    );
    proj_println!(
        "{}",
        msg!(
            MESSAGES.scaffold.summary_interpreter,
            path = report.env_interpreter.display().to_string()
        )
    );
    proj_println!(
        "{}",
        msg!(
            MESSAGES.scaffold.summary_note,
            path = report.note_path.display().to_string()
        )
    );
    proj_println!(
        "{}",
        msg!(
            MESSAGES.scaffold.activate_hint,
            command = platform.venv_activate_command(&report.env_dir)
        )
    );

    Ok(())
}
