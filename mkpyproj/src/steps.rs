use std::ffi::OsString;
use std::fmt;
use std::path::Path;

/// Arguments that upgrade pip when run by an environment's interpreter.
pub const PIP_UPGRADE_ARGS: [&str; 5] = ["-m", "pip", "install", "--upgrade", "pip"];

/// The subprocess steps of a scaffolding run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateEnv,
    UpgradePip,
}

impl Step {
    /// Stable identifier, used as the `step` span field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::CreateEnv => "create_env",
            Step::UpgradePip => "upgrade_pip",
        }
    }

    /// Arguments passed to the step's program.
    pub fn args(&self, env_dir: &Path) -> Vec<OsString> {
        match self {
            Step::CreateEnv => vec!["-m".into(), "venv".into(), env_dir.as_os_str().to_owned()],
            Step::UpgradePip => PIP_UPGRADE_ARGS.iter().map(OsString::from).collect(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Step::CreateEnv => write!(f, "virtual environment creation"),
            Step::UpgradePip => write!(f, "pip upgrade"),
        }
    }
}
