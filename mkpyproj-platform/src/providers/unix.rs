//! Unix platform provider implementation.

use crate::traits::PlatformProvider;
use std::path::Path;

/// Unix platform provider (Linux and other Unix-like systems)
pub struct UnixPlatform;

impl PlatformProvider for UnixPlatform {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn executable_name(&self, base: &str) -> String {
        base.to_string()
    }

    fn venv_bin_dir_name(&self) -> &'static str {
        "bin"
    }

    fn dir_separator(&self) -> char {
        '/'
    }

    fn venv_activate_command(&self, env_root: &Path) -> String {
        format!(
            "source {}/{}/activate",
            env_root.display(),
            self.venv_bin_dir_name()
        )
    }
}
