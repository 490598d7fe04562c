//! Windows platform provider implementation.

use crate::traits::PlatformProvider;
use std::path::Path;

/// Windows platform provider
pub struct WindowsPlatform;

impl PlatformProvider for WindowsPlatform {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn executable_name(&self, base: &str) -> String {
        if base.ends_with(".exe") {
            base.to_string()
        } else {
            format!("{}.exe", base)
        }
    }

    fn venv_bin_dir_name(&self) -> &'static str {
        "Scripts"
    }

    fn dir_separator(&self) -> char {
        '\\'
    }

    fn venv_activate_command(&self, env_root: &Path) -> String {
        format!(
            "{}{sep}{}{sep}activate",
            env_root.display(),
            self.venv_bin_dir_name(),
            sep = self.dir_separator()
        )
    }
}
