//! Core traits for platform abstraction.

use std::path::{Path, PathBuf};

/// Per-platform conventions for virtual environments.
///
/// Implementations are pure path computations, so every provider can be
/// used on every host (useful for `--platform` overrides and tests).
pub trait PlatformProvider: Send + Sync {
    /// Get the platform name (e.g., "unix", "windows", "macos")
    fn name(&self) -> &'static str;

    /// Get the correct executable name for the platform (adds .exe on Windows)
    fn executable_name(&self, base: &str) -> String;

    /// Directory inside an environment that holds its executables
    fn venv_bin_dir_name(&self) -> &'static str;

    /// Path separator used when rendering paths for this platform's shells
    fn dir_separator(&self) -> char;

    /// Locate the environment's own interpreter.
    fn venv_interpreter(&self, env_root: &Path) -> PathBuf {
        env_root
            .join(self.venv_bin_dir_name())
            .join(self.executable_name("python"))
    }

    /// Shell command that activates the environment rooted at `env_root`.
    fn venv_activate_command(&self, env_root: &Path) -> String;
}
