//! macOS platform provider implementation.
//!
//! `venv` on macOS uses the same layout as other Unix systems; the provider
//! exists so the platform name is reported correctly.

use crate::providers::UnixPlatform;
use crate::traits::PlatformProvider;
use std::path::Path;

/// macOS platform provider
pub struct MacOSPlatform;

impl PlatformProvider for MacOSPlatform {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn executable_name(&self, base: &str) -> String {
        UnixPlatform.executable_name(base)
    }

    fn venv_bin_dir_name(&self) -> &'static str {
        UnixPlatform.venv_bin_dir_name()
    }

    fn dir_separator(&self) -> char {
        UnixPlatform.dir_separator()
    }

    fn venv_activate_command(&self, env_root: &Path) -> String {
        UnixPlatform.venv_activate_command(env_root)
    }
}
