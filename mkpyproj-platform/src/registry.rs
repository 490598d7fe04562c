//! Platform registry for detecting and providing platform implementations.

use crate::providers::{MacOSPlatform, UnixPlatform, WindowsPlatform};
use crate::traits::PlatformProvider;
use std::sync::Arc;

/// Platform registry for detecting the current platform and creating providers.
pub struct PlatformRegistry;

impl PlatformRegistry {
    /// Get the platform provider for the current operating system.
    pub fn current() -> Arc<dyn PlatformProvider> {
        #[cfg(target_os = "macos")]
        return Arc::new(MacOSPlatform);

        #[cfg(windows)]
        return Arc::new(WindowsPlatform);

        #[cfg(all(unix, not(target_os = "macos")))]
        return Arc::new(UnixPlatform);

        #[cfg(not(any(unix, windows)))]
        compile_error!("Unsupported platform - only Unix-like and Windows platforms are supported");
    }

    /// Get a platform provider by name, regardless of the host OS.
    ///
    /// # Arguments
    /// * `name` - Platform name ("unix", "linux", "macos", "darwin", "osx", "windows", "win32")
    ///
    /// # Returns
    /// Some(provider) if the name is known, None otherwise
    pub fn for_name(name: &str) -> Option<Arc<dyn PlatformProvider>> {
        match name.to_lowercase().as_str() {
            "unix" | "linux" => Some(Arc::new(UnixPlatform)),
            "windows" | "win32" => Some(Arc::new(WindowsPlatform)),
            "macos" | "darwin" | "osx" => Some(Arc::new(MacOSPlatform)),
            _ => None,
        }
    }

    /// Get the current platform name as a string.
    pub fn current_platform_name() -> &'static str {
        Self::current().name()
    }

    /// List all names accepted by `for_name()`.
    pub fn supported_platforms() -> Vec<&'static str> {
        vec!["unix", "linux", "macos", "darwin", "osx", "windows", "win32"]
    }
}
