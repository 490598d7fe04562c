//! Cross-platform environment layout for mkpyproj.
//!
//! Where a virtual environment keeps its interpreter is decided by the tool
//! that creates it, and differs per host OS. This crate puts that convention
//! behind [`PlatformProvider`] so callers never hardcode `bin/python` or
//! `Scripts\python.exe`.

pub mod providers;
pub mod registry;
pub mod traits;

pub use registry::PlatformRegistry;
pub use traits::PlatformProvider;

/// Get the current platform provider
pub fn current() -> std::sync::Arc<dyn PlatformProvider> {
    PlatformRegistry::current()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_matches_registry() {
        assert_eq!(current().name(), PlatformRegistry::current_platform_name());
    }
}
