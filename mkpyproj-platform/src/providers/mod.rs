//! Platform-specific provider implementations.
//!
//! None of these touch the host system, so all of them are compiled
//! everywhere.

pub mod macos;
pub mod unix;
pub mod windows;

pub use macos::MacOSPlatform;
pub use unix::UnixPlatform;
pub use windows::WindowsPlatform;
