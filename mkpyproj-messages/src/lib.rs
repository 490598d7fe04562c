//! mkpyproj-messages
//!
//! Centralized messaging for the mkpyproj CLI.
//! Provides the user-facing templates and a small builder that fills them.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;
