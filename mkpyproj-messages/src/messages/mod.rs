//! Central registry for all user-facing message templates.
//!
//! - `scaffold` - messages for the scaffolding run itself
//! - `common` - shared/reusable messages
//!
//! ```rust
//! use mkpyproj_messages::MESSAGES;
//!
//! let msg = MESSAGES.scaffold.note_written;
//! let msg = MESSAGES.common.error_generic;
//! ```

mod common;
mod scaffold;

pub use common::{CommonMessages, COMMON_MESSAGES};
pub use scaffold::{ScaffoldMessages, SCAFFOLD_MESSAGES};

pub struct Messages {
    pub scaffold: ScaffoldMessages,
    pub common: CommonMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    scaffold: SCAFFOLD_MESSAGES,
    common: COMMON_MESSAGES,
};
