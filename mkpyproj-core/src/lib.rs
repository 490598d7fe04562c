pub mod command_stream;
pub mod error;
pub mod output_macros;

pub use command_stream::{is_tool_installed, run_command_visible};
pub use error::{Result, ScaffoldError};
