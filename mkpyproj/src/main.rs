use clap::Parser;
use mkpyproj_core::proj_error;
use mkpyproj_messages::{msg, MESSAGES};

mod cli;

use cli::Args;

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "warn" };
    let log_guard = mkpyproj_logging::init_subscriber(default_level);

    if let Err(e) = cli::execute(args) {
        proj_error!(
            "{}",
            msg!(MESSAGES.common.error_generic, error = e.to_string())
        );
        drop(log_guard);
        std::process::exit(1);
    }
}
