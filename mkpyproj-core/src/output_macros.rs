//! Output macros for the mkpyproj CLI.
//!
//! User-facing text goes through these so every crate prints the same way.
//! Templates live in `mkpyproj-messages`.

#[macro_export]
macro_rules! proj_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! proj_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! proj_success {
    ($($arg:tt)*) => {
        println!("✓ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! proj_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! proj_progress {
    ($($arg:tt)*) => {
        println!("▶ {}", format!($($arg)*));
    };
}
