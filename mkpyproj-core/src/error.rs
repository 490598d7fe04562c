use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    Filesystem(String),
    Command(String),
    Config(String),
    Io(#[from] std::io::Error),
    Other(#[from] anyhow::Error),
}

impl Display for ScaffoldError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ScaffoldError::Filesystem(s) => write!(f, "Filesystem error: {}", s),
            ScaffoldError::Command(s) => write!(f, "Command failed: {}", s),
            ScaffoldError::Config(s) => write!(f, "Configuration error: {}", s),
            ScaffoldError::Io(e) => write!(f, "I/O error: {}", e),
            ScaffoldError::Other(e) => write!(f, "{:#}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
