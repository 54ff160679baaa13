use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::executor::ExecError;
use crate::parser::ParseError;

/// Everything that can stop the shell or one of its lines.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Exec(#[from] ExecError),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
