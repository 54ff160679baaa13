use std::io;
use std::os::unix::io::RawFd;
use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

use crate::ast::Command;

pub type ExecStatus = Result<i32, ExecError>;

/// Exit code for a program that could not be found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit code for a program that was found but could not be run.
pub const EXIT_CANNOT_INVOKE: i32 = 126;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{program}: command not found")]
    Resolution { program: String },
    #[error("{}: {source}", path.display())]
    Invocation { path: PathBuf, source: Errno },
    #[error("open {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("dup2 onto fd {fd}: {source}")]
    Dup { fd: RawFd, source: Errno },
    #[error("pipe: {0}")]
    Pipe(Errno),
    #[error("fork: {0}")]
    Fork(Errno),
    #[error("wait: {0}")]
    Wait(Errno),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("command tree deeper than {limit} levels")]
    TooDeep { limit: usize },
}

impl ExecError {
    /// Status the failing process terminates with.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecError::Resolution { .. } => EXIT_NOT_FOUND,
            ExecError::Invocation { source: Errno::ENOENT, .. } => EXIT_NOT_FOUND,
            ExecError::Invocation { .. } => EXIT_CANNOT_INVOKE,
            _ => 1,
        }
    }
}

pub trait Executor {
    /// Runs `cmd` to completion and returns its exit status.
    fn exec(&mut self, cmd: &Command) -> ExecStatus;
}
