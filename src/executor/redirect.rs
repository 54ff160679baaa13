use std::fs::{File, OpenOptions};
use std::os::unix::io::{OwnedFd, RawFd};

use log::debug;

use super::executor::ExecError;
use super::process;
use crate::ast::Direction;

pub struct RedirectHandler;

impl RedirectHandler {
    /// Opens `file` with the mode `direction` implies.
    pub fn open(file: &str, direction: Direction) -> Result<File, ExecError> {
        let mut options = OpenOptions::new();
        match direction {
            Direction::Input => options.read(true),
            Direction::Output => options.write(true).create(true).truncate(true),
        };
        options.open(file).map_err(|source| ExecError::Open {
            path: file.to_string(),
            source,
        })
    }

    /// Rebinds `fd` of the current process to `file`.
    ///
    /// Nothing is touched when the file cannot be opened, so the caller can
    /// abandon the branch without running the inner command.
    pub fn handle_redirect(file: &str, direction: Direction, fd: RawFd) -> Result<(), ExecError> {
        let opened = Self::open(file, direction)?;
        debug!("redirect fd {} {} {}", fd, direction.symbol(), file);
        process::attach(OwnedFd::from(opened), fd)
    }
}
