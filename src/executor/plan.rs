use std::ffi::CString;
use std::os::unix::io::RawFd;
use std::path::PathBuf;

use nix::unistd;

use super::executor::{ExecError, ExecStatus};
use super::pipeline::PipelineHandler;
use super::redirect::RedirectHandler;
use crate::ast::Direction;

/// A command tree made ready to run before anything is forked.
///
/// Programs are already resolved and their argv built, so a child only has
/// to rewire descriptors and call `execv`. A program that failed to resolve
/// keeps its error until the child reaches it, which is when it is reported.
#[derive(Debug)]
pub enum Plan<'a> {
    /// Empty program: succeed without running anything.
    Nothing,
    Exec(Result<Invocation, ExecError>),
    Redirect {
        inner: Box<Plan<'a>>,
        file: &'a str,
        direction: Direction,
        fd: RawFd,
    },
    Pipeline {
        left: Box<Plan<'a>>,
        right: Box<Plan<'a>>,
    },
}

#[derive(Debug)]
pub struct Invocation {
    pub path: PathBuf,
    pub c_path: CString,
    pub argv: Vec<CString>,
}

impl Plan<'_> {
    /// Turns the current process into this plan.
    ///
    /// Only returns when the process should terminate instead: `Ok` with the
    /// status to exit with, or the error that stopped this branch. Must run
    /// in a forked child, since redirections rebind this process's streams.
    pub fn realize(self) -> ExecStatus {
        match self {
            Plan::Nothing => Ok(0),
            Plan::Exec(invocation) => invocation?.exec(),
            Plan::Redirect {
                inner,
                file,
                direction,
                fd,
            } => {
                RedirectHandler::handle_redirect(file, direction, fd)?;
                inner.realize()
            }
            Plan::Pipeline { left, right } => PipelineHandler::handle_pipeline(*left, *right),
        }
    }
}

impl Invocation {
    fn exec(self) -> ExecStatus {
        match unistd::execv(&self.c_path, &self.argv) {
            Ok(never) => match never {},
            Err(source) => Err(ExecError::Invocation {
                path: self.path,
                source,
            }),
        }
    }
}
