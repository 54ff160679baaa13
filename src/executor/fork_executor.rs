use std::ffi::CString;
use std::iter;
use std::os::unix::ffi::OsStrExt;

use log::debug;
use nix::unistd::ForkResult;

use super::executor::{ExecError, ExecStatus, Executor};
use super::path_resolver::PathResolver;
use super::plan::{Invocation, Plan};
use super::process;
use crate::ast::{Command, MAX_DEPTH};
use crate::config::Config;

/// Runs command trees as real processes.
///
/// Every line gets one forked child; the tree is realized inside it so that
/// redirections and pipes never touch the shell's own descriptors.
pub struct ForkExecutor {
    resolver: PathResolver,
    max_depth: usize,
}

impl Default for ForkExecutor {
    fn default() -> Self {
        Self::new(PathResolver::default(), MAX_DEPTH)
    }
}

impl ForkExecutor {
    pub fn new(resolver: PathResolver, max_depth: usize) -> Self {
        ForkExecutor { resolver, max_depth }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(PathResolver::new(config.search_dirs.clone()), config.max_depth)
    }

    /// Resolves every program in `cmd` and builds its argv.
    ///
    /// Only a tree deeper than `max_depth` fails here. Resolution errors are
    /// kept in the plan for the branch that would have run the program.
    pub fn prepare<'a>(&self, cmd: &'a Command) -> Result<Plan<'a>, ExecError> {
        self.prepare_at(cmd, 1)
    }

    fn prepare_at<'a>(&self, cmd: &'a Command, depth: usize) -> Result<Plan<'a>, ExecError> {
        if depth > self.max_depth {
            return Err(ExecError::TooDeep {
                limit: self.max_depth,
            });
        }
        Ok(match cmd {
            Command::Simple { program, .. } if program.is_empty() => Plan::Nothing,
            Command::Simple { program, args } => Plan::Exec(self.invocation(program, args)),
            Command::Redirect {
                inner,
                file,
                direction,
                fd,
            } => Plan::Redirect {
                inner: Box::new(self.prepare_at(inner, depth + 1)?),
                file,
                direction: *direction,
                fd: *fd,
            },
            Command::Pipeline { left, right } => Plan::Pipeline {
                left: Box::new(self.prepare_at(left, depth + 1)?),
                right: Box::new(self.prepare_at(right, depth + 1)?),
            },
        })
    }

    fn invocation(&self, program: &str, args: &[String]) -> Result<Invocation, ExecError> {
        let path = self
            .resolver
            .resolve(program)
            .ok_or_else(|| ExecError::Resolution {
                program: program.to_string(),
            })?;

        let c_path = to_cstring(path.as_os_str().as_bytes())?;
        let argv = iter::once(program)
            .chain(args.iter().map(String::as_str))
            .map(|arg| to_cstring(arg.as_bytes()))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("resolved {} to {}", program, path.display());
        Ok(Invocation { path, c_path, argv })
    }
}

fn to_cstring(bytes: &[u8]) -> Result<CString, ExecError> {
    CString::new(bytes)
        .map_err(|_| ExecError::InvalidArgument(String::from_utf8_lossy(bytes).into_owned()))
}

impl Executor for ForkExecutor {
    fn exec(&mut self, cmd: &Command) -> ExecStatus {
        let plan = self.prepare(cmd)?;
        match process::fork()? {
            ForkResult::Child => {
                process::restore_default_signals();
                process::exit_with(plan.realize())
            }
            ForkResult::Parent { child } => {
                debug!("forked {} for `{}`", child, cmd);
                let status = process::wait(child)?;
                debug!("{} exited with {}", child, status);
                Ok(status)
            }
        }
    }
}
