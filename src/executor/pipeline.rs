use log::debug;
use nix::unistd::{self, ForkResult};

use super::executor::{ExecError, ExecStatus};
use super::plan::Plan;
use super::process;

pub struct PipelineHandler;

impl PipelineHandler {
    /// Runs `left | right` as two children of the current process and
    /// returns the status of `right` once both have terminated.
    pub fn handle_pipeline(left: Plan<'_>, right: Plan<'_>) -> ExecStatus {
        let (read_end, write_end) = unistd::pipe().map_err(ExecError::Pipe)?;

        let left_pid = match process::fork()? {
            ForkResult::Child => {
                drop(read_end);
                let status = process::attach(write_end, libc::STDOUT_FILENO)
                    .and_then(|()| left.realize());
                process::exit_with(status)
            }
            ForkResult::Parent { child } => child,
        };
        // The reader sees EOF only once every copy of the write end is closed.
        drop(write_end);

        let right_pid = match process::fork() {
            Ok(ForkResult::Child) => {
                let status = process::attach(read_end, libc::STDIN_FILENO)
                    .and_then(|()| right.realize());
                process::exit_with(status)
            }
            Ok(ForkResult::Parent { child }) => child,
            Err(e) => {
                drop(read_end);
                process::wait(left_pid)?;
                return Err(e);
            }
        };
        drop(read_end);

        debug!("pipeline {} | {}", left_pid, right_pid);
        let left_status = process::wait(left_pid)?;
        let right_status = process::wait(right_pid)?;
        debug!("pipeline finished: left {}, right {}", left_status, right_status);
        Ok(right_status)
    }
}
