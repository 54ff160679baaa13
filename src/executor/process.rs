//! Thin wrappers over the process and descriptor calls the executor uses.

use std::os::unix::io::{AsRawFd, IntoRawFd, OwnedFd, RawFd};

use log::{debug, warn};
use nix::errno::Errno;
use nix::fcntl::{FcntlArg, FdFlag, fcntl};
use nix::sys::signal::{SigHandler, Signal, signal};
use nix::sys::wait::{WaitStatus, waitpid};
use nix::unistd::{self, ForkResult, Pid};

use super::executor::{ExecError, ExecStatus};
use crate::SHELL_NAME;

/// Signals the interactive shell ignores and its children must not.
const SHELL_SIGNALS: &[Signal] = &[Signal::SIGINT, Signal::SIGQUIT];

/// Retries `f` while it fails with EINTR.
pub fn syscall<F, T>(f: F) -> nix::Result<T>
where
    F: Fn() -> nix::Result<T>,
{
    loop {
        match f() {
            Err(Errno::EINTR) => (),
            result => return result,
        }
    }
}

pub fn fork() -> Result<ForkResult, ExecError> {
    // SAFETY: the child only rewires its own descriptors and then either
    // replaces its image or calls `_exit`.
    unsafe { unistd::fork() }.map_err(ExecError::Fork)
}

/// Blocks until `pid` terminates and returns its shell-style exit status.
pub fn wait(pid: Pid) -> ExecStatus {
    loop {
        match syscall(|| waitpid(pid, None)).map_err(ExecError::Wait)? {
            WaitStatus::Exited(_, code) => return Ok(code),
            WaitStatus::Signaled(_, sig, _) => return Ok(128 + sig as i32),
            _ => continue,
        }
    }
}

/// Makes `fd` occupy `slot`. The original descriptor is closed on every path.
pub fn attach(fd: OwnedFd, slot: RawFd) -> Result<(), ExecError> {
    if fd.as_raw_fd() == slot {
        // Already in place; it only has to survive exec.
        let raw = fd.into_raw_fd();
        fcntl(raw, FcntlArg::F_SETFD(FdFlag::empty()))
            .map_err(|source| ExecError::Dup { fd: slot, source })?;
        return Ok(());
    }
    syscall(|| unistd::dup2(fd.as_raw_fd(), slot))
        .map_err(|source| ExecError::Dup { fd: slot, source })?;
    Ok(())
}

/// Ends a forked process. Errors are reported on stderr first.
pub fn exit_with(status: ExecStatus) -> ! {
    let code = match status {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", SHELL_NAME, e);
            debug!("pid {} failed: {:?}", std::process::id(), e);
            e.exit_code()
        }
    };
    // SAFETY: `_exit` only ends the process; it runs no destructors or
    // atexit handlers that could touch state copied from the parent.
    unsafe { libc::_exit(code) }
}

/// Keeps Ctrl-C and Ctrl-\ from killing the interactive shell itself.
pub fn ignore_shell_signals() {
    for &sig in SHELL_SIGNALS {
        // SAFETY: SigIgn installs no handler code.
        if let Err(e) = unsafe { signal(sig, SigHandler::SigIgn) } {
            warn!("cannot ignore {}: {}", sig, e);
        }
    }
}

/// Gives programs the default dispositions the shell may have changed,
/// SIGPIPE included (the Rust runtime ignores it).
pub fn restore_default_signals() {
    for &sig in SHELL_SIGNALS.iter().chain(&[Signal::SIGPIPE]) {
        // SAFETY: SigDfl installs no handler code.
        if let Err(e) = unsafe { signal(sig, SigHandler::SigDfl) } {
            warn!("cannot restore {}: {}", sig, e);
        }
    }
}
