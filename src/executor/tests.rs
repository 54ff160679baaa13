use crate::ast::Command;
use crate::executor::{ExecError, ExecStatus, Executor};

/// Records the trees it is given instead of running them.
pub struct MockExecutor {
    pub executed: Vec<Command>,
    pub status: i32,
    pub fail: bool,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self { executed: Vec::new(), status: 0, fail: false }
    }

    pub fn lines(&self) -> Vec<String> {
        self.executed.iter().map(|cmd| cmd.to_string()).collect()
    }
}

impl Executor for MockExecutor {
    fn exec(&mut self, cmd: &Command) -> ExecStatus {
        self.executed.push(cmd.clone());
        if self.fail {
            Err(ExecError::Fork(nix::errno::Errno::EAGAIN))
        } else {
            Ok(self.status)
        }
    }
}
