use std::collections::HashMap;
use std::env;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinStatus {
    Continue(i32),
    Exit(i32),
}

/// A command that must run inside the shell process to have any effect.
pub trait BuiltinCommand {
    fn name(&self) -> &'static str;
    fn run(&self, args: &[String], last_status: i32) -> BuiltinStatus;
}

pub struct BuiltinManager {
    commands: HashMap<String, Box<dyn BuiltinCommand>>,
}

impl Default for BuiltinManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinManager {
    pub fn new() -> Self {
        let mut mgr = BuiltinManager {
            commands: HashMap::new(),
        };
        mgr.register(Box::new(CdCommand));
        mgr.register(Box::new(ExitCommand));
        mgr
    }

    pub fn register(&mut self, cmd: Box<dyn BuiltinCommand>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Runs `name` if it is registered.
    pub fn execute(&self, name: &str, args: &[String], last_status: i32) -> Option<BuiltinStatus> {
        let cmd = self.commands.get(name)?;
        debug!("builtin {} {:?}", name, args);
        Some(cmd.run(args, last_status))
    }
}

pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn run(&self, args: &[String], _last_status: i32) -> BuiltinStatus {
        let target = args
            .first()
            .cloned()
            .unwrap_or_else(|| env::var("HOME").unwrap_or_else(|_| "/".to_string()));
        match env::set_current_dir(&target) {
            Ok(()) => BuiltinStatus::Continue(0),
            Err(e) => {
                eprintln!("cannot cd {}: {}", target, e);
                BuiltinStatus::Continue(1)
            }
        }
    }
}

pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn run(&self, args: &[String], last_status: i32) -> BuiltinStatus {
        match args.first() {
            None => BuiltinStatus::Exit(last_status),
            Some(code) => match code.parse() {
                Ok(code) => BuiltinStatus::Exit(code),
                Err(_) => {
                    eprintln!("exit: {}: numeric argument required", code);
                    BuiltinStatus::Exit(2)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_registered_commands() {
        let mgr = BuiltinManager::new();
        assert!(mgr.is_builtin("cd"));
        assert!(mgr.is_builtin("exit"));
        assert!(!mgr.is_builtin("ls"));
        assert_eq!(mgr.execute("ls", &[], 0), None);
    }

    #[test]
    fn test_exit_codes() {
        let mgr = BuiltinManager::new();
        assert_eq!(mgr.execute("exit", &[], 3), Some(BuiltinStatus::Exit(3)));
        assert_eq!(mgr.execute("exit", &args(&["7"]), 0), Some(BuiltinStatus::Exit(7)));
        assert_eq!(mgr.execute("exit", &args(&["seven"]), 0), Some(BuiltinStatus::Exit(2)));
    }

    #[test]
    fn test_cd_to_missing_directory_fails() {
        let before = env::current_dir().unwrap();
        let status = CdCommand.run(&args(&["/mini-shell/no/such/dir"]), 0);
        assert_eq!(status, BuiltinStatus::Continue(1));
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
