use std::io::BufRead;

use log::{debug, error};

use crate::SHELL_NAME;
use crate::ast::Command;
use crate::builtins::{BuiltinManager, BuiltinStatus};
use crate::config::Config;
use crate::error::ShellError;
use crate::executor::{Executor, ignore_shell_signals};
use crate::parser::Parser;
use crate::parser::default::DefaultParser;
use crate::prompt::ShellPrompt;

/// Status reported for a line that failed to parse.
pub const EXIT_SYNTAX: i32 = 2;

pub struct Repl<E: Executor> {
    config: Config,
    prompt: ShellPrompt,
    executor: E,
    builtins: BuiltinManager,
    last_status: i32,
}

impl<E: Executor> Repl<E> {
    pub fn new(config: Config, executor: E) -> Self {
        let prompt = ShellPrompt::new(&config.prompt);
        Repl {
            config,
            prompt,
            executor,
            builtins: BuiltinManager::new(),
            last_status: 0,
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    /// Reads and runs lines until EOF or `exit`, returning the shell's exit code.
    pub fn run<R: BufRead>(&mut self, input: &mut R) -> Result<i32, ShellError> {
        if self.prompt.is_interactive() {
            ignore_shell_signals();
        }
        loop {
            self.prompt.show_prompt()?;
            let Some(line) = self.prompt.read_line(input)? else {
                return Ok(self.last_status);
            };
            if let BuiltinStatus::Exit(code) = self.handle_line(&line) {
                debug!("exit requested with {}", code);
                return Ok(code);
            }
        }
    }

    /// Parses and runs one line. A failing line never ends the loop; only
    /// the `exit` builtin does.
    pub fn handle_line(&mut self, line: &str) -> BuiltinStatus {
        let parsed = DefaultParser::new(line, self.config.max_args, self.config.max_depth).parse();
        let cmd = match parsed {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return self.finish(0),
            Err(e) => {
                eprintln!("{}: {}", SHELL_NAME, ShellError::from(e));
                return self.finish(EXIT_SYNTAX);
            }
        };

        if let Command::Simple { program, args } = &cmd {
            if let Some(status) = self.builtins.execute(program, args, self.last_status) {
                if let BuiltinStatus::Continue(code) = status {
                    self.last_status = code;
                }
                return status;
            }
        }

        match self.executor.exec(&cmd) {
            Ok(code) => self.finish(code),
            Err(e) => {
                error!("cannot run `{}`: {}", cmd, e);
                eprintln!("{}: {}", SHELL_NAME, ShellError::from(e));
                self.finish(1)
            }
        }
    }

    fn finish(&mut self, code: i32) -> BuiltinStatus {
        self.last_status = code;
        BuiltinStatus::Continue(code)
    }
}
