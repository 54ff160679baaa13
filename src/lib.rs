pub mod ast;
pub mod builtins;
pub mod config;
pub mod error;
pub mod executor;
pub mod lexer;
pub mod logger;
pub mod parser;
pub mod prompt;
pub mod repl;

/// Prefix for messages the shell writes to stderr.
pub const SHELL_NAME: &str = "mini-shell";
