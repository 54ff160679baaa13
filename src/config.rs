use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ast::MAX_DEPTH;
use crate::executor::DEFAULT_SEARCH_DIRS;
use crate::parser::MAX_ARGS;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "MINI_SHELL_CONFIG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub prompt: String,
    /// Probed in order when a program name has no `/`.
    pub search_dirs: Vec<PathBuf>,
    pub max_args: usize,
    pub max_depth: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        ConfigLoader::default_config()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: Line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn default_config() -> Config {
        Config {
            prompt: "$ ".to_string(),
            search_dirs: DEFAULT_SEARCH_DIRS.iter().map(PathBuf::from).collect(),
            max_args: MAX_ARGS,
            max_depth: MAX_DEPTH,
            log_level: "warn".to_string(),
        }
    }

    /// Reads the file named by `MINI_SHELL_CONFIG`, or returns the defaults.
    pub fn load() -> Result<Config, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default_config()),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let src = fs::read_to_string(path)?;
        Self::load_from_str(&src)
    }

    pub fn load_from_str(src: &str) -> Result<Config, ConfigError> {
        let mut config = Self::default_config();

        for (lineno, line) in src.lines().enumerate() {
            let lineno = lineno + 1;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((key, raw)) = line.split_once('=') else {
                return Err(parse_error(lineno, format!("No '=' found: {}", line)));
            };
            // The prompt keeps its spacing; every other value is trimmed.
            let value = raw.trim();

            match key.trim() {
                "prompt" => config.prompt = raw.to_string(),
                "search_dirs" => {
                    config.search_dirs = value
                        .split(':')
                        .filter(|dir| !dir.is_empty())
                        .map(PathBuf::from)
                        .collect();
                }
                "max_args" => config.max_args = parse_limit(lineno, value)?,
                "max_depth" => config.max_depth = parse_limit(lineno, value)?,
                "log_level" => config.log_level = value.to_string(),
                k => return Err(parse_error(lineno, format!("Unknown key: {}", k))),
            }
        }

        Ok(config)
    }
}

fn parse_error(line: usize, msg: String) -> ConfigError {
    ConfigError::Parse { line, msg }
}

fn parse_limit(line: usize, value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(parse_error(line, format!("Invalid limit: {}", value))),
    }
}
