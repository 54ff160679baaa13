use std::fmt;
use std::os::unix::io::RawFd;

/// Most nodes on any root-to-leaf path of a tree the shell will build or run.
pub const MAX_DEPTH: usize = 256;

/// Command tree built from one input line.
///
/// Every subtree is owned by exactly one parent, so a tree is dropped as a
/// whole once the line has been executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Simple {
        program: String,
        args: Vec<String>,
    },
    Redirect {
        inner: Box<Command>,
        file: String,
        direction: Direction,
        /// Standard stream slot replaced by the opened file.
        fd: RawFd,
    },
    Pipeline {
        left: Box<Command>,
        right: Box<Command>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `< file`: read-only, the file must exist.
    Input,
    /// `> file`: write-only, created if missing and truncated otherwise.
    Output,
}

impl Direction {
    pub fn target_fd(self) -> RawFd {
        match self {
            Direction::Input => libc::STDIN_FILENO,
            Direction::Output => libc::STDOUT_FILENO,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::Input => '<',
            Direction::Output => '>',
        }
    }
}

impl Command {
    pub fn simple<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Command::Simple {
            program: program.into(),
            args,
        }
    }

    pub fn redirect<S: Into<String>>(inner: Command, file: S, direction: Direction) -> Self {
        Command::Redirect {
            inner: Box::new(inner),
            file: file.into(),
            direction,
            fd: direction.target_fd(),
        }
    }

    pub fn pipeline(left: Command, right: Command) -> Self {
        Command::Pipeline {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

// Renders the line the parser would turn back into this tree.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Simple { program, args } => {
                write!(f, "{}", program)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                Ok(())
            }
            Command::Redirect { inner, file, direction, .. } => {
                write!(f, "{} {} {}", inner, direction.symbol(), file)
            }
            Command::Pipeline { left, right } => write!(f, "{} | {}", left, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_redirect_targets_standard_slots() {
        let input = Command::redirect(Command::simple("cat", vec![]), "in.txt", Direction::Input);
        let output = Command::redirect(Command::simple("ls", vec![]), "out.txt", Direction::Output);
        assert!(matches!(input, Command::Redirect { fd: 0, .. }));
        assert!(matches!(output, Command::Redirect { fd: 1, .. }));
    }

    #[test]
    fn test_display_nested_redirects_and_pipeline() {
        let cmd = Command::pipeline(
            Command::redirect(
                Command::redirect(Command::simple("sort", words(&["-r"])), "in.txt", Direction::Input),
                "out.txt",
                Direction::Output,
            ),
            Command::simple("wc", words(&["-l"])),
        );
        assert_eq!(cmd.to_string(), "sort -r < in.txt > out.txt | wc -l");
    }
}
