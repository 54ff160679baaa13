use std::io::{self, BufRead, Write};

use nix::unistd::isatty;

pub struct ShellPrompt {
    prompt: String,
    interactive: bool,
}

impl ShellPrompt {
    pub fn new(prompt: &str) -> Self {
        ShellPrompt {
            prompt: prompt.to_string(),
            interactive: isatty(libc::STDIN_FILENO).unwrap_or(false),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// The prompt is only shown when a person is typing.
    pub fn show_prompt(&self) -> io::Result<()> {
        if self.interactive {
            let mut stdout = io::stdout();
            stdout.write_all(self.prompt.as_bytes())?;
            stdout.flush()?;
        }
        Ok(())
    }

    /// Reads one line without its terminator; `None` at EOF.
    pub fn read_line<R: BufRead>(&self, input: &mut R) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let bytes_read = input.read_line(&mut buf)?;
        if bytes_read == 0 {
            // EOF (e.g., Ctrl-D)
            if self.interactive {
                println!();
            }
            return Ok(None);
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        Ok(Some(line.strip_suffix('\r').unwrap_or(line).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_until_eof() {
        let prompt = ShellPrompt::new("$ ");
        let mut input = Cursor::new("ls -l\r\necho hi\nlast");
        assert_eq!(prompt.read_line(&mut input).unwrap(), Some("ls -l".to_string()));
        assert_eq!(prompt.read_line(&mut input).unwrap(), Some("echo hi".to_string()));
        assert_eq!(prompt.read_line(&mut input).unwrap(), Some("last".to_string()));
        assert_eq!(prompt.read_line(&mut input).unwrap(), None);
    }
}
