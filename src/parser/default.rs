use log::debug;

use crate::ast::{Command, Direction};
use crate::lexer::{RESERVED, TokenKind, Tokenizer};
use crate::parser::{ParseError, Parser};

/// Top-down recursive descent parser over a single line.
///
/// ```text
/// line     := pipeline end
/// pipeline := exec ( '|' exec )*        folded right: a | (b | c)
/// exec     := redirs ( word redirs )*
/// redirs   := ( ('<' | '>') word )*
/// ```
pub struct DefaultParser<'a> {
    tokenizer: Tokenizer<'a>,
    max_args: usize,
    max_depth: usize,
}

impl<'a> DefaultParser<'a> {
    pub fn new(line: &'a str, max_args: usize, max_depth: usize) -> Self {
        Self {
            tokenizer: Tokenizer::new(line),
            max_args,
            max_depth,
        }
    }

    fn src(&self) -> &'a str {
        self.tokenizer.source()
    }
}

impl<'a> Parser for DefaultParser<'a> {
    fn parse(&mut self) -> Result<Option<Command>, ParseError> {
        let cmd = self.parse_pipeline()?;
        // Skip trailing whitespace before checking for leftovers.
        self.tokenizer.peek(&[]);
        if !self.tokenizer.is_at_end() {
            return Err(ParseError::Leftovers {
                rest: self.tokenizer.remainder().to_string(),
                pos: self.tokenizer.position(),
            });
        }
        debug!("parsed {:?}", cmd);
        Ok(cmd)
    }
}

impl<'a> DefaultParser<'a> {
    fn parse_pipeline(&mut self) -> Result<Option<Command>, ParseError> {
        let mut stages = Vec::new();
        loop {
            // A stage sits under one pipeline node per earlier stage, plus
            // one more unless it is the last.
            let above = stages.len();
            let height = match self.parse_exec(above)? {
                Some((cmd, height)) => {
                    stages.push(cmd);
                    height
                }
                // Nothing at all on the line.
                None if stages.is_empty() && !self.tokenizer.peek(&['|']) => return Ok(None),
                None => {
                    let pos = self.tokenizer.position();
                    let token = self.tokenizer.next_token();
                    return Err(ParseError::UnexpectedToken {
                        found: token.describe(self.src()),
                        pos,
                    });
                }
            };
            if !self.tokenizer.peek(&['|']) {
                break;
            }
            self.check_depth(above + 1 + height, self.tokenizer.position())?;
            self.tokenizer.next_token();
        }

        let mut stages = stages.into_iter().rev();
        Ok(stages
            .next()
            .map(|last| stages.fold(last, |right, left| Command::pipeline(left, right))))
    }

    /// Parses one stage and returns it with its own height, the redirections
    /// wrapped around the simple command included.
    fn parse_exec(&mut self, above: usize) -> Result<Option<(Command, usize)>, ParseError> {
        let start = self.tokenizer.position();
        let mut words = Vec::new();
        let mut redirs = Vec::new();

        self.parse_redirs(&mut redirs)?;
        while !self.tokenizer.peek(&['|']) && !self.tokenizer.peek(RESERVED) {
            let token = self.tokenizer.next_token();
            match token.kind {
                TokenKind::End => break,
                TokenKind::Word => {
                    if words.len() >= self.max_args {
                        return Err(ParseError::TooManyArgs {
                            max: self.max_args,
                            pos: token.span.0,
                        });
                    }
                    words.push(token.to_word(self.src()));
                }
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        found: token.describe(self.src()),
                        pos: token.span.0,
                    });
                }
            }
            self.parse_redirs(&mut redirs)?;
        }

        let mut words = words.into_iter();
        let Some(program) = words.next() else {
            if redirs.is_empty() {
                return Ok(None);
            }
            return Err(ParseError::MissingCommand { pos: start });
        };
        let height = redirs.len() + 1;
        self.check_depth(above + height, start)?;

        let cmd = Command::simple(program, words.collect());
        // The first redirection seen ends up innermost.
        let cmd = redirs.into_iter().fold(cmd, |inner, (file, direction)| {
            Command::redirect(inner, file, direction)
        });
        Ok(Some((cmd, height)))
    }

    // Trees are rejected before they are built; dropping one recurses.
    fn check_depth(&self, depth: usize, pos: usize) -> Result<(), ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::TooDeep {
                max: self.max_depth,
                pos,
            });
        }
        Ok(())
    }

    fn parse_redirs(&mut self, redirs: &mut Vec<(String, Direction)>) -> Result<(), ParseError> {
        while self.tokenizer.peek(&['<', '>']) {
            let op = self.tokenizer.next_token();
            let direction = match op.kind {
                TokenKind::RedirectIn => Direction::Input,
                _ => Direction::Output,
            };
            let target = self.tokenizer.next_token();
            if target.kind != TokenKind::Word {
                return Err(ParseError::MissingRedirectTarget {
                    found: target.describe(self.src()),
                    pos: target.span.0,
                });
            }
            redirs.push((target.to_word(self.src()), direction));
        }
        Ok(())
    }
}
