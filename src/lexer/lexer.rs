use super::token::{Token, TokenKind};

pub const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n', '\x0b'];
/// Characters that end a word: the grammar's own symbols plus the
/// metacharacters of constructs this shell refuses.
pub const SYMBOLS: &[char] = &['<', '|', '>', ';', '&', '(', ')'];
pub const RESERVED: &[char] = &[';', '&', '(', ')'];

/// Cursor over one input line producing tokens on demand.
///
/// Only one token of lookahead exists: [`Tokenizer::peek`] inspects the next
/// non-whitespace character without consuming a token.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn source(&self) -> &'a str {
        self.input
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn current(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current() {
            if !WHITESPACE.contains(&ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Skips whitespace and reports whether the next character is one of `toks`.
    pub fn peek(&mut self, toks: &[char]) -> bool {
        self.skip_whitespace();
        match self.current() {
            Some(ch) => toks.contains(&ch),
            None => false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.pos;

        let kind = match self.current() {
            None => TokenKind::End,
            Some(ch) => {
                self.pos += ch.len_utf8();
                match ch {
                    '|' => TokenKind::Pipe,
                    '<' => TokenKind::RedirectIn,
                    '>' => TokenKind::RedirectOut,
                    c if RESERVED.contains(&c) => TokenKind::Unknown,
                    _ => {
                        while let Some(c) = self.current() {
                            if WHITESPACE.contains(&c) || SYMBOLS.contains(&c) {
                                break;
                            }
                            self.pos += c.len_utf8();
                        }
                        TokenKind::Word
                    }
                }
            }
        };
        let token = Token {
            kind,
            span: (start, self.pos),
        };

        self.skip_whitespace();
        token
    }
}
