use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Pipe,        // |
    RedirectIn,  // <
    RedirectOut, // >
    Word,        // Program name, argument or file name
    Unknown,     // ; & ( ), reserved but not part of the grammar
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: (usize, usize), // Position info [start, end)
}

impl Token {
    /// The slice of `src` this token covers.
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.span.0..self.span.1]
    }

    /// Copies the covered text out of the line so the tree does not borrow it.
    pub fn to_word(&self, src: &str) -> String {
        self.text(src).to_string()
    }

    pub fn describe(&self, src: &str) -> String {
        match self.kind {
            TokenKind::End => "end of input".to_string(),
            _ => self.text(src).to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Pipe => write!(f, "pipe"),
            TokenKind::RedirectIn => write!(f, "redirect-in"),
            TokenKind::RedirectOut => write!(f, "redirect-out"),
            TokenKind::Word => write!(f, "word"),
            TokenKind::Unknown => write!(f, "unknown"),
            TokenKind::End => write!(f, "end"),
        }
    }
}
