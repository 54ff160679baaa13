mod lexer;
mod token;

pub use lexer::{Tokenizer, RESERVED, SYMBOLS, WHITESPACE};
pub use token::{Token, TokenKind};
