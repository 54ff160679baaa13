pub mod default;

use thiserror::Error;
use crate::ast::{Command, MAX_DEPTH};
use default::DefaultParser;

/// Argument slots of a simple command, the program name included.
pub const MAX_ARGS: usize = 10;

pub trait Parser {
    /// `Ok(None)` means the line held nothing to run.
    fn parse(&mut self) -> Result<Option<Command>, ParseError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing file for redirection at position {pos} (found {found})")]
    MissingRedirectTarget { found: String, pos: usize },
    #[error("unexpected token '{found}' at position {pos}")]
    UnexpectedToken { found: String, pos: usize },
    #[error("too many args at position {pos} (at most {max})")]
    TooManyArgs { max: usize, pos: usize },
    /// Redirections with no program, such as `> out.txt`. Refused here
    /// rather than run as an empty command that only opens the file.
    #[error("missing command for redirection at position {pos}")]
    MissingCommand { pos: usize },
    #[error("command nested too deeply at position {pos} (at most {max} levels)")]
    TooDeep { max: usize, pos: usize },
    #[error("leftovers: {rest}")]
    Leftovers { rest: String, pos: usize },
}

/// Parses `line` with the default limits.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    DefaultParser::new(line, MAX_ARGS, MAX_DEPTH).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Direction;

    fn simple(name: &str, args: &[&str]) -> Command {
        Command::simple(name, args.iter().map(|s| s.to_string()).collect())
    }

    fn parse_ok(src: &str) -> Command {
        match parse(src) {
            Ok(Some(cmd)) => cmd,
            other => panic!("expected a command for {:?}, got {:?}", src, other),
        }
    }

    #[test]
    fn test_simple_command() {
        assert_eq!(parse_ok("echo hello"), simple("echo", &["hello"]));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse(" \t\r\n\x0b "), Ok(None));
    }

    #[test]
    fn test_pipeline_is_right_associative() {
        assert_eq!(
            parse_ok("a | b | c"),
            Command::pipeline(
                simple("a", &[]),
                Command::pipeline(simple("b", &[]), simple("c", &[])),
            )
        );
    }

    #[test]
    fn test_redirect_out() {
        assert_eq!(
            parse_ok("cmd arg1 > out.txt"),
            Command::Redirect {
                inner: Box::new(simple("cmd", &["arg1"])),
                file: "out.txt".to_string(),
                direction: Direction::Output,
                fd: 1,
            }
        );
    }

    #[test]
    fn test_command_with_multiple_redirects() {
        assert_eq!(
            parse_ok("cat < in.txt > out.txt"),
            Command::redirect(
                Command::redirect(simple("cat", &[]), "in.txt", Direction::Input),
                "out.txt",
                Direction::Output,
            )
        );
    }

    #[test]
    fn test_redirects_interleaved_with_words() {
        assert_eq!(
            parse_ok("<in.txt sort >out.txt -r"),
            Command::redirect(
                Command::redirect(simple("sort", &["-r"]), "in.txt", Direction::Input),
                "out.txt",
                Direction::Output,
            )
        );
    }

    #[test]
    fn test_pipeline_with_redirects_on_stages() {
        assert_eq!(
            parse_ok("cat < in.txt | grep foo > out.txt"),
            Command::pipeline(
                Command::redirect(simple("cat", &[]), "in.txt", Direction::Input),
                Command::redirect(simple("grep", &["foo"]), "out.txt", Direction::Output),
            )
        );
    }

    #[test]
    fn test_missing_redirect_target() {
        assert!(matches!(
            parse("cat >"),
            Err(ParseError::MissingRedirectTarget { pos: 5, .. })
        ));
        assert!(matches!(
            parse("cat < | wc"),
            Err(ParseError::MissingRedirectTarget { .. })
        ));
    }

    #[test]
    fn test_too_many_args() {
        let ten = "p 1 2 3 4 5 6 7 8 9";
        assert!(parse(ten).is_ok());
        assert_eq!(
            parse(&format!("{} 10", ten)),
            Err(ParseError::TooManyArgs { max: MAX_ARGS, pos: 20 })
        );
    }

    #[test]
    fn test_custom_arg_limit() {
        let mut parser = DefaultParser::new("ls -l -a", 2, MAX_DEPTH);
        assert!(matches!(parser.parse(), Err(ParseError::TooManyArgs { max: 2, .. })));
    }

    #[test]
    fn test_leftovers() {
        assert_eq!(
            parse("cmd )"),
            Err(ParseError::Leftovers {
                rest: ")".to_string(),
                pos: 4,
            })
        );
        assert!(matches!(
            parse("ls ; rm x"),
            Err(ParseError::Leftovers { rest, .. }) if rest == "; rm x"
        ));
    }

    #[test]
    fn test_empty_pipeline_stages() {
        assert!(matches!(parse("| wc"), Err(ParseError::UnexpectedToken { pos: 0, .. })));
        assert!(matches!(parse("ls | | wc"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(
            parse("ls |"),
            Err(ParseError::UnexpectedToken { found, .. }) if found == "end of input"
        ));
    }

    #[test]
    fn test_redirect_without_command() {
        assert_eq!(parse("> out.txt"), Err(ParseError::MissingCommand { pos: 0 }));
    }

    #[test]
    fn test_depth_limit() {
        // a | b is two levels deep, a | b > f three.
        assert!(DefaultParser::new("a | b", MAX_ARGS, 2).parse().is_ok());
        assert_eq!(
            DefaultParser::new("a | b > f", MAX_ARGS, 2).parse(),
            Err(ParseError::TooDeep { max: 2, pos: 4 })
        );
        assert_eq!(
            DefaultParser::new("a > f | b", MAX_ARGS, 2).parse(),
            Err(ParseError::TooDeep { max: 2, pos: 6 })
        );
        assert_eq!(
            DefaultParser::new("a < f > g", MAX_ARGS, 2).parse(),
            Err(ParseError::TooDeep { max: 2, pos: 0 })
        );
    }

    #[test]
    fn test_huge_lines_are_rejected() {
        let stages = vec!["a"; 100_000].join("|");
        assert!(matches!(
            parse(&stages),
            Err(ParseError::TooDeep { max: MAX_DEPTH, .. })
        ));

        let redirs = format!("cat{}", " > f".repeat(100_000));
        assert!(matches!(
            parse(&redirs),
            Err(ParseError::TooDeep { max: MAX_DEPTH, pos: 0 })
        ));

        let longest = vec!["a"; MAX_DEPTH].join("|");
        assert!(parse(&longest).is_ok());
    }

    #[test]
    fn test_display_round_trip() {
        for src in [
            "ls",
            "echo a  b\tc",
            "cat<in.txt>out.txt",
            "sort -r < in.txt | uniq -c | head -n 3 > top.txt",
            "> out.txt echo hi",
        ] {
            let tree = parse_ok(src);
            assert_eq!(parse_ok(&tree.to_string()), tree, "round trip of {:?}", src);
        }
    }
}
