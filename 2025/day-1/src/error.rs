use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Why a single instruction line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("invalid direction {}, expected 'L' or 'R'", describe(.found))]
    #[diagnostic(
        code(secret_entrance::invalid_direction),
        help("every instruction starts with a direction, e.g. `R14` or `L50`")
    )]
    InvalidDirection { found: Option<char> },

    #[error("invalid click count {found:?}: {reason}")]
    #[diagnostic(
        code(secret_entrance::invalid_clicks),
        help("the direction must be followed by a base-10 integer")
    )]
    InvalidClicks { found: String, reason: String },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => String::from("<empty line>"),
    }
}

impl ParseError {
    /// Byte range of `line` that caused this error.
    pub fn span(&self, line: &str) -> SourceSpan {
        let prefix = line.chars().next().map_or(0, char::len_utf8);
        match self {
            Self::InvalidDirection { .. } => (0, prefix).into(),
            Self::InvalidClicks { .. } => (prefix, line.len() - prefix).into(),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("malformed instruction on line {line}")]
    #[diagnostic(code(secret_entrance::malformed_instruction))]
    Parse {
        line: usize,
        #[source_code]
        source_code: String,
        #[label("not a valid instruction")]
        span: SourceSpan,
        #[source]
        kind: ParseError,
    },

    #[error("failed to read puzzle input")]
    #[diagnostic(code(secret_entrance::io))]
    Io(#[from] std::io::Error),

    #[error("reset count overflowed on line {line}")]
    #[diagnostic(
        code(secret_entrance::reset_overflow),
        help("the total number of resets must fit in an unsigned 64-bit integer")
    )]
    ResetOverflow { line: usize },

    #[error("a dial of {size} positions cannot start at position {start}")]
    #[diagnostic(
        code(secret_entrance::invalid_config),
        help("the dial needs at least one position and the start must be below its size")
    )]
    InvalidConfig { size: u32, start: u32 },
}

impl Error {
    /// Wraps a rejected line with its 1-based line number.
    pub fn parse(line: usize, text: &str, kind: ParseError) -> Self {
        Self::Parse {
            line,
            source_code: text.to_string(),
            span: kind.span(text),
            kind,
        }
    }

    /// The parse failure behind this error, if it was one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
