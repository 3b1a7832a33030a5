use std::fmt;

use thiserror::Error;

use crate::syntax::TokenKind;

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("`{0:?}` is not a prefix operator")]
    InvalidPrefixOperator(TokenKind),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnexpectedCharacter(a), Self::UnexpectedCharacter(b)) => a == b,
            (Self::UnterminatedString, Self::UnterminatedString) => true,
            (Self::InvalidPrefixOperator(a), Self::InvalidPrefixOperator(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

pub type PResult<T> = Result<T, ErrorKind>;

/// A recoverable fault found while scanning, tied to the line it was found on.
#[derive(Debug, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: ErrorKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.kind)
    }
}

/// Sink for diagnostics. Reporting never stops a scan.
pub trait Reporter {
    fn report(&mut self, diagnostic: &Diagnostic);
}

pub struct StderrReporter {
    had_error: bool,
}

impl StderrReporter {
    pub fn new() -> Self {
        Self { had_error: false }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn reset(&mut self) {
        self.had_error = false;
    }
}

impl Default for StderrReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for StderrReporter {
    fn report(&mut self, diagnostic: &Diagnostic) {
        eprintln!("{diagnostic}");
        self.had_error = true;
    }
}

/// Collects `(line, message)` pairs.
impl Reporter for Vec<(usize, String)> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push((diagnostic.line, diagnostic.message()));
    }
}
