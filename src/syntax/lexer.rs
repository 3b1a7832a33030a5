use super::token::{Token, TokenKind};
use crate::error::{Diagnostic, ErrorKind, Reporter};

/// Yields one item per recognized token or recoverable fault, then a single
/// `Eof` token, then `None`.
pub struct Lexer<'src> {
    src: &'src str,
    start: usize,
    current: usize,
    line: usize,
    start_line: usize,
    done: bool,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, Diagnostic>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if self.is_at_end() {
                self.done = true;
                return Some(Ok(Token::eof(self.line)));
            }

            self.start = self.current;
            self.start_line = self.line;
            if let Some(item) = self.scan_token() {
                return Some(item);
            }
        }
        None
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            done: false,
        }
    }

    fn scan_token(&mut self) -> Option<Result<Token<'src>, Diagnostic>> {
        let c = self.advance()?;

        let token = match c {
            '(' => self.token(TokenKind::LParen),
            ')' => self.token(TokenKind::RParen),
            '{' => self.token(TokenKind::LCurly),
            '}' => self.token(TokenKind::RCurly),
            ',' => self.token(TokenKind::Comma),
            '.' => self.token(TokenKind::Dot),
            '-' => self.token(TokenKind::Minus),
            '+' => self.token(TokenKind::Plus),
            ';' => self.token(TokenKind::Semicolon),
            '*' => self.token(TokenKind::Star),
            '!' => self.token_or_eq(TokenKind::Bang, TokenKind::BangEq),
            '=' => self.token_or_eq(TokenKind::Eq, TokenKind::EqEq),
            '<' => self.token_or_eq(TokenKind::Lt, TokenKind::LtEq),
            '>' => self.token_or_eq(TokenKind::Gt, TokenKind::GtEq),
            '/' => {
                if self.eat('/') {
                    // comment runs up to, not including, the newline
                    self.eat_while(|c| c != '\n');
                    return None;
                }
                self.token(TokenKind::Slash)
            }
            ' ' | '\r' | '\t' => return None,
            '\n' => {
                self.line += 1;
                return None;
            }
            '"' => return self.read_string(),
            c if c.is_ascii_digit() => self.read_number(),
            c if Self::is_id_start(c) => self.read_id(),
            c => return Some(Err(self.error(ErrorKind::UnexpectedCharacter(c)))),
        };

        Some(Ok(token))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.src[self.current..].chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            return true;
        }
        false
    }

    fn eat_while<P>(&mut self, predicate: P)
    where
        P: Fn(char) -> bool,
    {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.current += c.len_utf8();
        }
    }

    #[inline]
    fn lexeme(&self) -> &'src str {
        &self.src[self.start..self.current]
    }

    fn token(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.lexeme(), self.start_line)
    }

    fn token_or_eq(&mut self, single: TokenKind, double: TokenKind) -> Token<'src> {
        if self.eat('=') {
            self.token(double)
        } else {
            self.token(single)
        }
    }

    fn error(&self, kind: ErrorKind) -> Diagnostic {
        log::debug!("line {}: {kind} ({:?})", self.line, self.lexeme());
        Diagnostic::new(self.line, kind)
    }

    fn read_string(&mut self) -> Option<Result<Token<'src>, Diagnostic>> {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.current += c.len_utf8();
        }

        if self.is_at_end() {
            return Some(Err(self.error(ErrorKind::UnterminatedString)));
        }

        // closing quote
        self.current += 1;

        let lexeme = self.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        Some(Ok(Token::string(lexeme, value, self.start_line)))
    }

    fn read_number(&mut self) -> Token<'src> {
        self.eat_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
            self.eat_while(|c| c.is_ascii_digit());
        }

        let lexeme = self.lexeme();
        let value = lexeme
            .parse::<f64>()
            .expect("Failed to parse number. (This should never happen)");
        Token::number(lexeme, value, self.start_line)
    }

    fn read_id(&mut self) -> Token<'src> {
        self.eat_while(Self::is_id_part);
        let kind = TokenKind::keyword(self.lexeme()).unwrap_or(TokenKind::Id);
        self.token(kind)
    }

    fn is_id_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    fn is_id_part(c: char) -> bool {
        Self::is_id_start(c) || c.is_ascii_digit()
    }
}

/// Everything one scan produced: the recognized tokens, always ending in
/// `Eof`, and the faults found along the way.
#[derive(Debug)]
pub struct Scanned<'src> {
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'src> Scanned<'src> {
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn report_to<R>(&self, reporter: &mut R)
    where
        R: Reporter + ?Sized,
    {
        for diagnostic in &self.diagnostics {
            reporter.report(diagnostic);
        }
    }
}

pub fn scan(src: &str) -> Scanned<'_> {
    let mut tokens = vec![];
    let mut diagnostics = vec![];

    for item in Lexer::new(src) {
        match item {
            Ok(token) => {
                log::trace!("{token}");
                tokens.push(token);
            }
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }

    log::debug!(
        "scanned {} tokens, {} errors",
        tokens.len(),
        diagnostics.len()
    );

    Scanned {
        tokens,
        diagnostics,
    }
}
