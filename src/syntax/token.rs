use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens
    LParen,
    RParen,
    LCurly,
    RCurly,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEq,
    Eq,
    EqEq,
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Literals
    Id,
    Str,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    True,
    Fun,
    For,
    Nul,
    If,
    Or,
    Print,
    Return,
    Super,
    This,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Whole-word keyword lookup.
    pub fn keyword(s: &str) -> Option<Self> {
        match s {
            "and" => Some(Self::And),
            "class" => Some(Self::Class),
            "else" => Some(Self::Else),
            "false" => Some(Self::False),
            "true" => Some(Self::True),
            "fun" => Some(Self::Fun),
            "for" => Some(Self::For),
            "nul" => Some(Self::Nul),
            "if" => Some(Self::If),
            "or" => Some(Self::Or),
            "print" => Some(Self::Print),
            "return" => Some(Self::Return),
            "super" => Some(Self::Super),
            "this" => Some(Self::This),
            "var" => Some(Self::Var),
            "while" => Some(Self::While),
            _ => None,
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Class
                | Self::Else
                | Self::False
                | Self::True
                | Self::Fun
                | Self::For
                | Self::Nul
                | Self::If
                | Self::Or
                | Self::Print
                | Self::Return
                | Self::Super
                | Self::This
                | Self::Var
                | Self::While
        )
    }

    pub fn is_prefix_operator(self) -> bool {
        matches!(self, Self::Minus | Self::Bang)
    }
}

/// Decoded value of a number or string token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'src> {
    Number(f64),
    Str(&'src str),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// One lexical unit. Only `Number` and `Str` tokens carry a literal; the
/// constructors are the only way to build one, so that always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'src> {
    kind: TokenKind,
    lexeme: &'src str,
    literal: Option<Literal<'src>>,
    line: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, line: usize) -> Self {
        debug_assert!(!matches!(kind, TokenKind::Number | TokenKind::Str));
        Self {
            kind,
            lexeme,
            literal: None,
            line,
        }
    }

    pub fn number(lexeme: &'src str, value: f64, line: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            lexeme,
            literal: Some(Literal::Number(value)),
            line,
        }
    }

    pub fn string(lexeme: &'src str, value: &'src str, line: usize) -> Self {
        Self {
            kind: TokenKind::Str,
            lexeme,
            literal: Some(Literal::Str(value)),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &'src str {
        self.lexeme
    }

    pub fn literal(&self) -> Option<Literal<'src>> {
        self.literal
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} ", self.kind, self.lexeme)?;
        match self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => f.write_str("nul"),
        }
    }
}
