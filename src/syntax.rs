mod expr;
mod lexer;
mod printer;
mod token;

pub use expr::{Expression, Value, Visitor};
pub use lexer::{scan, Lexer, Scanned};
pub use printer::{render, sample, AstPrinter};
pub use token::{Literal, Token, TokenKind};
