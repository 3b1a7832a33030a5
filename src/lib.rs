//! Scanner, expression tree and tree printer for the Lox expression front end.
//!
//! ```
//! let scanned = lox::syntax::scan("1 + 2");
//! assert!(!scanned.had_error());
//! assert_eq!(scanned.tokens.len(), 4);
//! ```

pub mod error;
pub mod syntax;
