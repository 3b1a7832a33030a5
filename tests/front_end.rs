use lox::{
    error::{ErrorKind, Reporter},
    syntax::{render, scan, Expression, Token, TokenKind, Value},
};

#[derive(Default)]
struct Counting {
    lines: Vec<usize>,
}

impl Reporter for Counting {
    fn report(&mut self, diagnostic: &lox::error::Diagnostic) {
        self.lines.push(diagnostic.line);
    }
}

fn number<'src>(token: &Token<'src>) -> Expression<'src> {
    Expression::literal(Value::from(token.literal().unwrap()))
}

#[test]
fn scan_then_render() {
    let scanned = scan("-123 * (45.67)");
    assert!(!scanned.had_error());

    let t = &scanned.tokens;
    let kinds: Vec<_> = t.iter().map(Token::kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::LParen,
            TokenKind::Number,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );

    let expr = Expression::binary(
        Expression::unary(t[0], number(&t[1])).unwrap(),
        t[2],
        Expression::grouping(number(&t[4])),
    );

    assert_eq!(
        render(&expr),
        "Begin: Begin: - 123 :End * Begin: group 45.67 :End :End"
    );
}

#[test]
fn errors_do_not_stop_the_scan() {
    let src = "var a = 1;\n@\nprint a ~ \"oops";
    let scanned = scan(src);

    let mut reporter = Counting::default();
    scanned.report_to(&mut reporter);
    assert_eq!(reporter.lines, vec![2, 3, 3]);

    assert_eq!(scanned.diagnostics[0].kind, ErrorKind::UnexpectedCharacter('@'));
    assert_eq!(scanned.diagnostics[2].kind, ErrorKind::UnterminatedString);

    let lexemes: Vec<_> = scanned.tokens.iter().map(|t| t.lexeme()).collect();
    assert_eq!(lexemes, vec!["var", "a", "=", "1", ";", "print", "a", ""]);
}

#[test]
fn token_lines() {
    let scanned = scan("a\n\nb // c\n  \"d\"");
    let lines: Vec<_> = scanned.tokens.iter().map(|t| (t.lexeme(), t.line())).collect();
    assert_eq!(lines, vec![("a", 1), ("b", 3), ("\"d\"", 4), ("", 4)]);
}
