use super::{
    expr::{Expression, Value, Visitor},
    token::{Token, TokenKind},
};

const BEGIN: &str = "Begin:";
const END: &str = ":End";

/// Renders a tree as nested `Begin: ... :End` forms, e.g.
/// `Begin: Begin: - 123 :End * Begin: group 45.67 :End :End`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expression) -> String {
        expr.accept(self)
    }

    fn wrap(&mut self, name: &str, exprs: &[&Expression]) -> String {
        let mut out = format!("{BEGIN} {name}");
        for expr in exprs {
            out.push(' ');
            let rendered: String = expr.accept(self);
            out.push_str(&rendered);
        }
        out.push(' ');
        out.push_str(END);
        out
    }
}

impl<'src> Visitor<'src, String> for AstPrinter {
    fn visit_literal(&mut self, value: Option<&Value<'src>>) -> String {
        match value {
            None => "nul".to_string(),
            Some(value) => value.to_string(),
        }
    }

    fn visit_grouping(&mut self, expr: &Expression<'src>) -> String {
        self.wrap("group", &[expr])
    }

    fn visit_unary(&mut self, op: &Token<'src>, rhs: &Expression<'src>) -> String {
        self.wrap(op.lexeme(), &[rhs])
    }

    fn visit_binary(
        &mut self,
        lhs: &Expression<'src>,
        op: &Token<'src>,
        rhs: &Expression<'src>,
    ) -> String {
        let lhs: String = lhs.accept(self);
        let rhs: String = rhs.accept(self);
        format!("{BEGIN} {lhs} {} {rhs} {END}", op.lexeme())
    }
}

pub fn render(expr: &Expression) -> String {
    AstPrinter.print(expr)
}

/// `(-123) * (45.67)`, built by hand.
pub fn sample() -> Expression<'static> {
    let minus = Token::new(TokenKind::Minus, "-", 1);
    let star = Token::new(TokenKind::Star, "*", 1);

    Expression::Binary {
        lhs: Box::new(Expression::Unary {
            op: minus,
            rhs: Box::new(Expression::literal(123.0)),
        }),
        op: star,
        rhs: Box::new(Expression::grouping(Expression::literal(45.67))),
    }
}

#[cfg(test)]
mod test {
    use super::{render, sample};
    use crate::syntax::{
        expr::Expression,
        lexer::scan,
        token::{Token, TokenKind},
    };

    #[test]
    fn print_sample() {
        assert_eq!(
            render(&sample()),
            "Begin: Begin: - 123 :End * Begin: group 45.67 :End :End"
        );
    }

    #[test]
    fn print_literals() {
        assert_eq!(render(&Expression::nul()), "nul");
        assert_eq!(render(&Expression::literal(true)), "true");
        assert_eq!(render(&Expression::literal("hi")), "hi");
        assert_eq!(render(&Expression::literal(0.5)), "0.5");
    }

    #[test]
    fn print_binary_left_to_right() {
        let plus = Token::new(TokenKind::Plus, "+", 1);
        let expr = Expression::binary(Expression::literal(1.0), plus, Expression::literal(2.0));
        assert_eq!(render(&expr), "Begin: 1 + 2 :End");
    }

    #[test]
    fn print_is_idempotent() {
        let bang = Token::new(TokenKind::Bang, "!", 1);
        let expr = Expression::unary(bang, Expression::grouping(sample())).unwrap();

        let first = render(&expr);
        assert_eq!(first, render(&expr));
        assert_eq!(
            first,
            "Begin: ! Begin: group Begin: Begin: - 123 :End * Begin: group 45.67 :End :End :End :End"
        );
    }

    #[test]
    fn print_from_scanned_tokens() {
        let src = "\"a\" != 2.5";
        let tokens = scan(src).tokens;
        let expr = Expression::binary(
            Expression::literal(tokens[0].literal().unwrap()),
            tokens[1],
            Expression::literal(tokens[2].literal().unwrap()),
        );

        assert_eq!(render(&expr), "Begin: a != 2.5 :End");
    }
}
