use crate::ast::expr::Expr;
use crate::frontend::literal::Literal;

/// Prints expressions in reverse polish notation: every operator follows
/// its operands, so `(1 + 2) * (4 - 3)` becomes `1 2 + 4 3 - *`.
///
/// Parenthesized sub-expressions keep an explicit `group` marker.
#[derive(Debug, Default, Clone, Copy)]
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn print(&self, expr: &Expr) -> String {
        match expr {
            Expr::Binary {
                left,
                operator,
                right,
            } => self.rpn(&operator.lexeme, &[left, right]),
            Expr::Unary { operator, right } => self.rpn(&operator.lexeme, &[right]),
            Expr::Literal(literal) => self.rpn(&literal_text(literal), &[]),
            Expr::Grouping { expression } => self.rpn("group", &[expression]),
        }
    }

    fn rpn(&self, name: &str, exprs: &[&Expr]) -> String {
        let mut builder = String::new();
        for expr in exprs {
            builder.push_str(&self.print(expr));
            builder.push(' ');
        }
        builder.push_str(name);
        builder
    }
}

fn literal_text(literal: &Literal) -> String {
    match literal {
        Literal::None => String::from("nil"),
        Literal::Boolean(boolean) => boolean.to_string(),
        Literal::String(string) => string.clone(),
        Literal::Number(number) => number.to_string(),
    }
}

/// Shorthand for [`RpnPrinter::print`].
pub fn render(expr: &Expr) -> String {
    RpnPrinter.print(expr)
}
