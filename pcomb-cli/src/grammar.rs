//! Grammar of the calculator:
//!
//! ```text
//! expr   := term
//! term   := factor (("+" | "-") factor)*
//! factor := atom (("*" | "/") atom)*
//! atom   := number | "(" expr ")"
//! number := [+-]?[0-9]+
//! ```
//!
//! Every terminal is a token, so whitespace may appear anywhere between them.

use pcomb::prelude::*;
use pcomb::GrammarResult;

use crate::ast::{BinaryOp, Expr};
use crate::error::{CalcError, CalcResult};

pub struct Calculator {
    expr: Forward<Expr>,
    whitespace: WhitespaceSet,
}

fn operator(
    symbol: char,
    op: BinaryOp,
    ws: &WhitespaceSet,
) -> impl Parser<Output = BinaryOp> + Clone + Send + Sync + 'static {
    token_with(rule(ch(symbol), move |_| op), ws.clone())
}

fn fold_left((first, rest): (Expr, Vec<(BinaryOp, Expr)>)) -> Expr {
    rest.into_iter()
        .fold(first, |lhs, (op, rhs)| Expr::binary(op, lhs, rhs))
}

impl Calculator {
    pub fn new(lex: &LexConfig) -> GrammarResult<Self> {
        let ws = lex.whitespace_set();
        let expr: Forward<Expr> = Forward::new();

        let number = try_rule(token_with(regex("[+-]?[0-9]+")?, ws.clone()), |digits: Span| {
            digits.parse::<i64>().map(Expr::Num)
        });
        let parenthesized = delimited(
            token_with(ch('('), ws.clone()),
            expr.reference(),
            token_with(ch(')'), ws.clone()),
        );
        let atom = alt((number, parenthesized));

        let mul_op = alt((
            operator('*', BinaryOp::Mul, &ws),
            operator('/', BinaryOp::Div, &ws),
        ));
        let factor = rule(seq((atom.clone(), many(seq((mul_op, atom))))), fold_left);

        let add_op = alt((
            operator('+', BinaryOp::Add, &ws),
            operator('-', BinaryOp::Sub, &ws),
        ));
        let term = rule(seq((factor.clone(), many(seq((add_op, factor))))), fold_left);

        expr.bind(term);
        Ok(Self {
            expr,
            whitespace: ws,
        })
    }

    /// Parses `text`, which must hold exactly one expression.
    ///
    /// A failure is reported at the furthest position any attempt reached,
    /// after whitespace was skipped. For `"2 + "` that is column 5, where the
    /// missing operand would start, not column 4 right after the `+`.
    pub fn parse_line(&self, text: &str) -> CalcResult<Expr> {
        let whole = complete(lexeme_with(
            token_with(&self.expr, self.whitespace.clone()),
            self.whitespace.clone(),
        ));
        let (_, expr) = whole.parse_str(text)?;
        tracing::debug!("parsed {}", expr);
        Ok(expr)
    }

    /// Parses the longest expression at the start of `text`. Anything but
    /// whitespace after it is reported as excessive input.
    pub fn parse_line_lenient(&self, text: &str) -> CalcResult<Expr> {
        let (rest, expr) = token_with(&self.expr, self.whitespace.clone()).parse_str(text)?;
        let rest = self.whitespace.skip(&rest);
        if !rest.is_at_end() {
            return Err(CalcError::ExcessiveInput {
                line: rest.line(),
                column: rest.column(),
                rest: rest.remaining().to_string(),
            });
        }
        tracing::debug!("parsed {}", expr);
        Ok(expr)
    }
}
