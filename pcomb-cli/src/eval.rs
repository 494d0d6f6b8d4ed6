use crate::ast::{BinaryOp, Expr};
use crate::error::{CalcError, CalcResult};

/// Evaluates with checked arithmetic. Division truncates toward zero.
pub fn evaluate(expr: &Expr) -> CalcResult<i64> {
    match expr {
        Expr::Num(n) => Ok(*n),
        Expr::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs)?;
            let rhs = evaluate(rhs)?;
            let result = match op {
                BinaryOp::Add => lhs.checked_add(rhs),
                BinaryOp::Sub => lhs.checked_sub(rhs),
                BinaryOp::Mul => lhs.checked_mul(rhs),
                BinaryOp::Div => {
                    if rhs == 0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    lhs.checked_div(rhs)
                }
            };
            result.ok_or(CalcError::Overflow)
        }
    }
}
