mod arithmetic_test;
mod concurrency_test;
mod forward_test;
mod literal_test;
mod repetition_test;
mod sequence_test;
mod whitespace_test;

use pcomb::prelude::*;

/// Integer arithmetic with the usual precedence, evaluated while parsing.
pub fn arithmetic() -> Forward<i64> {
    let expr: Forward<i64> = Forward::new();

    let number = try_rule(token(regex("[0-9]+").unwrap()), |digits: Span| {
        digits.parse::<i64>()
    });
    let parenthesized = delimited(token(ch('(')), expr.reference(), token(ch(')')));
    let atom = alt((number, parenthesized));

    let factor = rule(
        seq((atom.clone(), many(seq((token(alt((ch('*'), ch('/')))), atom))))),
        |(first, rest): (i64, Vec<(char, i64)>)| {
            rest.into_iter()
                .fold(first, |acc, (op, rhs)| if op == '*' { acc * rhs } else { acc / rhs })
        },
    );
    let term = rule(
        seq((factor.clone(), many(seq((token(alt((ch('+'), ch('-')))), factor))))),
        |(first, rest): (i64, Vec<(char, i64)>)| {
            rest.into_iter()
                .fold(first, |acc, (op, rhs)| if op == '+' { acc + rhs } else { acc - rhs })
        },
    );

    expr.bind(term);
    expr
}
