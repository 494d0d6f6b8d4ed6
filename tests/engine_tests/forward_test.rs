use pcomb::prelude::*;

fn nested_number() -> Forward<u32> {
    let expr: Forward<u32> = Forward::new();
    let number = try_rule(regex("[0-9]+").unwrap(), |digits: Span| digits.parse::<u32>());
    expr.bind(alt((number, delimited(ch('('), expr.reference(), ch(')')))));
    expr
}

#[test]
fn test_unbounded_nesting() {
    let expr = nested_number();
    let (rest, value) = expr.parse_str("(((1)))").unwrap();
    assert_eq!(value, 1);
    assert!(rest.is_at_end());

    let deep = format!("{}42{}", "(".repeat(64), ")".repeat(64));
    assert_eq!(expr.parse_str(&deep).unwrap().1, 42);
}

#[test]
fn test_unbalanced_nesting_is_a_failure() {
    let expr = nested_number();
    let error = expr.parse_str("(((1))").unwrap_err();
    // 最後の ')' が足りない位置
    assert_eq!(error.position().column, 7);

    assert!(complete(&expr).parse_str("((1)))").is_err());
}

#[test]
fn test_mutual_recursion() {
    // list := "[" items "]", items := (list | "x")*
    let list: Forward<usize> = Forward::new();
    let items: Forward<usize> = Forward::new();

    items.bind(rule(
        many(alt((list.reference(), rule(ch('x'), |_| 1usize)))),
        |counts: Vec<usize>| counts.into_iter().sum::<usize>(),
    ));
    list.bind(delimited(ch('['), items.reference(), ch(']')));

    assert_eq!(list.parse_str("[x[xx][[x]]]").unwrap().1, 4);
    assert!(list.parse_str("[x[x]").is_err());
}
