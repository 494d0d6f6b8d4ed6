use pcomb::prelude::*;
use pretty_assertions::assert_eq;

use super::arithmetic;

#[test]
fn test_precedence() {
    let grammar = arithmetic();
    let whole = end_of_input(&grammar);

    assert_eq!(whole.parse_str("2 + 3 * 4").unwrap().1, 14);
    assert_eq!(whole.parse_str("(2 + 3) * 4").unwrap().1, 20);
    assert_eq!(whole.parse_str("  10 - 4 - 3 ").unwrap().1, 3);
    assert_eq!(whole.parse_str("100 / 10 / 5").unwrap().1, 2);
    assert_eq!(whole.parse_str("((7))").unwrap().1, 7);
}

#[test]
fn test_dangling_operator_points_past_it() {
    let grammar = arithmetic();
    let error = end_of_input(&grammar).parse_str("2 + ").unwrap_err();
    assert_eq!(
        (error.position().line, error.position().column),
        (1, 5)
    );
}

#[test]
fn test_error_position_on_later_line() {
    let grammar = arithmetic();
    let error = end_of_input(&grammar).parse_str("1 +\n2 *\n(3 - )").unwrap_err();
    assert_eq!((error.position().line, error.position().column), (3, 6));
}

#[test]
fn test_without_anchor_trailing_input_is_left_over() {
    let grammar = arithmetic();
    let (rest, value) = grammar.parse_str("1 + 2 )").unwrap();
    assert_eq!(value, 3);
    assert_eq!(rest.remaining(), " )");
}

#[test]
fn test_overflowing_number_is_a_failure() {
    let grammar = arithmetic();
    let error = end_of_input(&grammar)
        .parse_str("99999999999999999999")
        .unwrap_err();
    assert!(matches!(error, ParseError::NoAlternative { .. } | ParseError::Failure { .. }));
}
