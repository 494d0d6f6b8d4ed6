use pcomb::prelude::*;
use pretty_assertions::assert_eq;

fn outcome<P>(parser: &P, text: &str) -> Option<(usize, Vec<String>)>
where
    P: Parser<Output = Vec<String>>,
{
    parser
        .parse_str(text)
        .ok()
        .map(|(rest, values)| (rest.offset(), values))
}

#[test]
fn test_sequence_is_associative() {
    let nested = rule(
        seq((seq((literal("a"), range('0', '9'))), literal("b"))),
        |((a, digit), b): ((Span, char), Span)| vec![a.into(), digit.to_string(), b.into()],
    );
    let flat = rule(
        seq((literal("a"), range('0', '9'), literal("b"))),
        |(a, digit, b): (Span, char, Span)| vec![a.into(), digit.to_string(), b.into()],
    );

    for text in ["a1b", "a1bc", "a1", "ab", "a12b", "", "b1a"] {
        assert_eq!(outcome(&nested, text), outcome(&flat, text), "input {:?}", text);
    }
    assert_eq!(
        outcome(&flat, "a5b!"),
        Some((3, vec!["a".to_string(), "5".to_string(), "b".to_string()]))
    );
}

#[test]
fn test_sequence_failure_restores_nothing() {
    let input = InputStream::new("a1x");
    let parser = seq((literal("a"), range('0', '9'), literal("b")));
    let error = parser.parse(&input).unwrap_err();
    assert_eq!(error.position().column, 3);
    // 入力ストリーム自体は変わらない
    assert_eq!(input.offset(), 0);
}

#[test]
fn test_separated_list_of_tokens() {
    let item = lexeme(regex("[a-z]+").unwrap());
    let list = delimited(
        lexeme(ch('[')),
        separated_list(item, lexeme(ch(','))),
        ch(']'),
    );

    let (_, items) = list.parse_str("[ one , two,three ]").unwrap();
    let items: Vec<&str> = items.iter().map(|span| span.as_str()).collect();
    assert_eq!(items, vec!["one", "two", "three"]);

    let (_, items) = list.parse_str("[]").unwrap();
    assert!(items.is_empty());

    assert!(list.parse_str("[one,]").is_err());
}

#[test]
fn test_error_names_the_text_at_its_position() {
    let digit = range('0', '9');
    let sum = delimited(
        ch('('),
        seq((digit.clone(), many(seq((ch('+'), digit))))),
        ch(')'),
    );

    let text = "(1+)";
    let error = sum.parse_str(text).unwrap_err();
    assert_eq!(
        error,
        ParseError::Unexpected {
            expected: "'0'..='9'".to_string(),
            found: ")".to_string(),
            position: InputStream::new(text).advance(3).position(),
        }
    );
    // 報告した列の文字と found が一致する
    let column = error.position().column;
    assert_eq!(text.chars().nth(column - 1), Some(')'));
    assert_eq!(
        error.to_string(),
        "Unexpected \")\": expected '0'..='9' at line 1, column 4"
    );
}
