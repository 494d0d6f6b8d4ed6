use pcomb::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn literal_matches_exactly_its_prefix(pattern in "[ab]{0,4}", text in "[ab]{0,6}") {
        let result = literal(pattern.as_str()).parse_str(&text);
        prop_assert_eq!(result.is_ok(), text.starts_with(&pattern));
        if let Ok((rest, matched)) = result {
            prop_assert_eq!(matched.as_str(), pattern.as_str());
            prop_assert_eq!(rest.remaining(), &text[pattern.len()..]);
        }
    }

    #[test]
    fn failed_literal_reports_start_position(text in "[xyz]{0,6}") {
        let error = literal("a").parse_str(&text).unwrap_err();
        prop_assert_eq!(error.position(), Position::START);
    }
}

#[test]
fn test_alternative_is_order_sensitive() {
    let short_first = alt((literal("a"), literal("ab")));
    let (rest, matched) = short_first.parse_str("ab").unwrap();
    assert_eq!(matched, "a");
    assert_eq!(rest.remaining(), "b");

    let long_first = alt((literal("ab"), literal("a")));
    let (rest, matched) = long_first.parse_str("ab").unwrap();
    assert_eq!(matched, "ab");
    assert!(rest.is_at_end());
}

#[test]
fn test_alternative_of_mixed_attributes() {
    // char と String は String にまとまる
    let word = alt((ch('_'), regex("[a-z]+").unwrap().map(String::from), range('0', '9')));
    let values: Vec<String> = ["_", "abc", "7"]
        .iter()
        .map(|text| word.parse_str(text).unwrap().1)
        .collect();
    assert_eq!(values, vec!["_", "abc", "7"]);
}

#[test]
fn test_choice_of_boxed_keywords() {
    let keywords = ["let", "fn", "if"];
    let keyword = choice(keywords.iter().map(|k| literal(*k).boxed()).collect());

    assert_eq!(keyword.parse_str("fn main").unwrap().1, "fn");
    assert!(matches!(
        keyword.parse_str("while"),
        Err(ParseError::NoAlternative { .. })
    ));
}
