use pcomb::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn many_collects_every_leading_match(count in 0usize..20, tail in "[b-d]{0,5}") {
        let text = format!("{}{}", "a".repeat(count), tail);
        let (rest, items) = many(ch('a')).parse_str(&text).unwrap();
        prop_assert_eq!(items.len(), count);
        prop_assert_eq!(rest.remaining(), tail.as_str());
    }

    #[test]
    fn many_never_fails_without_a_match(text in "[b-d]{0,8}") {
        let input = InputStream::new(text.as_str());
        let (rest, items) = many(ch('a')).parse(&input).unwrap();
        prop_assert!(items.is_empty());
        prop_assert_eq!(rest, input);
    }

    #[test]
    fn many1_fails_only_on_zero_matches(count in 0usize..5) {
        let text = "x".repeat(count);
        prop_assert_eq!(many1(ch('x')).parse_str(&text).is_ok(), count > 0);
    }
}

#[test]
fn test_optional_sign() {
    let signed = rule(seq((optional(ch('-')), many1(range('0', '9')))), |(sign, digits)| {
        let magnitude: i64 = digits.into_iter().collect::<String>().parse().unwrap_or(0);
        if sign.is_some() {
            -magnitude
        } else {
            magnitude
        }
    });
    assert_eq!(signed.parse_str("-42").unwrap().1, -42);
    assert_eq!(signed.parse_str("17").unwrap().1, 17);
    assert!(signed.parse_str("-").is_err());
}
