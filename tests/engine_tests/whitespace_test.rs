use pcomb::prelude::*;

#[test]
fn test_token_skips_leading_whitespace() {
    let (rest, matched) = token(literal("x")).parse_str("   x").unwrap();
    assert_eq!(matched, "x");
    assert!(rest.is_at_end());
}

#[test]
fn test_lexeme_skips_trailing_whitespace() {
    let (rest, matched) = lexeme(literal("x")).parse_str("x   y").unwrap();
    assert_eq!(matched, "x");
    assert_eq!(rest.remaining(), "y");
}

#[test]
fn test_token_and_lexeme_compose_in_either_order() {
    let inside_out = token(lexeme(literal("x")));
    let outside_in = lexeme(token(literal("x")));
    for parser in [&inside_out as &dyn Parser<Output = Span>, &outside_in] {
        let (rest, matched) = parser.parse(&InputStream::new(" \t x \n y")).unwrap();
        assert_eq!(matched, "x");
        assert_eq!(rest.remaining(), "y");
        assert_eq!((rest.line(), rest.column()), (2, 2));
    }
}

#[test]
fn test_configured_whitespace() {
    let config: LexConfig = serde_json::from_str(r#"{ "whitespace": " #" }"#).unwrap();
    let parser = token_with(lexeme_with(literal("x"), config.whitespace_set()), config.whitespace_set());

    let (rest, _) = parser.parse_str("# #x## y").unwrap();
    assert_eq!(rest.remaining(), "y");

    // 既定の空白文字でも設定になければ読み飛ばさない
    assert!(parser.parse_str("\tx").is_err());
}

#[test]
fn test_end_of_line_reads_line_by_line() {
    let line = end_of_line(many1(lexeme_with(regex("[a-z]+").unwrap(), WhitespaceSet::inline())));
    let input = InputStream::new("a b\nc\n\nd e f");

    let (rest, words) = line.parse(&input).unwrap();
    assert_eq!(words.len(), 2);
    let (rest, words) = line.parse(&rest).unwrap();
    assert_eq!(words.len(), 1);
    // 空行は一致しない
    assert!(line.parse(&rest).is_err());
    let (rest, words) = line.parse(&rest.advance(1)).unwrap();
    assert_eq!(words.len(), 3);
    assert!(rest.is_at_end());
}
