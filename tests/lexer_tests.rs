// tests/lexer_tests.rs

use aqlir::ast::{Keyword, Token};
use aqlir::lexer::{Lexer, tokenize};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Punctuation and Operators
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("(", Token::LParen),
        (")", Token::RParen),
        (",", Token::Comma),
        (".", Token::Dot),
        ("=", Token::Assign),
        ("<", Token::Lt),
        (">", Token::Gt),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("==", Token::EqEq),
        ("!=", Token::NotEq),
        ("<=", Token::LtEq),
        (">=", Token::GtEq),
        ("&&", Token::AmpAmp),
        ("||", Token::PipePipe),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_unknown_characters_become_symbols() {
    let mut lexer = Lexer::new("[0] { } * !");
    assert_eq!(lexer.next_token(), Token::Symbol('['));
    assert_eq!(lexer.next_token(), Token::Number(dec("0")));
    assert_eq!(lexer.next_token(), Token::Symbol(']'));
    assert_eq!(lexer.next_token(), Token::Symbol('{'));
    assert_eq!(lexer.next_token(), Token::Symbol('}'));
    assert_eq!(lexer.next_token(), Token::Symbol('*'));
    assert_eq!(lexer.next_token(), Token::Symbol('!'));
    assert_eq!(lexer.next_token(), Token::Eof);
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_keywords_any_case() {
    let test_cases = vec![
        ("FOR", Keyword::For),
        ("filter", Keyword::Filter),
        ("Sort", Keyword::Sort),
        ("LiMiT", Keyword::Limit),
        ("let", Keyword::Let),
        ("RETURN", Keyword::Return),
        ("collect", Keyword::Collect),
        ("in", Keyword::In),
        ("AND", Keyword::And),
        ("or", Keyword::Or),
        ("like", Keyword::Like),
        ("ASC", Keyword::Asc),
        ("desc", Keyword::Desc),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token(),
            Token::Keyword(expected),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_literal_keywords() {
    let mut lexer = Lexer::new("true FALSE Null");
    assert_eq!(lexer.next_token(), Token::Boolean(true));
    assert_eq!(lexer.next_token(), Token::Boolean(false));
    assert_eq!(lexer.next_token(), Token::Null);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_keywords_vs_identifiers() {
    // Keywords only match as whole words
    let test_cases = vec![
        "format", "filtered", "sorted", "limits", "letter", "index", "android", "order", "truth",
        "nullable", "description",
    ];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        match lexer.next_token() {
            Token::Identifier(ident) => assert_eq!(ident, input),
            other => panic!("Expected Identifier, got {:?} for input: {}", other, input),
        }
    }
}

#[test]
fn test_word_after_dot_is_never_keyword() {
    let mut lexer = Lexer::new("doc.limit doc . sort x.null");
    assert_eq!(lexer.next_token(), Token::Identifier("doc".into()));
    assert_eq!(lexer.next_token(), Token::Dot);
    assert_eq!(lexer.next_token(), Token::Identifier("limit".into()));
    assert_eq!(lexer.next_token(), Token::Identifier("doc".into()));
    assert_eq!(lexer.next_token(), Token::Dot);
    assert_eq!(lexer.next_token(), Token::Identifier("sort".into()));
    assert_eq!(lexer.next_token(), Token::Identifier("x".into()));
    assert_eq!(lexer.next_token(), Token::Dot);
    assert_eq!(lexer.next_token(), Token::Identifier("null".into()));
}

// ============================================================================
// Identifiers and Parameters
// ============================================================================

#[test]
fn test_identifiers() {
    let test_cases = vec!["u", "users", "_key", "_from", "updatedAt", "DATE_NOW", "a1b2"];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        match lexer.next_token() {
            Token::Identifier(ident) => assert_eq!(ident, input),
            other => panic!("Expected Identifier, got {:?} for input: {}", other, input),
        }
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_bind_parameters_keep_sigil() {
    let mut lexer = Lexer::new("@userId @@collection @0");
    assert_eq!(lexer.next_token(), Token::Param("@userId".into()));
    assert_eq!(lexer.next_token(), Token::Param("@@collection".into()));
    assert_eq!(lexer.next_token(), Token::Param("@0".into()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_lone_at_sign_is_symbol() {
    let mut lexer = Lexer::new("@ x");
    assert_eq!(lexer.next_token(), Token::Symbol('@'));
    assert_eq!(lexer.next_token(), Token::Identifier("x".into()));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    let test_cases = vec![
        ("0", "0"),
        ("10", "10"),
        ("-1", "-1"),
        ("3.14", "3.14"),
        ("-0.5", "-0.5"),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token(),
            Token::Number(dec(expected)),
            "Failed for input: {}",
            input
        );
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_trailing_dot_is_not_fraction() {
    let mut lexer = Lexer::new("1..10");
    assert_eq!(lexer.next_token(), Token::Number(dec("1")));
    assert_eq!(lexer.next_token(), Token::Dot);
    assert_eq!(lexer.next_token(), Token::Dot);
    assert_eq!(lexer.next_token(), Token::Number(dec("10")));
}

#[test]
fn test_number_beyond_decimal_range_is_float() {
    let mut lexer = Lexer::new("123456789012345678901234567890123 -99999999999999999999999999999999");
    assert_eq!(
        lexer.next_token(),
        Token::Float(123456789012345678901234567890123.0)
    );
    assert_eq!(
        lexer.next_token(),
        Token::Float(-99999999999999999999999999999999.0)
    );
}

#[test]
fn test_words_starting_with_digits() {
    let test_cases = vec!["2024_logs", "1st", "3d"];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token(),
            Token::Identifier(input.to_string()),
            "Failed for input: {}",
            input
        );
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_strings_both_quotes() {
    let mut lexer = Lexer::new(r#"'monthly' "day" ''"#);
    assert_eq!(lexer.next_token(), Token::String("monthly".into()));
    assert_eq!(lexer.next_token(), Token::String("day".into()));
    assert_eq!(lexer.next_token(), Token::String(String::new()));
}

#[test]
fn test_keywords_inside_strings_stay_strings() {
    let mut lexer = Lexer::new("'FILTER x SORT y'");
    assert_eq!(
        lexer.next_token(),
        Token::String("FILTER x SORT y".into())
    );
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_string_escapes() {
    let mut lexer = Lexer::new(r#"'it\'s' "a\"b" 'tab\there' 'back\\slash'"#);
    assert_eq!(lexer.next_token(), Token::String("it's".into()));
    assert_eq!(lexer.next_token(), Token::String("a\"b".into()));
    assert_eq!(lexer.next_token(), Token::String("tab\there".into()));
    assert_eq!(lexer.next_token(), Token::String("back\\slash".into()));
}

#[test]
fn test_unterminated_string() {
    let tokens = tokenize("x == 'open LIMIT 1");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].token, Token::OpenString("open LIMIT 1".into()));
    assert_eq!(tokens[2].span.start, 5);
}

// ============================================================================
// Whole inputs
// ============================================================================

#[test]
fn test_tokenize_excludes_eof() {
    let tokens = tokenize("FOR u IN users");
    let kinds: Vec<Token> = tokens.into_iter().map(|s| s.token).collect();
    assert_eq!(
        kinds,
        vec![
            Token::Keyword(Keyword::For),
            Token::Identifier("u".into()),
            Token::Keyword(Keyword::In),
            Token::Identifier("users".into()),
        ]
    );
}

#[test]
fn test_whitespace_only() {
    assert!(tokenize(" \n\t  ").is_empty());
}

#[test]
fn test_function_call_tokens() {
    let tokens = tokenize("DATE_SUBTRACT(DATE_NOW(), 1, \"day\")");
    let kinds: Vec<Token> = tokens.into_iter().map(|s| s.token).collect();
    assert_eq!(
        kinds,
        vec![
            Token::Identifier("DATE_SUBTRACT".into()),
            Token::LParen,
            Token::Identifier("DATE_NOW".into()),
            Token::LParen,
            Token::RParen,
            Token::Comma,
            Token::Number(dec("1")),
            Token::Comma,
            Token::String("day".into()),
            Token::RParen,
        ]
    );
}
