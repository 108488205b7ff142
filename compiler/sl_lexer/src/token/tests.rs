use super::*;

// === TokenKind discriminants ===

#[test]
fn repr_u8_matches_printed_type_numbers() {
    assert_eq!(TokenKind::Eof as u8, 0);
    assert_eq!(TokenKind::Unknown as u8, 1);
    assert_eq!(TokenKind::Ident as u8, 2);
    assert_eq!(TokenKind::Number as u8, 3);
    assert_eq!(TokenKind::Comma as u8, 4);
    assert_eq!(TokenKind::Colon as u8, 5);
    assert_eq!(TokenKind::Plus as u8, 6);
    assert_eq!(TokenKind::Minus as u8, 7);
    assert_eq!(TokenKind::Star as u8, 8);
    assert_eq!(TokenKind::Slash as u8, 9);
    assert_eq!(TokenKind::LeftParen as u8, 10);
    assert_eq!(TokenKind::RightParen as u8, 11);
    assert_eq!(TokenKind::KwWith as u8, 12);
}

#[test]
fn all_is_in_discriminant_order() {
    for (i, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(*kind as usize, i, "{kind:?} out of order");
    }
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

// === Punctuation / lexeme ===

#[test]
fn from_punct_maps_every_mark() {
    let cases = [
        (b'+', TokenKind::Plus),
        (b'-', TokenKind::Minus),
        (b'*', TokenKind::Star),
        (b'/', TokenKind::Slash),
        (b'(', TokenKind::LeftParen),
        (b')', TokenKind::RightParen),
        (b':', TokenKind::Colon),
        (b',', TokenKind::Comma),
    ];
    for (byte, kind) in cases {
        assert_eq!(TokenKind::from_punct(byte), Some(kind));
    }
}

#[test]
fn from_punct_rejects_other_bytes() {
    for byte in [b'.', b';', b'=', b'a', b'0', b' ', 0, b'[', b'%'] {
        assert_eq!(TokenKind::from_punct(byte), None, "byte {byte:#04x}");
    }
}

#[test]
fn punct_lexeme_round_trips_through_from_punct() {
    for kind in TokenKind::ALL.into_iter().filter(|k| k.is_punct()) {
        let lexeme = kind.lexeme().unwrap_or_default();
        assert_eq!(lexeme.len(), 1, "{kind:?}");
        assert_eq!(TokenKind::from_punct(lexeme.as_bytes()[0]), Some(kind));
    }
}

#[test]
fn variable_lexeme_returns_none() {
    assert_eq!(TokenKind::Eof.lexeme(), None);
    assert_eq!(TokenKind::Unknown.lexeme(), None);
    assert_eq!(TokenKind::Ident.lexeme(), None);
    assert_eq!(TokenKind::Number.lexeme(), None);
}

#[test]
fn keyword_lexeme() {
    assert_eq!(TokenKind::KwWith.lexeme(), Some("with"));
    assert!(TokenKind::KwWith.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
}

#[test]
fn display_uses_name() {
    assert_eq!(TokenKind::LeftParen.to_string(), "l_paren");
    assert_eq!(TokenKind::KwWith.to_string(), "kw_with");
    assert_eq!(TokenKind::Eof.to_string(), "eof");
}

// === Keyword lookup ===

#[test]
fn keyword_exact_match_only() {
    assert_eq!(keyword("with"), Some(TokenKind::KwWith));
    assert_eq!(keyword("With"), None);
    assert_eq!(keyword("WITH"), None);
    assert_eq!(keyword("wit"), None);
    assert_eq!(keyword("withx"), None);
    assert_eq!(keyword(""), None);
}

// === Token accessors ===

#[test]
fn accessors_return_constructor_values() {
    let tok = Token::new(TokenKind::Ident, "abc", 7);
    assert_eq!(tok.kind(), TokenKind::Ident);
    assert_eq!(tok.text(), "abc");
    assert_eq!(tok.offset(), 7);
    assert_eq!(tok.len(), 3);
    assert_eq!(tok.span(), 7..10);
    assert!(!tok.is_empty());
}

#[test]
fn eof_token_is_empty() {
    let tok = Token::new(TokenKind::Eof, "", 4);
    assert!(tok.is_eof());
    assert!(tok.is_empty());
    assert_eq!(tok.span(), 4..4);
}

#[test]
fn is_compares_kind() {
    let tok = Token::new(TokenKind::Plus, "+", 0);
    assert!(tok.is(TokenKind::Plus));
    assert!(!tok.is(TokenKind::Minus));
}

// === is_one_of ===

#[test]
fn is_one_of_two_candidates() {
    let tok = Token::new(TokenKind::Minus, "-", 0);
    assert!(tok.is_one_of(&[TokenKind::Plus, TokenKind::Minus]));
    assert!(!tok.is_one_of(&[TokenKind::Star, TokenKind::Slash]));
}

#[test]
fn is_one_of_matches_last_candidate() {
    let tok = Token::new(TokenKind::KwWith, "with", 0);
    assert!(tok.is_one_of(&[
        TokenKind::Ident,
        TokenKind::Number,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::KwWith,
    ]));
}

#[test]
fn is_one_of_with_repeated_candidates() {
    let tok = Token::new(TokenKind::Star, "*", 0);
    assert!(tok.is_one_of(&[TokenKind::Star, TokenKind::Star]));
    assert!(!tok.is_one_of(&[TokenKind::Plus, TokenKind::Plus, TokenKind::Plus]));
}

#[test]
fn is_one_of_empty_is_false() {
    let tok = Token::new(TokenKind::Number, "1", 0);
    assert!(!tok.is_one_of(&[]));
}

#[test]
fn is_one_of_agrees_with_any_is() {
    let tok = Token::new(TokenKind::Colon, ":", 0);
    for a in TokenKind::ALL {
        for b in TokenKind::ALL {
            for c in TokenKind::ALL {
                let expected = tok.is(a) || tok.is(b) || tok.is(c);
                assert_eq!(tok.is_one_of(&[a, b, c]), expected, "{a:?} {b:?} {c:?}");
            }
        }
    }
}

// === Display ===

#[test]
fn token_display() {
    assert_eq!(Token::new(TokenKind::Ident, "ab", 0).to_string(), "ident(\"ab\")");
    assert_eq!(Token::new(TokenKind::Eof, "", 2).to_string(), "eof");
}
