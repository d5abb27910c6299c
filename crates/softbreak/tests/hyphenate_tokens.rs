//! End-to-end token-processing scenarios.
//!
//! Each scenario drives the public surface the way a text pipeline would:
//! select a language, tune limits, register exceptions, then push a token
//! sequence through `hyphenate` and compare the reassembled text.

#![forbid(unsafe_code)]

use softbreak::{Hyphenator, Token, TokenKind};

/// Split a sentence into alternating word/other tokens. Words are maximal
/// runs of alphabetic characters plus interior hard hyphens.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;

    for ch in text.chars() {
        let word_char = ch.is_alphabetic() || ch == '-';
        if word_char != in_word && !current.is_empty() {
            tokens.push(if in_word {
                Token::word(std::mem::take(&mut current))
            } else {
                Token::other(std::mem::take(&mut current))
            });
        }
        in_word = word_char;
        current.push(ch);
    }
    if !current.is_empty() {
        tokens.push(if in_word {
            Token::word(current)
        } else {
            Token::other(current)
        });
    }
    tokens
}

fn reassemble(tokens: &[Token]) -> String {
    tokens.iter().map(Token::value).collect()
}

fn engine(code: &str) -> Hyphenator {
    let h = Hyphenator::new();
    h.select_language(code).unwrap();
    h.set_min_length(2).unwrap();
    h.set_min_before(2).unwrap();
    h.set_min_after(2).unwrap();
    h
}

#[test]
fn english_sentence_with_custom_exception() {
    let h = engine("en-US");
    h.add_custom_exceptions(["KING-desk"]);

    let input = "A few words to hyphenate, like KINGdesk. \
                 Really, there should be more hyphenation here!";
    let out = h.hyphenate(&tokenize(input), "|", true);

    assert_eq!(
        reassemble(&out),
        "A few words to hy|phen|ate, like KING|desk. \
         Re|ally, there should be more hy|phen|ation here!"
    );
}

#[test]
fn english_sentence_without_custom_exception() {
    let h = engine("en-US");

    let input = "A few words to hyphenate, like KINGdesk. \
                 Really, there should be more hyphenation here!";
    let out = h.hyphenate(&tokenize(input), "|", true);

    assert_eq!(
        reassemble(&out),
        "A few words to hy|phen|ate, like KINGdesk. \
         Re|ally, there should be more hy|phen|ation here!"
    );
}

#[test]
fn german_compound() {
    let h = engine("de");
    let out = h.hyphenate(&tokenize("Sauerstofffeldflasche"), "|", true);
    assert_eq!(reassemble(&out), "Sau|er|stoff|feld|fla|sche");
}

#[test]
fn german_compound_with_hard_hyphen() {
    let h = engine("de");
    let out = h.hyphenate(&tokenize("Sauerstoff-Feldflasche"), "|", true);
    assert_eq!(reassemble(&out), "Sau|er|stoff-Feld|fla|sche");
}

#[test]
fn norwegian_patterns_and_exceptions() {
    let h = engine("no");
    let out = h.hyphenate(&tokenize("parkering atten"), "|", true);
    assert_eq!(reassemble(&out), "parker|ing at|ten");
}

#[test]
fn undecodable_word_is_untouched_everywhere() {
    for code in ["en-US", "de", "no"] {
        let h = engine(code);
        let tokens = [Token::word("\u{FFFD}nderungsmeldung")];
        let out = h.hyphenate(&tokens, "|", true);
        assert_eq!(out[0].value(), "\u{FFFD}nderungsmeldung", "lang {code}");
    }
}

#[test]
fn title_case_suppression_end_to_end() {
    let h = engine("de");
    let tokens = tokenize("Änderungsmeldung");
    let suppressed = h.hyphenate(&tokens, "|", false);
    assert_eq!(reassemble(&suppressed), "Änderungsmeldung");
    let allowed = h.hyphenate(&tokens, "|", true);
    assert_ne!(reassemble(&allowed), "Änderungsmeldung");
}

#[test]
fn unknown_language_is_fail_safe_not_fallback() {
    let h = engine("de");
    assert!(h.select_language("not-a-real-code").is_err());
    let out = h.hyphenate(&tokenize("Sauerstofffeldflasche"), "|", true);
    assert_eq!(reassemble(&out), "Sauerstofffeldflasche");

    // recovery: a valid selection restores hyphenation
    h.select_language("de").unwrap();
    let out = h.hyphenate(&tokenize("Sauerstofffeldflasche"), "|", true);
    assert_eq!(reassemble(&out), "Sau|er|stoff|feld|fla|sche");
}

#[test]
fn tokenizer_classifies_kinds() {
    let tokens = tokenize("a b, c");
    let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Word,
            TokenKind::Other,
            TokenKind::Word,
            TokenKind::Other,
            TokenKind::Word
        ]
    );
}
