//! Property-based tests for path tokenization.

use super::token::SegmentKind;
use super::tokenizer::tokenize;
use proptest::prelude::*;

// Strategy for plain dotted segments: no '.', '[' or ']'
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_/-]{1,16}"
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Joining plain segments with dots and tokenizing reproduces them.
    #[test]
    fn tokenize_inverts_dot_join(segments in segments_strategy()) {
        let path = segments.join(".");
        let tokens = tokenize(&path).unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text().to_string()).collect();
        prop_assert_eq!(texts, segments);
    }

    // Bracketed literals survive verbatim, dots and all.
    #[test]
    fn bracketed_literals_are_verbatim(head in segment_strategy(), literal in "[a-z0-9._/\\\\-]{1,16}") {
        let path = format!("{head}[{literal}]");
        let tokens = tokenize(&path).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[1].text(), literal.as_str());
        prop_assert_eq!(tokens[1].kind(), SegmentKind::Bracketed);
    }

    // Tokenization never fails on bracket-free input.
    #[test]
    fn bracket_free_input_never_fails(path in "[a-zA-Z0-9._/-]{0,48}") {
        prop_assert!(tokenize(&path).is_ok());
    }

    // Tokenization fails exactly when a '[' is left unmatched.
    #[test]
    fn unmatched_open_bracket_fails(head in segment_strategy(), tail in "[a-z0-9.]{0,16}") {
        let path = format!("{head}[{tail}");
        prop_assert!(tokenize(&path).is_err());
    }

    // Token order matches left-to-right appearance in the input.
    #[test]
    fn token_order_is_stable(segments in segments_strategy()) {
        let path = segments.join(".");
        let tokens = tokenize(&path).unwrap();
        for (token, segment) in tokens.iter().zip(&segments) {
            prop_assert_eq!(token.text(), segment.as_str());
        }
    }
}
