// properties.rs - Property tests for compile and match.

use proptest::prelude::*;

use simpex::error::CompileError;
use simpex::options::Options;
use simpex::{compile, compile_with_options};

/// Double every meta-symbol so the text matches itself literally.
fn escape(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for &b in text {
        out.push(b);
        if matches!(b, b'{' | b'}' | b'_' | b'^' | b'*') {
            out.push(b);
        }
    }
    out
}

proptest! {
    #[test]
    fn escaped_text_matches_itself(text in "[ -~]{0,40}") {
        let pat = compile(&escape(text.as_bytes())).unwrap();
        let caps = pat.captures(&text).unwrap();
        prop_assert!(caps.is_empty());
    }

    #[test]
    fn escaped_text_captures_itself(text in "[ -~]{0,40}") {
        let mut source = b"{".to_vec();
        source.extend(escape(text.as_bytes()));
        source.push(b'}');
        let pat = compile(&source).unwrap();
        let caps = pat.captures(&text).unwrap();
        prop_assert_eq!(caps.len(), 1);
        prop_assert_eq!(caps.get(0).unwrap().as_str(), text.as_str());
    }

    #[test]
    fn no_partial_matches(text in "[ -~]{1,40}", extra in "[ -~]{1,5}") {
        let pat = compile(&escape(text.as_bytes())).unwrap();
        let longer = format!("{}{}", text, extra);
        prop_assert!(!pat.is_match(&longer));
        let prefix = &text[..text.len() - 1];
        prop_assert!(!pat.is_match(prefix));
    }

    #[test]
    fn word_stops_at_non_alphanumeric(
        word in "[a-zA-Z0-9]{1,12}",
        sep in "[ .,;:!?-]",
        tail in "[ -~]{0,12}",
    ) {
        let pat = compile(b"{^}*").unwrap();
        let text = format!("{}{}{}", word, sep, tail);
        let caps = pat.captures(&text).unwrap();
        prop_assert_eq!(caps.get(0).unwrap().as_str(), word.as_str());
    }

    #[test]
    fn phrase_takes_everything(text in proptest::collection::vec(any::<u8>(), 1..64)) {
        let pat = compile(b"{*}").unwrap();
        let caps = pat.captures_bytes(&text).unwrap();
        prop_assert_eq!(caps.get(0).unwrap().as_bytes(), text.as_slice());
        prop_assert!(compile(b"*").unwrap().captures_bytes(&text).unwrap().is_empty());
    }

    #[test]
    fn phrase_stops_at_first_anchor(head in "[a-z ]{0,20}", tail in "[a-z =]{0,20}") {
        let pat = compile(b"{*}={*}").unwrap();
        let text = format!("{}={}", head, tail);
        match pat.captures(&text) {
            Some(caps) => {
                prop_assert_eq!(caps.get(0).unwrap().as_str(), head.as_str());
                prop_assert_eq!(caps.get(1).unwrap().as_str(), tail.as_str());
            }
            // The second phrase needs at least one byte.
            None => prop_assert!(tail.is_empty()),
        }
    }

    #[test]
    fn adjacent_wildcards_rejected(
        prefix in "[a-z]{0,10}",
        pair in prop::sample::select(vec!["_^", "^_", "^*", "*^", "*_", "_*"]),
    ) {
        let source = format!("{}{}", prefix, pair);
        let err = compile(source.as_bytes()).unwrap_err();
        prop_assert_eq!(err, CompileError::InvalidCombination(prefix.len() + 1));
    }

    #[test]
    fn arbitrary_input_never_panics(
        pattern in proptest::collection::vec(any::<u8>(), 0..32),
        text in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        if let Ok(pat) = compile_with_options(&pattern, Options::ALLOW_RESERVED_BYTES) {
            if let Some(caps) = pat.captures_bytes(&text) {
                prop_assert_eq!(caps.len(), pat.captures_len());
                for m in caps.iter() {
                    prop_assert!(m.end() <= text.len());
                }
            }
        }
    }
}
