#![no_main]
use jsonlax::{Decoder, DecoderOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut decoder = Decoder::new(DecoderOptions::default());

    // Two decodes on one decoder must behave identically: the key memo is
    // cleared on every exit path and nothing else is stateful.
    let first = decoder.decode(text);
    let second = decoder.decode(text);
    match (first, second) {
        (Ok((a, end_a)), Ok((b, end_b))) => {
            assert!(end_a <= text.len(), "stop offset inside the document");
            assert_eq!(end_a, end_b);
            // NaN-bearing trees are not PartialEq-equal; compare renderings.
            assert_eq!(a.to_string(), b.to_string());
        }
        (Err(a), Err(b)) => assert_eq!(a, b),
        (first, second) => panic!("decode not deterministic: {first:?} vs {second:?}"),
    }

    // Anything serde_json accepts outright is standard JSON, which this
    // grammar is a superset of: decoding must succeed and consume everything
    // but trailing whitespace.
    if serde_json::from_str::<serde_json::Value>(text).is_ok() {
        let (_, end) = decoder.decode(text).expect("superset must accept");
        assert!(
            text[end..]
                .bytes()
                .all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
        );
    }
});
