use alloc::string::{String, ToString};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::{Decoder, DecoderOptions, Key, Map, Value};

/// A generated document restricted to standard JSON: finite numbers, no
/// `undefined`. Rendering one and decoding it must agree with `serde_json`.
#[derive(Clone, Debug)]
struct StdDoc(Value);

fn finite_f64(g: &mut Gen) -> f64 {
    let mut value = f64::arbitrary(g);
    while !value.is_finite() {
        value = f64::arbitrary(g);
    }
    value
}

fn gen_std(g: &mut Gen, depth: usize) -> Value {
    let pick = usize::arbitrary(g) % if depth == 0 { 5 } else { 7 };
    match pick {
        0 => Value::Null,
        1 => Value::Boolean(bool::arbitrary(g)),
        2 => Value::Integer(i64::arbitrary(g)),
        3 => Value::Float(finite_f64(g)),
        4 => Value::String(String::arbitrary(g)),
        5 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| gen_std(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let map: Map = (0..len)
                .map(|_| (Key::from(String::arbitrary(g)), gen_std(g, depth - 1)))
                .collect();
            Value::Object(map)
        }
    }
}

impl Arbitrary for StdDoc {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 3;
        StdDoc(gen_std(g, depth))
    }
}

/// Structural agreement with the `serde_json` baseline, key order included
/// (`preserve_order` keeps the baseline's objects in document order).
fn agrees(ours: &Value, baseline: &serde_json::Value) -> bool {
    use serde_json::Value as Base;
    match (ours, baseline) {
        (Value::Null, Base::Null) => true,
        (Value::Boolean(a), Base::Bool(b)) => a == b,
        (Value::Integer(a), Base::Number(n)) => n.as_i64() == Some(*a),
        (Value::Float(a), Base::Number(n)) => n.as_f64() == Some(*a),
        (Value::String(a), Base::String(b)) => a == b,
        (Value::Array(a), Base::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| agrees(x, y))
        }
        (Value::Object(a), Base::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|((ak, av), (bk, bv))| &**ak == bk.as_str() && agrees(av, bv))
        }
        _ => false,
    }
}

#[test]
fn standard_json_agrees_with_serde_json() {
    fn prop(doc: StdDoc) -> bool {
        let src = doc.0.to_string();
        let baseline: serde_json::Value =
            serde_json::from_str(&src).expect("rendered document must be valid JSON");

        let mut decoder = Decoder::new(DecoderOptions::default());
        let (ours, end) = decoder.decode(&src).expect("decode must succeed");
        end == src.len() && agrees(&ours, &baseline)
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(StdDoc) -> bool);
}

/// Equality that treats NaN as equal to itself, for extended round-trips.
fn eq_with_nan(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => {
            (x.is_nan() && y.is_nan()) || x == y
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(u, v)| eq_with_nan(u, v))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y)
                    .all(|((xk, xv), (yk, yv))| xk == yk && eq_with_nan(xv, yv))
        }
        _ => a == b,
    }
}

/// A generated document over the full extended grammar.
#[derive(Clone, Debug)]
struct LaxDoc(Value);

fn gen_lax(g: &mut Gen, depth: usize) -> Value {
    let pick = usize::arbitrary(g) % if depth == 0 { 7 } else { 9 };
    match pick {
        0 => Value::Null,
        1 => Value::Undefined,
        2 => Value::Boolean(bool::arbitrary(g)),
        3 => Value::Integer(i64::arbitrary(g)),
        4 => Value::Float(finite_f64(g)),
        5 => Value::Float(
            *g.choose(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY])
                .unwrap(),
        ),
        6 => Value::String(String::arbitrary(g)),
        7 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| gen_lax(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let map: Map = (0..len)
                .map(|_| (Key::from(String::arbitrary(g)), gen_lax(g, depth - 1)))
                .collect();
            Value::Object(map)
        }
    }
}

impl Arbitrary for LaxDoc {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 3;
        LaxDoc(gen_lax(g, depth))
    }
}

#[test]
fn extended_documents_round_trip() {
    fn prop(doc: LaxDoc) -> bool {
        let src = doc.0.to_string();
        let mut decoder = Decoder::new(DecoderOptions::default());
        let (ours, end) = decoder.decode(&src).expect("decode must succeed");
        end == src.len() && eq_with_nan(&ours, &doc.0)
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(LaxDoc) -> bool);
}

#[test]
fn arbitrary_input_never_panics() {
    fn prop(input: String) -> bool {
        let mut decoder = Decoder::new(DecoderOptions::default());
        let _ = decoder.decode(&input);
        true
    }

    QuickCheck::new()
        .tests(2_000)
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn corpus_of_representative_payloads() {
    // The kind of row data the original decoder was written for: standard
    // JSON bodies sprinkled with the four extended literals.
    let corpus = [
        r#"{"rowset": [[1, "a", null], [2, "b", undefined]]}"#,
        r#"{"stats": {"min": -Infinity, "max": Infinity, "mean": NaN}}"#,
        r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#,
        r#"{"deep": {"deeper": {"deepest": [true, false, null, undefined]}}}"#,
    ];
    for case in corpus {
        let mut decoder = Decoder::new(DecoderOptions::default());
        let (_, end) = decoder.decode(case).expect(case);
        assert_eq!(end, case.len(), "whole payload consumed: {case}");
    }
}
