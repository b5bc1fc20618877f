#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use confini::{Document, Options, Scalar, decode, encode};

#[derive(Arbitrary, Debug)]
enum FuzzScalar {
    Text(String),
    Flag(bool),
}

#[derive(Arbitrary, Debug)]
struct FuzzSection {
    name: String,
    keys: Vec<(String, FuzzScalar)>,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    strays: Vec<(String, FuzzScalar)>,
    sections: Vec<FuzzSection>,
}

fn to_scalar(s: FuzzScalar) -> Scalar {
    match s {
        FuzzScalar::Text(t) => Scalar::String(t),
        FuzzScalar::Flag(b) => Scalar::Bool(b),
    }
}

// Arbitrary documents are not always representable as text; the cycle that
// starts from decode(encode(doc)) has to be stable.
fuzz_target!(|input: FuzzInput| {
    let opts = Options {
        line_ending: "\n".into(),
        ..Default::default()
    };
    let mut doc = Document::new();
    for (k, v) in input.strays {
        doc.insert(k, to_scalar(v));
    }
    for section in input.sections {
        doc.open_section(&section.name);
        for (k, v) in section.keys {
            doc.insert_into(&section.name, k, to_scalar(v));
        }
    }

    let Ok(text) = encode(&doc, &opts) else { return };
    let Ok(d1) = decode(&text, &opts) else { return };
    let Ok(e1) = encode(&d1, &opts) else { return };
    let Ok(d2) = decode(&e1, &opts) else { return };
    let Ok(e2) = encode(&d2, &opts) else { return };
    assert_eq!(e1, e2, "unstable encoding for {:?}", doc);
    assert_eq!(d1, d2);
});
