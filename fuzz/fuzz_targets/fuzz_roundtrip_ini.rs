#![no_main]
use libfuzzer_sys::fuzz_target;
use confini::{Options, decode, encode};

fuzz_target!(|data: &[u8]| {
    if let Ok(ini_input) = std::str::from_utf8(data) {
        let opts = Options {
            detect_line_ending: true,
            ..Default::default()
        };

        let Ok(doc) = decode(ini_input, &opts) else {
            return;
        };
        let encoded = encode(&doc, &opts).expect("encode after decode");
        let first_decode = match decode(&encoded, &opts) {
            Ok(doc) => doc,
            Err(e) => panic!(
                "Failed to decode re-encoded INI!\nInput: {:?}\nRe-encoded: {:?}\nError: {}",
                ini_input, encoded, e
            ),
        };
        let reencoded = encode(&first_decode, &opts).expect("second encode");
        let second_decode = decode(&reencoded, &opts).expect("decode of second encode");
        if encoded != reencoded || first_decode != second_decode {
            panic!(
                "INI roundtrip mismatch!\nInput: {:?}\nFirst encode: {:?}\nSecond encode: {:?}\nFirst decode: {:?}\nSecond decode: {:?}",
                ini_input, encoded, reencoded, first_decode, second_decode
            );
        }
    }
});
