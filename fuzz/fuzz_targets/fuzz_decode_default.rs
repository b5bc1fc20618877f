#![no_main]
use libfuzzer_sys::fuzz_target;
use confini::{Options, decode_from_slice};

fuzz_target!(|data: &[u8]| {
    let opts = Options::default();
    let _ = decode_from_slice(data, &opts);
});
