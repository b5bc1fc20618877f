#![no_main]
use libfuzzer_sys::fuzz_target;
use confini::detect_line_ending;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        match detect_line_ending(s) {
            Ok(ending) => assert!(matches!(ending, "\r\n" | "\n\r" | "\n" | "\r")),
            Err(_) => assert!(s.contains('\r') && s.contains('\n')),
        }
    }
});
