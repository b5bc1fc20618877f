use crate::{Error, Result};

pub const CRLF: &str = "\r\n";
pub const LFCR: &str = "\n\r";
pub const LF: &str = "\n";
pub const CR: &str = "\r";

/// Guess the line ending used by `data` (windows, unix, classic mac).
///
/// CR+LF wins over LF+CR when both characters are present. Text with no line
/// break at all yields LF. Fails when both characters occur but are never
/// adjacent.
pub fn detect_line_ending(data: &str) -> Result<&'static str> {
    let has_cr = data.contains('\r');
    let has_lf = data.contains('\n');
    let ending = match (has_cr, has_lf) {
        (true, true) => {
            if data.contains(CRLF) {
                CRLF
            } else if data.contains(LFCR) {
                LFCR
            } else {
                return Err(Error::AmbiguousLineEnding);
            }
        }
        (false, true) => LF,
        (true, false) => CR,
        (false, false) => LF,
    };
    log::debug!("detected line ending {:?}", ending);
    Ok(ending)
}
