//! Double-quote wrapping and stripping for section names, keys and values.

/// Strip one surrounding pair of double quotes, if present.
pub fn unquote(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

pub fn unquote_if(s: &str, enabled: bool) -> &str {
    if enabled { unquote(s) } else { s }
}

/// Append `value` to `out`, wrapped in double quotes when `quoted` is set.
/// Existing quotes are not inspected.
pub fn push_maybe_quoted(out: &mut String, value: &str, quoted: bool) {
    if quoted {
        out.reserve(value.len() + 2);
        out.push('"');
        out.push_str(value);
        out.push('"');
    } else {
        out.push_str(value);
    }
}
