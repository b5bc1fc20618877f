use crate::options::Options;

/// Classification of one raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Section { name: &'a str },
    KeyValue { key: &'a str, value: &'a str },
    KeyOnly { key: &'a str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Zero-based position of the line in the input.
    pub number: usize,
    pub kind: LineKind<'a>,
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_substr(haystack: &str, needle: &str) -> Option<usize> {
    memchr::memmem::find(haystack.as_bytes(), needle.as_bytes())
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_substr(haystack: &str, needle: &str) -> Option<usize> {
    haystack.find(needle)
}

/// Whitespace plus the byte order mark, which editors leave at the start of
/// UTF-8 files.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trim_line(raw: &str) -> &str {
    raw.trim_matches(is_trimmable)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Name between the open and close identifiers when the whole line is a
/// section header.
fn section_name<'a>(line: &'a str, open: &str, close: &str) -> Option<&'a str> {
    if line.len() < open.len() + close.len() {
        return None;
    }
    let inner = line.strip_prefix(open)?.strip_suffix(close)?;
    if inner.contains(is_line_terminator) {
        return None;
    }
    Some(inner)
}

pub fn scan<'a>(input: &'a str, separator: &'a str, options: &'a Options) -> Vec<ParsedLine<'a>> {
    iter(input, separator, options).collect()
}

pub struct LineIter<'a> {
    rest: Option<&'a str>,
    separator: &'a str,
    number: usize,
    options: &'a Options,
}

/// Split `input` on `separator` and classify each piece.
///
/// An empty separator yields the whole input as a single line.
pub fn iter<'a>(input: &'a str, separator: &'a str, options: &'a Options) -> LineIter<'a> {
    LineIter {
        rest: Some(input),
        separator,
        number: 0,
        options,
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = ParsedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let raw = match find_separator(rest, self.separator) {
            Some(pos) => {
                self.rest = Some(&rest[pos + self.separator.len()..]);
                &rest[..pos]
            }
            None => {
                self.rest = None;
                rest
            }
        };
        let number = self.number;
        self.number += 1;
        let kind = classify(raw, self.options);
        log::trace!("line {}: {:?}", number, kind);
        Some(ParsedLine { number, kind })
    }
}

#[inline]
fn find_separator(s: &str, separator: &str) -> Option<usize> {
    if separator.is_empty() {
        return None;
    }
    find_substr(s, separator)
}

pub fn classify<'a>(raw: &'a str, options: &Options) -> LineKind<'a> {
    let line = if options.trim_lines { trim_line(raw) } else { raw };
    if line.is_empty() {
        return LineKind::Blank;
    }
    if options.is_comment(line) {
        return LineKind::Comment;
    }
    if let Some(name) = section_name(
        line,
        &options.section_open_identifier,
        &options.section_close_identifier,
    ) {
        return LineKind::Section { name };
    }
    let assign = options.assign_identifier.as_str();
    match find_substr(line, assign) {
        Some(idx) => LineKind::KeyValue {
            key: &line[..idx],
            value: &line[idx + assign.len()..],
        },
        None => LineKind::KeyOnly { key: line },
    }
}
