use crate::decode::scanner::{self, LineKind};
use crate::options::Options;
use crate::quote::unquote_if;
use crate::value::{Document, Scalar};
use crate::Result;

/// Builds a [`Document`] from classified lines.
pub struct Parser<'o> {
    options: &'o Options,
    doc: Document,
    current: Option<String>,
}

impl<'o> Parser<'o> {
    pub fn new(options: &'o Options) -> Self {
        Self {
            options,
            doc: Document::new(),
            current: None,
        }
    }

    /// Name of the section receiving key/value lines, if any.
    pub fn current_section(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn feed(&mut self, kind: LineKind<'_>) {
        let opts = self.options;
        match kind {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Section { name } => {
                let name = unquote_if(name, opts.unquote_attributes);
                self.doc.open_section(name);
                self.current = Some(name.to_string());
            }
            LineKind::KeyValue { key, value } => {
                let key = unquote_if(key, opts.unquote_keys);
                let value = unquote_if(value, opts.unquote_values);
                self.assign(key, Scalar::from(value));
            }
            LineKind::KeyOnly { key } => {
                let key = unquote_if(key, opts.unquote_keys);
                self.assign(key, opts.default_value.clone());
            }
        }
    }

    fn assign(&mut self, key: &str, value: Scalar) {
        match &self.current {
            None => {
                self.doc.insert(key, value);
            }
            Some(section) => {
                self.doc.insert_into(section, key, value);
            }
        }
    }

    pub fn finish(self) -> Document {
        log::debug!(
            "decoded {} top-level entries ({} sections)",
            self.doc.len(),
            self.doc.sections().count()
        );
        self.doc
    }
}

/// Decode `input` with already-resolved options.
pub fn parse(input: &str, options: &Options) -> Result<Document> {
    let separator = options.effective_line_ending(input)?;
    let mut parser = Parser::new(options);
    for line in scanner::iter(input, separator, options) {
        parser.feed(line.kind);
    }
    Ok(parser.finish())
}
