use crate::options::Options;
use crate::quote::push_maybe_quoted;
use crate::value::Scalar;

/// Accumulates encoded lines terminated by a fixed line ending.
pub struct LineWriter<'o> {
    out: String,
    options: &'o Options,
    line_ending: &'o str,
}

impl<'o> LineWriter<'o> {
    pub fn new(options: &'o Options, line_ending: &'o str) -> Self {
        Self {
            out: String::new(),
            options,
            line_ending,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn blank_line(&mut self) {
        self.out.push_str(self.line_ending);
    }

    pub fn line_section_header(&mut self, name: &str) {
        self.out.push_str(&self.options.section_open_identifier);
        push_maybe_quoted(&mut self.out, name, self.options.quote_attributes);
        self.out.push_str(&self.options.section_close_identifier);
        self.out.push_str(self.line_ending);
    }

    pub fn line_kv(&mut self, key: &str, value: &Scalar) {
        push_maybe_quoted(&mut self.out, key, self.options.quote_keys);
        self.out.push_str(&self.options.assign_identifier);
        let text = match value {
            Scalar::String(s) => s.as_str(),
            Scalar::Bool(true) => "true",
            Scalar::Bool(false) => "false",
        };
        push_maybe_quoted(&mut self.out, text, self.options.quote_values);
        self.out.push_str(self.line_ending);
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
