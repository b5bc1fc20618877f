//! Stateful convenience wrapper around [`decode`](crate::decode()) and
//! [`encode`](crate::encode()).

use crate::options::{Options, OptionsPatch};
use crate::value::Document;
use crate::Result;

/// Holds default options and a default raw text.
#[derive(Debug, Clone, Default)]
pub struct Config {
    options: Options,
    raw: String,
}

impl Config {
    pub fn new(raw: impl Into<String>, options: Options) -> Self {
        Self {
            options,
            raw: raw.into(),
        }
    }

    /// No raw text; options only.
    pub fn with_options(options: Options) -> Self {
        Self::new(String::new(), options)
    }

    pub fn from_patch(raw: impl Into<String>, patch: &OptionsPatch) -> Self {
        Self::new(raw, Options::from_patch(patch))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    /// Decode `data`, or the held raw text when `None`.
    pub fn decode(&self, data: Option<&str>, options: Option<&Options>) -> Result<Document> {
        crate::decode(
            data.unwrap_or(&self.raw),
            options.unwrap_or(&self.options),
        )
    }

    /// Encode `doc`, or the decoded held raw text when `None`.
    pub fn encode(&self, doc: Option<&Document>, options: Option<&Options>) -> Result<String> {
        let options = options.unwrap_or(&self.options);
        match doc {
            Some(doc) => crate::encode(doc, options),
            None => crate::encode(&crate::decode(&self.raw, options)?, options),
        }
    }
}
