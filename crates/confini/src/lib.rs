#![doc = include_str!("../README.md")]

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod quote;
pub mod value;

#[cfg(feature = "json")]
pub mod json;

pub use crate::config::Config;
pub use crate::decode::line_ending::detect_line_ending;
pub use crate::error::{Error, Result};
pub use crate::options::{Options, OptionsPatch};
pub use crate::value::{Document, Entry, Scalar, Section};

use std::io::{Read, Write};

/// Decode INI text into a [`Document`].
pub fn decode(text: &str, options: &Options) -> Result<Document> {
    crate::decode::parser::parse(text, options)
}

/// Decode raw bytes; input that is not valid UTF-8 is rejected.
pub fn decode_from_slice(bytes: &[u8], options: &Options) -> Result<Document> {
    let text = core::str::from_utf8(bytes).map_err(|e| Error::InvalidInputType {
        found: format!("non-UTF-8 bytes ({})", e),
    })?;
    decode(text, options)
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Document> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    decode_from_slice(&buf, options)
}

/// Encode a [`Document`]. Stray entries always precede sections.
pub fn encode(doc: &Document, options: &Options) -> Result<String> {
    crate::encode::encode_document(doc, options)
}

pub fn encode_to_writer<W: Write>(mut writer: W, doc: &Document, options: &Options) -> Result<()> {
    let s = encode(doc, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
