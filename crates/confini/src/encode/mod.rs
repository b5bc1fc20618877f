//! Encoding pipeline: stray entries first, then one block per section.

pub mod writer;

use crate::options::Options;
use crate::value::{Document, Entry};
use crate::Result;

use self::writer::LineWriter;

/// The line ending used when writing. With detection enabled the configured
/// ending is itself run through the detector.
pub fn output_line_ending(options: &Options) -> Result<&str> {
    if options.detect_line_ending {
        crate::decode::line_ending::detect_line_ending(&options.line_ending)
    } else {
        Ok(options.line_ending.as_str())
    }
}

pub fn encode_document(doc: &Document, options: &Options) -> Result<String> {
    let line_ending = output_line_ending(options)?;
    let mut strays = LineWriter::new(options, line_ending);
    let mut sections = LineWriter::new(options, line_ending);

    for (name, entry) in doc {
        match entry {
            Entry::Scalar(value) => strays.line_kv(name, value),
            Entry::Section(section) => {
                if !sections.is_empty() {
                    sections.blank_line();
                }
                sections.line_section_header(name);
                for (key, value) in section {
                    sections.line_kv(key, value);
                }
            }
        }
    }

    log::debug!(
        "encoded {} stray bytes and {} section bytes",
        strays.as_str().len(),
        sections.as_str().len()
    );
    let mut out = strays.into_string();
    out.push_str(sections.as_str());
    Ok(out)
}
