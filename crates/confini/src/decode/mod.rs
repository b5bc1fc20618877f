//! Decoding pipeline: line-ending resolution, line classification, assembly.

pub mod line_ending;
pub mod parser;
pub mod scanner;
