//! Tokenization options and the patch type used to override them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Scalar;

/// Resolved tokenization rules for one decode or encode call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Options {
    /// Infer the line ending from the input instead of using `line_ending`.
    pub detect_line_ending: bool,
    pub line_ending: String,
    pub section_open_identifier: String,
    pub section_close_identifier: String,
    /// Value given to keys that have no assignment delimiter.
    pub default_value: Scalar,
    pub assign_identifier: String,
    /// Prefixes marking a line as a comment. Empty entries are ignored.
    pub comment_identifiers: Vec<String>,
    pub trim_lines: bool,
    pub unquote_attributes: bool,
    pub quote_attributes: bool,
    pub unquote_keys: bool,
    pub quote_keys: bool,
    pub unquote_values: bool,
    pub quote_values: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            detect_line_ending: false,
            line_ending: "\r\n".to_string(),
            section_open_identifier: "[".to_string(),
            section_close_identifier: "]".to_string(),
            default_value: Scalar::Bool(true),
            assign_identifier: "=".to_string(),
            comment_identifiers: vec![";".to_string()],
            trim_lines: true,
            unquote_attributes: false,
            quote_attributes: false,
            unquote_keys: false,
            quote_keys: false,
            unquote_values: false,
            quote_values: false,
        }
    }
}

impl Options {
    /// Defaults overlaid with `patch`.
    pub fn from_patch(patch: &OptionsPatch) -> Self {
        Self::default().with_patch(patch)
    }

    pub fn with_patch(mut self, patch: &OptionsPatch) -> Self {
        patch.apply(&mut self);
        self
    }

    /// The separator to split `text` on.
    pub fn effective_line_ending<'a>(&'a self, text: &str) -> crate::Result<&'a str> {
        if self.detect_line_ending {
            crate::decode::line_ending::detect_line_ending(text)
        } else {
            Ok(self.line_ending.as_str())
        }
    }

    pub(crate) fn is_comment(&self, line: &str) -> bool {
        self.comment_identifiers
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .any(|prefix| line.starts_with(prefix.as_str()))
    }
}

/// Caller-supplied overrides. Unset fields fall back to the base options.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", deny_unknown_fields, default)
)]
pub struct OptionsPatch {
    pub detect_line_ending: Option<bool>,
    pub line_ending: Option<String>,
    pub section_open_identifier: Option<String>,
    pub section_close_identifier: Option<String>,
    pub default_value: Option<Scalar>,
    pub assign_identifier: Option<String>,
    pub comment_identifiers: Option<Vec<String>>,
    pub trim_lines: Option<bool>,
    pub unquote_attributes: Option<bool>,
    pub quote_attributes: Option<bool>,
    pub unquote_keys: Option<bool>,
    pub quote_keys: Option<bool>,
    pub unquote_values: Option<bool>,
    pub quote_values: Option<bool>,
}

macro_rules! overlay {
    ($patch:expr, $target:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(v) = &$patch.$field {
                $target.$field = v.clone();
            }
        )+
    };
}

impl OptionsPatch {
    pub fn apply(&self, options: &mut Options) {
        overlay!(
            self,
            options,
            detect_line_ending,
            line_ending,
            section_open_identifier,
            section_close_identifier,
            default_value,
            assign_identifier,
            comment_identifiers,
            trim_lines,
            unquote_attributes,
            quote_attributes,
            unquote_keys,
            quote_keys,
            unquote_values,
            quote_values,
        );
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: OptionsPatch) -> Self {
        Self {
            detect_line_ending: other.detect_line_ending.or(self.detect_line_ending),
            line_ending: other.line_ending.or(self.line_ending),
            section_open_identifier: other.section_open_identifier.or(self.section_open_identifier),
            section_close_identifier: other
                .section_close_identifier
                .or(self.section_close_identifier),
            default_value: other.default_value.or(self.default_value),
            assign_identifier: other.assign_identifier.or(self.assign_identifier),
            comment_identifiers: other.comment_identifiers.or(self.comment_identifiers),
            trim_lines: other.trim_lines.or(self.trim_lines),
            unquote_attributes: other.unquote_attributes.or(self.unquote_attributes),
            quote_attributes: other.quote_attributes.or(self.quote_attributes),
            unquote_keys: other.unquote_keys.or(self.unquote_keys),
            quote_keys: other.quote_keys.or(self.quote_keys),
            unquote_values: other.unquote_values.or(self.unquote_values),
            quote_values: other.quote_values.or(self.quote_values),
        }
    }
}
