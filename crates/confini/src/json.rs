//! Interop with `serde_json::Value`.
//!
//! A document only holds scalars and one level of sections. Anything deeper
//! coming from JSON (arrays, objects inside a section, numbers, null) is
//! flattened to a string: numbers use their JSON rendering, null becomes the
//! empty string, arrays and objects become compact JSON text.

use serde_json::{Map, Value};

use crate::value::{Document, Entry, Scalar, Section};
use crate::{Error, Result};

fn scalar_from_json(value: &Value) -> Scalar {
    match value {
        Value::Bool(b) => Scalar::Bool(*b),
        Value::String(s) => Scalar::String(s.clone()),
        Value::Null => Scalar::String(String::new()),
        Value::Number(n) => Scalar::String(n.to_string()),
        Value::Array(_) | Value::Object(_) => Scalar::String(value.to_string()),
    }
}

fn section_from_json(map: &Map<String, Value>) -> Section {
    map.iter()
        .map(|(k, v)| (k.clone(), scalar_from_json(v)))
        .collect()
}

/// Convert a JSON object into a document. Non-object input is rejected.
pub fn document_from_json(value: &Value) -> Result<Document> {
    let Value::Object(map) = value else {
        return Err(Error::Message(format!(
            "expected a JSON object at the top level, got {}",
            json_kind(value)
        )));
    };
    Ok(map
        .iter()
        .map(|(k, v)| {
            let entry = match v {
                Value::Object(inner) => Entry::Section(section_from_json(inner)),
                other => Entry::Scalar(scalar_from_json(other)),
            };
            (k.clone(), entry)
        })
        .collect())
}

fn scalar_to_json(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::String(s) => Value::String(s.clone()),
        Scalar::Bool(b) => Value::Bool(*b),
    }
}

pub fn document_to_json(doc: &Document) -> Value {
    let map: Map<String, Value> = doc
        .iter()
        .map(|(k, entry)| {
            let v = match entry {
                Entry::Scalar(s) => scalar_to_json(s),
                Entry::Section(section) => Value::Object(
                    section
                        .iter()
                        .map(|(k, s)| (k.clone(), scalar_to_json(s)))
                        .collect(),
                ),
            };
            (k.clone(), v)
        })
        .collect();
    Value::Object(map)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<&Value> for Document {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        document_from_json(value)
    }
}

impl From<&Document> for Value {
    fn from(doc: &Document) -> Self {
        document_to_json(doc)
    }
}
