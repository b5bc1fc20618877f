//! In-memory document model: stray scalars and one level of sections.

use core::fmt;

use indexmap::IndexMap;

/// Leaf value of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    String(String),
    Bool(bool),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            Scalar::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            Scalar::String(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

macro_rules! scalar_from_display {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::String(v.to_string())
                }
            }
        )+
    };
}

scalar_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

pub type Section = IndexMap<String, Scalar>;

/// Top-level slot of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Scalar(Scalar),
    Section(Section),
}

impl Entry {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Entry::Scalar(s) => Some(s),
            Entry::Section(_) => None,
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Entry::Section(s) => Some(s),
            Entry::Scalar(_) => None,
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Entry::Section(_))
    }
}

macro_rules! entry_from_scalar {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Entry {
                fn from(v: $t) -> Self {
                    Entry::Scalar(v.into())
                }
            }
        )+
    };
}

entry_from_scalar!(Scalar, &str, String, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

impl From<Section> for Entry {
    fn from(s: Section) -> Self {
        Entry::Section(s)
    }
}

/// Ordered mapping produced by decoding and consumed by encoding.
///
/// Iteration follows first insertion; re-inserting a key replaces the value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: IndexMap<String, Entry>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stray scalar stored under `key`.
    pub fn scalar(&self, key: &str) -> Option<&Scalar> {
        self.get(key).and_then(Entry::as_scalar)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.get(name).and_then(Entry::as_section)
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<Entry>) -> Option<Entry> {
        self.entries.insert(key.into(), entry.into())
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        match self.entries.get_mut(name) {
            Some(Entry::Section(s)) => Some(s),
            _ => None,
        }
    }

    /// Make sure a section named `name` exists. A stray scalar under the same
    /// name is replaced in its slot.
    pub fn open_section(&mut self, name: &str) {
        match self.entries.get_mut(name) {
            Some(Entry::Section(_)) => {}
            Some(slot) => *slot = Entry::Section(Section::new()),
            None => {
                self.entries
                    .insert(name.to_string(), Entry::Section(Section::new()));
            }
        }
    }

    /// Insert `key` into section `section`, opening it as
    /// [`open_section`](Self::open_section) does. Returns the replaced value.
    pub fn insert_into(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<Scalar>,
    ) -> Option<Scalar> {
        if let Some(Entry::Section(s)) = self.entries.get_mut(section) {
            return s.insert(key.into(), value.into());
        }
        let mut s = Section::new();
        s.insert(key.into(), value.into());
        self.entries.insert(section.to_string(), Entry::Section(s));
        None
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Entry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Stray entries in insertion order.
    pub fn strays(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_scalar().map(|s| (k.as_str(), s)))
    }

    /// Sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_section().map(|s| (k.as_str(), s)))
    }
}

impl<K: Into<String>, V: Into<Entry>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, Entry);
    type IntoIter = indexmap::map::IntoIter<String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Entry);
    type IntoIter = indexmap::map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Document, Entry, Scalar, Section};
    use core::fmt;
    use indexmap::IndexMap;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::{Deserialize, Serialize, Serializer};

    impl Serialize for Scalar {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Scalar::String(s) => serializer.serialize_str(s),
                Scalar::Bool(b) => serializer.serialize_bool(*b),
            }
        }
    }

    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = Scalar;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, boolean or number")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
            Ok(Scalar::Bool(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
            Ok(Scalar::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
            Ok(Scalar::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
            Ok(Scalar::from(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
            Ok(Scalar::from(v))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
            Ok(Scalar::String(v))
        }
    }

    impl<'de> Deserialize<'de> for Scalar {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ScalarVisitor)
        }
    }

    impl Serialize for Entry {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Entry::Scalar(s) => s.serialize(serializer),
                Entry::Section(m) => m.serialize(serializer),
            }
        }
    }

    struct EntryVisitor;

    impl<'de> Visitor<'de> for EntryVisitor {
        type Value = Entry;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a scalar or a map of scalars")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Entry, E> {
            ScalarVisitor.visit_bool(v).map(Entry::Scalar)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Entry, E> {
            ScalarVisitor.visit_i64(v).map(Entry::Scalar)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Entry, E> {
            ScalarVisitor.visit_u64(v).map(Entry::Scalar)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Entry, E> {
            ScalarVisitor.visit_f64(v).map(Entry::Scalar)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Entry, E> {
            ScalarVisitor.visit_str(v).map(Entry::Scalar)
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Entry, E> {
            ScalarVisitor.visit_string(v).map(Entry::Scalar)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entry, A::Error> {
            let mut section = Section::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((k, v)) = map.next_entry::<String, Scalar>()? {
                section.insert(k, v);
            }
            Ok(Entry::Section(section))
        }
    }

    impl<'de> Deserialize<'de> for Entry {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(EntryVisitor)
        }
    }

    impl Serialize for Document {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.entries.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Document {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let entries = IndexMap::<String, Entry>::deserialize(deserializer)?;
            Ok(Document { entries })
        }
    }
}
