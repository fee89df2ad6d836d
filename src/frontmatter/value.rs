//! Typed header values and the ordered header mapping.

use std::fmt;

use serde_yaml::{Number, Value};

use crate::error::Result;
use crate::error::frontmatter::parse_failed;

/// Scalars that are neither strings nor booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Number(Number),
    /// Canonical YAML text of a value outside the flat key/value model,
    /// e.g. a nested mapping under a key that is later discarded.
    Other(String),
}

/// One item of a list value.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    /// A YAML string, quoted on output only when it would not read back as one
    Text(String),
    /// Canonical text of a number, boolean or null, written unquoted
    Bare(String),
}

impl ListItem {
    pub fn as_str(&self) -> &str {
        match self {
            ListItem::Text(s) | ListItem::Bare(s) => s,
        }
    }
}

/// A single header value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    List(Vec<ListItem>),
    Bool(bool),
    Scalar(Scalar),
}

impl FieldValue {
    /// Convert a parsed YAML value into the flat value model.
    ///
    /// Sequence items keep whether they were strings, so `[rust, 2023, true]`
    /// renders back with the same types.
    pub fn from_yaml(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::String(s),
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Scalar(Scalar::Number(n)),
            Value::Null => FieldValue::Scalar(Scalar::Null),
            Value::Sequence(items) => {
                FieldValue::List(items.into_iter().map(list_item).collect())
            }
            Value::Tagged(tagged) => FieldValue::from_yaml(tagged.value),
            other @ Value::Mapping(_) => FieldValue::Scalar(Scalar::Other(yaml_text(&other))),
        }
    }

    /// Whether the value counts as "set" for optional flags such as `draft`.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::String(s) => !s.is_empty(),
            FieldValue::List(items) => !items.is_empty(),
            FieldValue::Bool(b) => *b,
            FieldValue::Scalar(Scalar::Null) => false,
            FieldValue::Scalar(Scalar::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            FieldValue::Scalar(Scalar::Other(_)) => true,
        }
    }

    /// Plain string form used when a field is stringified.
    pub fn to_plain_string(&self) -> String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Scalar(Scalar::Null) => String::new(),
            other => other.to_string(),
        }
    }
}

/// Canonical unquoted rendering: `true`, `42`, `null`, `[a, b]`.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::List(items) => {
                let items: Vec<&str> = items.iter().map(ListItem::as_str).collect();
                write!(f, "[{}]", items.join(", "))
            }
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Scalar(Scalar::Null) => f.write_str("null"),
            FieldValue::Scalar(Scalar::Number(n)) => write!(f, "{n}"),
            FieldValue::Scalar(Scalar::Other(text)) => f.write_str(text.trim_end()),
        }
    }
}

fn list_item(item: Value) -> ListItem {
    match item {
        Value::String(s) => ListItem::Text(s),
        Value::Bool(b) => ListItem::Bare(b.to_string()),
        Value::Number(n) => ListItem::Bare(n.to_string()),
        Value::Null => ListItem::Bare("null".to_string()),
        Value::Tagged(tagged) => list_item(tagged.value),
        other => ListItem::Text(yaml_text(&other)),
    }
}

fn yaml_text(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_default()
}

/// Insertion-ordered mapping from header key to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    entries: Vec<(String, FieldValue)>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a header from a parsed YAML mapping, keeping document order.
    pub fn from_yaml(value: Value) -> Result<Self> {
        let Value::Mapping(mapping) = value else {
            return Err(parse_failed("frontmatter is not a key/value mapping"));
        };

        let mut header = Header::new();
        for (key, value) in mapping {
            let key = match key {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(parse_failed(format!(
                        "unsupported frontmatter key: {}",
                        yaml_text(&other)
                    )));
                }
            };
            header.insert(key, FieldValue::from_yaml(value));
        }
        Ok(header)
    }

    /// Insert a value, replacing an existing key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}
