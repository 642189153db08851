//! Searchable records
//!
//! A [`Record`] is a unique key plus an ordered list of named text fields.
//! [`RecordSet`] keeps records in insertion order and indexes them by key.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One searchable unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: Vec::new(),
        }
    }

    /// Append a named field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Field values in order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    /// Build a record from a JSON value.
    ///
    /// Object entries become fields: strings verbatim, numbers and booleans
    /// by their display form, arrays and objects as compact JSON. `null`
    /// entries carry no value and are skipped. Any non-object value becomes
    /// a single field named `value`.
    pub fn from_json(key: impl Into<String>, value: &Value) -> Self {
        let mut record = Self::new(key);
        match value {
            Value::Object(map) => {
                for (name, v) in map {
                    if let Some(text) = json_text(v) {
                        record.fields.push((name.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = json_text(other) {
                    record.fields.push(("value".to_string(), text));
                }
            }
        }
        record
    }
}

fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Records in insertion order with a key index
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<Record>,
    index: AHashMap<String, usize>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. An existing key keeps its position and takes the
    /// new fields.
    pub fn insert(&mut self, record: Record) {
        match self.index.get(&record.key) {
            Some(&pos) => {
                warn!(key = %record.key, "duplicate record key, replacing fields");
                self.records[pos] = record;
            }
            None => {
                self.index.insert(record.key.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.index.get(key).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Build from a JSON object of `key -> record`.
    /// Returns `None` when `value` is not an object.
    pub fn from_json_object(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(
            map.iter()
                .map(|(key, fields)| Record::from_json(key.clone(), fields))
                .collect(),
        )
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
