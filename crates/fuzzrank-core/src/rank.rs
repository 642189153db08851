//! Ranking of admitted records

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An admitted record key and its score (lower is better)
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScoreEntry {
    pub key: String,
    pub score: f64,
}

impl ScoreEntry {
    pub fn new(key: impl Into<String>, score: f64) -> Self {
        Self {
            key: key.into(),
            score,
        }
    }
}

/// Ranked `key -> score` mapping, best match first.
///
/// Serializes as a JSON object whose entries appear in rank order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<ScoreEntry>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreEntry> {
        self.entries.iter()
    }

    /// Keys in rank order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn first(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    /// Score of `key`, if it was returned
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.score)
    }

    /// Rank (0 = best) of `key`, if it was returned
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn into_entries(self) -> Vec<ScoreEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ScoreEntry;
    type IntoIter = std::slice::Iter<'a, ScoreEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.score)?;
        }
        map.end()
    }
}

/// Order entries ascending by score and keep the best `max_results`.
///
/// The sort is stable: equal scores keep their input order.
pub fn rank(mut entries: Vec<ScoreEntry>, max_results: usize) -> ResultSet {
    entries.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries.truncate(max_results);
    ResultSet { entries }
}
