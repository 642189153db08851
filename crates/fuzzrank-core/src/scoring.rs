//! Per-record scoring
//!
//! Every field value is compared against the query with the configured
//! primary metric (and the common substring metric when the bonus is on).
//! Per-field values reduce to the best one per axis:
//!
//! - edit distance: minimum
//! - windowed similarity: maximum
//! - common substring: maximum
//!
//! and combine into a single score where lower is better:
//!
//! ```text
//! edit distance mode:       score = min_edit_distance
//! windowed similarity mode: score = -|max_similarity|
//! substring bonus:          score -= max_substring
//! ```

use crate::config::{SearchConfig, SearchMode};
use crate::metrics::{edit_distance, longest_common_substring, windowed_similarity};
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Reduced metric values and combined score for one record.
///
/// An axis the configuration does not compute is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordSignals {
    pub score: f64,
    pub min_edit_distance: Option<usize>,
    pub max_similarity: Option<f64>,
    pub max_substring: Option<usize>,
}

/// Score `record` against `query`.
///
/// Returns `None` for a record without field values: it carries no signal
/// on any axis and cannot be ranked.
pub fn score_record(record: &Record, query: &str, config: &SearchConfig) -> Option<RecordSignals> {
    score_values(record.values(), query, config)
}

/// Score an arbitrary sequence of field values against `query`
pub fn score_values<'a, I>(values: I, query: &str, config: &SearchConfig) -> Option<RecordSignals>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut min_edit_distance: Option<usize> = None;
    let mut max_similarity: Option<f64> = None;
    let mut max_substring: Option<usize> = None;

    for value in values {
        match config.mode {
            SearchMode::EditDistance => {
                let d = edit_distance(value, query);
                min_edit_distance = Some(min_edit_distance.map_or(d, |best| best.min(d)));
            }
            SearchMode::WindowedSimilarity => {
                let s = windowed_similarity(value, query);
                max_similarity = Some(max_similarity.map_or(s, |best| best.max(s)));
            }
        }

        if config.use_substring_bonus {
            let l = longest_common_substring(value, query);
            max_substring = Some(max_substring.map_or(l, |best| best.max(l)));
        }
    }

    let mut score = match config.mode {
        SearchMode::EditDistance => min_edit_distance? as f64,
        SearchMode::WindowedSimilarity => 0.0 - max_similarity?.abs(),
    };

    if config.use_substring_bonus {
        score -= max_substring? as f64;
    }

    Some(RecordSignals {
        score,
        min_edit_distance,
        max_similarity,
        max_substring,
    })
}
