//! FuzzEngine - ranks a fixed record collection against queries

use crate::config::{QueryThresholds, SearchConfig};
use crate::error::{FuzzError, FuzzResult};
use crate::filter::{admit_signals, ActiveThresholds};
use crate::rank::{rank, ResultSet, ScoreEntry};
use crate::record::{Record, RecordSet};
use crate::scoring::{score_record, RecordSignals};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Search engine over an immutable record collection.
///
/// The engine holds no mutable state, so `&FuzzEngine` can be shared across
/// threads and searched concurrently. With the `parallel` feature, records
/// are scored on the rayon pool once the collection reaches
/// `SearchConfig::parallel_threshold`.
#[derive(Debug, Clone)]
pub struct FuzzEngine {
    records: RecordSet,
    config: SearchConfig,
}

impl FuzzEngine {
    /// Create an engine from an already validated configuration
    pub fn new(records: RecordSet, config: SearchConfig) -> Self {
        Self {
            records,
            config: config.normalized(),
        }
    }

    /// Create an engine from raw settings.
    ///
    /// `mode_code` is 0 for edit distance or 1 for windowed similarity; any
    /// other value fails with [`FuzzError::InvalidConfiguration`].
    pub fn construct(
        records: RecordSet,
        max_results: usize,
        mode_code: i64,
        use_substring_bonus: bool,
    ) -> FuzzResult<Self> {
        let config = SearchConfig::from_code(mode_code, use_substring_bonus, max_results)?;
        Ok(Self::new(records, config))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Rank records against `query`.
    ///
    /// `min_substring_length` only applies with the substring bonus enabled,
    /// `max_distance` only in edit distance mode.
    pub fn search(
        &self,
        query: &str,
        min_substring_length: Option<usize>,
        max_distance: Option<usize>,
    ) -> ResultSet {
        self.search_with(query, &QueryThresholds::new(min_substring_length, max_distance))
    }

    /// Rank records against `query` under `thresholds`
    pub fn search_with(&self, query: &str, thresholds: &QueryThresholds) -> ResultSet {
        let start = Instant::now();
        let active = ActiveThresholds::resolve(thresholds, &self.config);

        let admitted = self.admitted_entries(query, &active, None);
        self.finish(query, admitted, start)
    }

    /// Like [`search_with`](Self::search_with), but checks `cancel` between
    /// records. Returns [`FuzzError::Cancelled`] if the flag is set before
    /// ranking starts.
    pub fn search_cancellable(
        &self,
        query: &str,
        thresholds: &QueryThresholds,
        cancel: &AtomicBool,
    ) -> FuzzResult<ResultSet> {
        let start = Instant::now();
        let active = ActiveThresholds::resolve(thresholds, &self.config);

        let admitted = self.admitted_entries(query, &active, Some(cancel));
        if cancel.load(Ordering::Relaxed) {
            debug!(records = self.records.len(), "search cancelled");
            return Err(FuzzError::Cancelled);
        }

        Ok(self.finish(query, admitted, start))
    }

    /// Signals for a single record, without thresholds
    pub fn score(&self, record: &Record, query: &str) -> Option<RecordSignals> {
        score_record(record, query, &self.config)
    }

    /// Signals for the record stored under `key`
    pub fn score_key(&self, key: &str, query: &str) -> Option<RecordSignals> {
        self.records.get(key).and_then(|r| self.score(r, query))
    }

    fn finish(&self, query: &str, admitted: Vec<ScoreEntry>, start: Instant) -> ResultSet {
        let admitted_count = admitted.len();
        let results = rank(admitted, self.config.max_results);

        debug!(
            query_len = query.chars().count(),
            mode = %self.config.mode,
            records = self.records.len(),
            admitted = admitted_count,
            returned = results.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "search complete"
        );

        results
    }

    /// Score and filter - parallel for large collections
    #[cfg(feature = "parallel")]
    fn admitted_entries(
        &self,
        query: &str,
        thresholds: &ActiveThresholds,
        cancel: Option<&AtomicBool>,
    ) -> Vec<ScoreEntry> {
        if self.records.len() >= self.config.parallel_threshold {
            // collect() into a Vec keeps record order
            self.records
                .as_slice()
                .par_iter()
                .filter_map(|record| {
                    if is_cancelled(cancel) {
                        return None;
                    }
                    self.entry_for(record, query, thresholds)
                })
                .collect()
        } else {
            self.admitted_sequential(query, thresholds, cancel)
        }
    }

    /// Score and filter sequentially (`parallel` feature disabled)
    #[cfg(not(feature = "parallel"))]
    fn admitted_entries(
        &self,
        query: &str,
        thresholds: &ActiveThresholds,
        cancel: Option<&AtomicBool>,
    ) -> Vec<ScoreEntry> {
        self.admitted_sequential(query, thresholds, cancel)
    }

    fn admitted_sequential(
        &self,
        query: &str,
        thresholds: &ActiveThresholds,
        cancel: Option<&AtomicBool>,
    ) -> Vec<ScoreEntry> {
        let mut admitted = Vec::new();
        for record in &self.records {
            if is_cancelled(cancel) {
                break;
            }
            if let Some(entry) = self.entry_for(record, query, thresholds) {
                admitted.push(entry);
            }
        }
        admitted
    }

    fn entry_for(
        &self,
        record: &Record,
        query: &str,
        thresholds: &ActiveThresholds,
    ) -> Option<ScoreEntry> {
        let Some(signals) = score_record(record, query, &self.config) else {
            trace!(key = %record.key, "no fields to score");
            return None;
        };

        if !admit_signals(&signals, thresholds) {
            trace!(
                key = %record.key,
                min_edit_distance = ?signals.min_edit_distance,
                max_substring = ?signals.max_substring,
                "rejected by thresholds"
            );
            return None;
        }

        Some(ScoreEntry::new(record.key.clone(), signals.score))
    }
}

fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}
