//! Engine configuration and per-query thresholds

use crate::error::{FuzzError, FuzzResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Primary metric driving the score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Levenshtein distance, lower is better
    #[default]
    #[serde(alias = "levenshtein")]
    EditDistance,
    /// Jaro-Winkler style similarity, higher is better
    #[serde(alias = "jaro_winkler")]
    WindowedSimilarity,
}

impl SearchMode {
    /// Resolve a numeric mode code: 0 = edit distance, 1 = windowed similarity
    pub fn from_code(code: i64) -> FuzzResult<Self> {
        match code {
            0 => Ok(Self::EditDistance),
            1 => Ok(Self::WindowedSimilarity),
            other => Err(FuzzError::InvalidConfiguration(format!(
                "unknown search mode code {other}"
            ))),
        }
    }

    /// Numeric code of this mode
    pub fn code(&self) -> i64 {
        match self {
            Self::EditDistance => 0,
            Self::WindowedSimilarity => 1,
        }
    }
}

impl FromStr for SearchMode {
    type Err = FuzzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edit_distance" | "levenshtein" => Ok(Self::EditDistance),
            "windowed_similarity" | "jaro_winkler" => Ok(Self::WindowedSimilarity),
            other => Err(FuzzError::InvalidConfiguration(format!(
                "unknown search mode '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EditDistance => write!(f, "edit_distance"),
            Self::WindowedSimilarity => write!(f, "windowed_similarity"),
        }
    }
}

/// Immutable engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub mode: SearchMode,
    /// Blend the longest common substring into score and filtering
    pub use_substring_bonus: bool,
    /// Cap on returned matches, at least 1
    pub max_results: usize,
    /// Record count at which scoring goes parallel (`parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::EditDistance,
            use_substring_bonus: false,
            max_results: 20,
            parallel_threshold: 1000,
        }
    }
}

impl SearchConfig {
    /// Create a configuration; `max_results` below 1 is raised to 1
    pub fn new(mode: SearchMode, use_substring_bonus: bool, max_results: usize) -> Self {
        Self {
            mode,
            use_substring_bonus,
            max_results,
            ..Default::default()
        }
        .normalized()
    }

    /// Create from a numeric mode code, failing on unknown codes
    pub fn from_code(mode_code: i64, use_substring_bonus: bool, max_results: usize) -> FuzzResult<Self> {
        let mode = SearchMode::from_code(mode_code)?;
        Ok(Self::new(mode, use_substring_bonus, max_results))
    }

    /// Parse a JSON configuration document
    pub fn from_json(input: &str) -> FuzzResult<Self> {
        serde_json::from_str::<Self>(input)
            .map(Self::normalized)
            .map_err(|e| FuzzError::InvalidConfiguration(e.to_string()))
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Clamp values that have a lower bound
    pub fn normalized(mut self) -> Self {
        if self.max_results == 0 {
            warn!("max_results of 0 raised to 1");
            self.max_results = 1;
        }
        self
    }
}

/// Optional per-query bounds. `None` means unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryThresholds {
    /// Largest admitted edit distance (edit distance mode only)
    pub max_distance: Option<usize>,
    /// Smallest admitted common substring (substring bonus only)
    pub min_substring_length: Option<usize>,
}

impl QueryThresholds {
    pub fn new(min_substring_length: Option<usize>, max_distance: Option<usize>) -> Self {
        Self {
            max_distance,
            min_substring_length,
        }
    }

    /// Thresholds with the ones that do not apply to `config` disabled
    pub fn active_for(&self, config: &SearchConfig) -> Self {
        Self {
            max_distance: self
                .max_distance
                .filter(|_| config.mode == SearchMode::EditDistance),
            min_substring_length: self
                .min_substring_length
                .filter(|_| config.use_substring_bonus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_codes() {
        assert_eq!(SearchMode::from_code(0), Ok(SearchMode::EditDistance));
        assert_eq!(SearchMode::from_code(1), Ok(SearchMode::WindowedSimilarity));
        assert!(matches!(
            SearchMode::from_code(2),
            Err(FuzzError::InvalidConfiguration(_))
        ));
        assert!(SearchMode::from_code(-1).is_err());
        assert_eq!(SearchMode::WindowedSimilarity.code(), 1);
    }

    #[test]
    fn mode_names() {
        assert_eq!("levenshtein".parse::<SearchMode>(), Ok(SearchMode::EditDistance));
        assert_eq!(
            "Jaro_Winkler".parse::<SearchMode>(),
            Ok(SearchMode::WindowedSimilarity)
        );
        assert!("soundex".parse::<SearchMode>().is_err());
        assert_eq!(SearchMode::EditDistance.to_string(), "edit_distance");
    }

    #[test]
    fn max_results_clamped() {
        let config = SearchConfig::new(SearchMode::EditDistance, false, 0);
        assert_eq!(config.max_results, 1);
    }

    #[test]
    fn from_json_document() {
        let config = SearchConfig::from_json(
            r#"{"mode":"jaro_winkler","use_substring_bonus":true,"max_results":0}"#,
        )
        .unwrap();
        assert_eq!(config.mode, SearchMode::WindowedSimilarity);
        assert!(config.use_substring_bonus);
        assert_eq!(config.max_results, 1);
        assert_eq!(config.parallel_threshold, 1000);
    }

    #[test]
    fn from_json_rejects_unknown_mode() {
        let err = SearchConfig::from_json(r#"{"mode":"metaphone"}"#).unwrap_err();
        assert!(matches!(err, FuzzError::InvalidConfiguration(_)));
    }

    #[test]
    fn irrelevant_thresholds_disabled() {
        let thresholds = QueryThresholds::new(Some(3), Some(2));

        let similarity = SearchConfig::new(SearchMode::WindowedSimilarity, false, 10);
        assert_eq!(thresholds.active_for(&similarity), QueryThresholds::default());

        let edit_with_bonus = SearchConfig::new(SearchMode::EditDistance, true, 10);
        assert_eq!(thresholds.active_for(&edit_with_bonus), thresholds);

        let edit_only = SearchConfig::new(SearchMode::EditDistance, false, 10);
        assert_eq!(
            thresholds.active_for(&edit_only),
            QueryThresholds::new(None, Some(2))
        );
    }
}
