//! Threshold filtering
//!
//! A record is admitted when every active bound holds. A missing signal on
//! a bounded axis never satisfies the bound.

use crate::config::{QueryThresholds, SearchConfig};
use crate::scoring::RecordSignals;

/// Thresholds already reduced to the ones the configuration uses.
///
/// Only obtainable through [`ActiveThresholds::resolve`], so a bound that
/// does not apply to the active mode can never be evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveThresholds {
    max_distance: Option<usize>,
    min_substring_length: Option<usize>,
}

impl ActiveThresholds {
    pub fn resolve(thresholds: &QueryThresholds, config: &SearchConfig) -> Self {
        let active = thresholds.active_for(config);
        Self {
            max_distance: active.max_distance,
            min_substring_length: active.min_substring_length,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.max_distance.is_none() && self.min_substring_length.is_none()
    }
}

/// Decide whether a record with these reduced signals is admitted
pub fn admit(
    min_edit_distance: Option<usize>,
    max_substring: Option<usize>,
    thresholds: &ActiveThresholds,
) -> bool {
    let distance_ok = match thresholds.max_distance {
        None => true,
        Some(bound) => min_edit_distance.is_some_and(|d| d <= bound),
    };

    let substring_ok = match thresholds.min_substring_length {
        None => true,
        Some(bound) => max_substring.is_some_and(|l| l >= bound),
    };

    distance_ok && substring_ok
}

/// [`admit`] applied to a record's signals
pub fn admit_signals(signals: &RecordSignals, thresholds: &ActiveThresholds) -> bool {
    admit(signals.min_edit_distance, signals.max_substring, thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchMode;

    fn active(mode: SearchMode, bonus: bool, min_lcs: Option<usize>, max_dist: Option<usize>) -> ActiveThresholds {
        let config = SearchConfig::new(mode, bonus, 10);
        ActiveThresholds::resolve(&QueryThresholds::new(min_lcs, max_dist), &config)
    }

    #[test]
    fn unconstrained_admits_everything() {
        let t = active(SearchMode::EditDistance, true, None, None);
        assert!(t.is_unconstrained());
        assert!(admit(Some(100), Some(0), &t));
        assert!(admit(None, None, &t));
    }

    #[test]
    fn max_distance_bound() {
        let t = active(SearchMode::EditDistance, false, None, Some(2));
        assert!(admit(Some(0), None, &t));
        assert!(admit(Some(2), None, &t));
        assert!(!admit(Some(3), None, &t));
    }

    #[test]
    fn zero_distance_is_a_real_bound() {
        let t = active(SearchMode::EditDistance, false, None, Some(0));
        assert!(admit(Some(0), None, &t));
        assert!(!admit(Some(1), None, &t));
    }

    #[test]
    fn min_substring_bound() {
        let t = active(SearchMode::WindowedSimilarity, true, Some(3), None);
        assert!(admit(None, Some(3), &t));
        assert!(admit(None, Some(7), &t));
        assert!(!admit(None, Some(2), &t));
    }

    #[test]
    fn both_bounds_must_hold() {
        let t = active(SearchMode::EditDistance, true, Some(3), Some(2));
        assert!(admit(Some(1), Some(4), &t));
        assert!(!admit(Some(1), Some(1), &t));
        assert!(!admit(Some(5), Some(4), &t));
    }

    #[test]
    fn missing_signal_fails_active_bound() {
        let t = active(SearchMode::EditDistance, true, Some(1), Some(5));
        assert!(!admit(None, Some(4), &t));
        assert!(!admit(Some(1), None, &t));
    }

    #[test]
    fn irrelevant_bounds_are_ignored() {
        // max_distance under similarity, min_substring without the bonus
        let t = active(SearchMode::WindowedSimilarity, false, Some(50), Some(0));
        assert!(t.is_unconstrained());
        assert!(admit(None, None, &t));
    }
}
