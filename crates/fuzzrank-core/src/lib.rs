//! Fuzzrank Core
//!
//! Fuzzy ranking of multi-field records against a free-text query. Each
//! record's fields are compared with the query using one primary metric,
//! optionally blended with a longest-common-substring bonus, filtered by
//! per-query thresholds and ranked best match first (lowest score).
//!
//! # Features
//!
//! - `parallel` - Score records on the rayon pool for large collections
//!
//! # Example
//!
//! ```rust
//! use fuzzrank_core::{FuzzEngine, Record, RecordSet};
//!
//! let records: RecordSet = vec![
//!     Record::new("p1").field("title", "Quick Fox"),
//!     Record::new("p2").field("title", "Quack Fix"),
//! ]
//! .into_iter()
//! .collect();
//!
//! // 0 = edit distance, no substring bonus, at most 10 results
//! let engine = FuzzEngine::construct(records, 10, 0, false).unwrap();
//! let results = engine.search("Quick Fox", None, None);
//! assert_eq!(results.first().unwrap().key, "p1");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod json;
pub mod metrics;
pub mod rank;
pub mod record;
pub mod scoring;

// Re-export main types at crate root
pub use config::{QueryThresholds, SearchConfig, SearchMode};
pub use engine::FuzzEngine;
pub use error::{FuzzError, FuzzResult};
pub use filter::{admit, ActiveThresholds};
pub use json::{search_json, SearchInput, SearchOutput};
pub use metrics::{edit_distance, longest_common_substring, windowed_similarity};
pub use rank::{rank, ResultSet, ScoreEntry};
pub use record::{Record, RecordSet};
pub use scoring::{score_record, RecordSignals};

/// Install a `tracing` fmt subscriber for hosts without their own.
///
/// Safe to call more than once. The filter comes from `RUST_LOG`:
/// - RUST_LOG=fuzzrank_core=debug
/// - RUST_LOG=fuzzrank_core=trace
pub fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("fuzzrank_core=info"));
        // Another subscriber may already be installed by the host
        if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("fuzzrank tracing initialized");
        }
    });
}
