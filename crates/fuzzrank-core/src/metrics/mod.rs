//! String Metrics
//!
//! Pure, stateless comparisons between two strings, all counted in chars:
//!
//! - **Edit distance**: Levenshtein distance, exact DP table (lower = closer)
//! - **Windowed similarity**: Jaro-Winkler style score in `[0.0, 1.0]`,
//!   case-folded, rounded to two decimals (higher = closer)
//! - **Longest common substring**: longest contiguous shared run (higher = closer)
//!
//! # Example
//!
//! ```rust
//! use fuzzrank_core::metrics::{edit_distance, longest_common_substring, windowed_similarity};
//!
//! assert_eq!(edit_distance("kitten", "sitting"), 3);
//! assert_eq!(windowed_similarity("martha", "marhta"), 0.96);
//! assert_eq!(longest_common_substring("the quick fox", "quickly"), 5);
//! ```

mod edit_distance;
mod substring;
mod windowed;

pub use edit_distance::edit_distance;
pub use substring::longest_common_substring;
pub use windowed::{windowed_similarity, MAX_PREFIX};
