//! Windowed character-matching similarity (Jaro-Winkler family)
//!
//! Both inputs are case-folded before matching. Characters match when they
//! are equal and lie within a window of `len(shorter) / 2 + 1` positions of
//! each other; each character of the other string can be consumed once.
//! Matching runs in both directions and the two match sequences must agree
//! in length, otherwise the similarity is 0.0.
//!
//! The common prefix of the unfolded inputs (at most [`MAX_PREFIX`] chars)
//! pulls the score towards 1.0, and the final value is rounded to two
//! decimal places.

/// Longest common prefix considered for the prefix adjustment
pub const MAX_PREFIX: usize = 4;

/// Weight applied per shared prefix char
const PREFIX_SCALE: f64 = 0.1;

/// Similarity between `a` and `b` in `[0.0, 1.0]`.
///
/// When both folded strings have the same length, `a` is taken as the
/// shorter one.
pub fn windowed_similarity(a: &str, b: &str) -> f64 {
    let a_folded: Vec<char> = a.to_lowercase().chars().collect();
    let b_folded: Vec<char> = b.to_lowercase().chars().collect();

    let (shorter, longer) = if a_folded.len() > b_folded.len() {
        (b_folded, a_folded)
    } else {
        (a_folded, b_folded)
    };

    let half_width = shorter.len() / 2 + 1;

    let forward = char_matches(&shorter, &longer, half_width);
    let backward = char_matches(&longer, &shorter, half_width);

    if forward.is_empty() || backward.is_empty() || forward.len() != backward.len() {
        return 0.0;
    }

    let matches = forward.len() as f64;
    let transpositions = transpositions(&forward, &backward);

    let base = (matches / shorter.len() as f64
        + matches / longer.len() as f64
        + (matches - transpositions) / matches)
        / 3.0;

    let prefix = common_prefix_len(a, b).min(MAX_PREFIX) as f64;
    let adjusted = base + PREFIX_SCALE * prefix * (1.0 - base);

    (adjusted * 100.0).round() / 100.0
}

/// Characters of `first` that find an unused equal character in `second`
/// within `[i - limit, i + limit)`, in `first` order.
fn char_matches(first: &[char], second: &[char], limit: usize) -> Vec<char> {
    // Scratch marks owned by this call
    let mut used = vec![false; second.len()];
    let mut common = Vec::with_capacity(first.len().min(second.len()));

    for (i, &ch) in first.iter().enumerate() {
        let start = i.saturating_sub(limit);
        let end = (i + limit).min(second.len());
        if start >= end {
            continue;
        }

        if let Some(offset) = (start..end).find(|&j| !used[j] && second[j] == ch) {
            used[offset] = true;
            common.push(ch);
        }
    }

    common
}

/// Half the number of positions where the two match sequences disagree
fn transpositions(first: &[char], second: &[char]) -> f64 {
    let mismatched = first
        .iter()
        .zip(second.iter())
        .filter(|(x, y)| x != y)
        .count();
    mismatched as f64 / 2.0
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}
