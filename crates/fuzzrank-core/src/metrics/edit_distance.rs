//! Levenshtein edit distance

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`. Case-sensitive, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    // Row-major (n + 1) x (m + 1) table; cell (i, j) is the distance
    // between a[..i] and b[..j].
    let width = m + 1;
    let mut table = vec![0usize; (n + 1) * width];
    for i in 0..=n {
        table[i * width] = i;
    }
    for j in 0..=m {
        table[j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let up = table[(i - 1) * width + j] + 1;
            let left = table[i * width + j - 1] + 1;
            let diagonal = table[(i - 1) * width + j - 1] + cost;
            table[i * width + j] = up.min(left).min(diagonal);
        }
    }

    table[n * width + m]
}
