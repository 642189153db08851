//! Longest common substring

/// Length (in chars) of the longest contiguous run shared by `a` and `b`.
///
/// Each table cell holds the length of the common run ending at
/// `a[i - 1]` and `b[j - 1]`; the answer is the largest cell.
pub fn longest_common_substring(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let width = b.len() + 1;
    let mut suffix = vec![0usize; (a.len() + 1) * width];
    let mut longest = 0;

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            if a[i - 1] == b[j - 1] {
                let run = suffix[(i - 1) * width + j - 1] + 1;
                suffix[i * width + j] = run;
                longest = longest.max(run);
            }
        }
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs() {
        assert_eq!(longest_common_substring("", ""), 0);
        assert_eq!(longest_common_substring("", "abc"), 0);
        assert_eq!(longest_common_substring("abc", ""), 0);
    }

    #[test]
    fn contiguous_only() {
        // "ace" is a common subsequence of length 3, but no run is longer than 1
        assert_eq!(longest_common_substring("abcde", "ace"), 1);
    }

    #[test]
    fn finds_longest_run() {
        assert_eq!(longest_common_substring("the quick fox", "quickly"), 5);
        assert_eq!(longest_common_substring("xabcdy", "zzabcdzz"), 4);
    }

    #[test]
    fn no_overlap() {
        assert_eq!(longest_common_substring("abc", "xyz"), 0);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(longest_common_substring("Fox", "fox"), 2);
    }

    #[test]
    fn symmetric() {
        let pairs = [("rusty nail", "trusty"), ("banana", "ananas"), ("a", "b")];
        for (a, b) in pairs {
            assert_eq!(
                longest_common_substring(a, b),
                longest_common_substring(b, a),
                "{a} / {b}"
            );
        }
    }
}
