//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions, or
/// substitutions turning `a` into `b`. Operates on `char`s.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows over `b`
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Returns the distance when it is at most `limit`, `None` otherwise.
///
/// Skips the full computation when the length difference alone exceeds
/// the limit.
pub fn levenshtein_within(a: &str, b: &str, limit: usize) -> Option<usize> {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a.abs_diff(len_b) > limit {
        return None;
    }
    let distance = levenshtein(a, b);
    (distance <= limit).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(levenshtein("punished", "punished"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn empty_side_costs_full_length() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abcd", ""), 4);
    }

    #[test]
    fn classic_examples() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("humilation", "humiliation"), 1);
        assert_eq!(levenshtein("femanized", "feminized"), 1);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(
            levenshtein("learnig to be a women", "learning to be a woman"),
            levenshtein("learning to be a woman", "learnig to be a women")
        );
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
    }

    #[test]
    fn within_respects_limit() {
        assert_eq!(levenshtein_within("hormone", "hormones", 2), Some(1));
        assert_eq!(levenshtein_within("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_within("abc", "abcdefgh", 2), None);
    }
}
