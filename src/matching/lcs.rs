use std::collections::BTreeSet;

use crate::config::ScoringConfig;
use crate::matching::similarity::tokens_similar;

/// Longest common subsequence over word tokens, with a caller-supplied
/// similarity predicate instead of strict equality.
///
/// Returns the set of target indices that participate in the best
/// alignment. Order is preserved on both sides, so a word spoken out of
/// position does not count, and a missed word never cascades into its
/// neighbours.
pub fn match_indices_by<F>(target: &[String], spoken: &[String], similar: F) -> BTreeSet<usize>
where
    F: Fn(&str, &str) -> bool,
{
    let n = target.len();
    let m = spoken.len();
    if n == 0 || m == 0 {
        return BTreeSet::new();
    }

    let cols = m + 1;
    let mut dp = vec![0u32; (n + 1) * cols];

    for i in 1..=n {
        for j in 1..=m {
            dp[i * cols + j] = if similar(&target[i - 1], &spoken[j - 1]) {
                dp[(i - 1) * cols + (j - 1)] + 1
            } else {
                dp[(i - 1) * cols + j].max(dp[i * cols + (j - 1)])
            };
        }
    }

    let mut matched = BTreeSet::new();
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        if similar(&target[i - 1], &spoken[j - 1]) {
            matched.insert(i - 1);
            i -= 1;
            j -= 1;
        } else if dp[(i - 1) * cols + j] >= dp[i * cols + (j - 1)] {
            // Ties step the target side. Which word of a transposed pair
            // gets credit hinges on this, and it shows up in the highlight,
            // so the choice has to stay deterministic.
            i -= 1;
        } else {
            j -= 1;
        }
    }
    matched
}

/// Aligns target tokens against spoken tokens using the configured
/// fuzzy similarity gate.
pub fn match_target_indices(
    target: &[String],
    spoken: &[String],
    config: &ScoringConfig,
) -> BTreeSet<usize> {
    match_indices_by(target, spoken, |a, b| tokens_similar(a, b, config))
}
