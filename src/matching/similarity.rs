use crate::config::ScoringConfig;

/// Classic Levenshtein distance (substitution, insertion, deletion each
/// cost 1). Runs inside the alignment's nested loop, so it keeps a single
/// rolling row over the shorter input: O(len·len) time, O(min(len)) space.
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        // row[j] transitions from dist(long[..i], short[..j]) to
        // dist(long[..i+1], short[..j]) as j advances; prev carries the
        // diagonal the overwrite would otherwise destroy.
        let mut prev = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            let next = (prev + cost).min(row[j] + 1).min(row[j + 1] + 1);
            prev = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[short.len()]
}

/// Fuzzy equality for one target/spoken token pair. Exact matches always
/// pass; short tokens must be exact so function words like "a" and "on"
/// never blur together; longer tokens tolerate edits proportional to their
/// length.
pub fn tokens_similar(a: &str, b: &str, config: &ScoringConfig) -> bool {
    if a == b {
        return true;
    }
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len <= config.exact_only_max_len || b_len <= config.exact_only_max_len {
        return false;
    }
    let allowed = if a_len.max(b_len) <= config.near_max_len {
        config.near_distance
    } else {
        config.far_distance
    };
    edit_distance(a, b) <= allowed
}
