use crate::types::WordAssessment;

/// Per-sentence score: percentage of target words judged correct,
/// rounded to the nearest whole point.
///
/// An empty target has nothing to get wrong, so it scores 100.
pub fn sentence_score(words: &[WordAssessment]) -> u8 {
    if words.is_empty() {
        return 100;
    }
    let correct = words.iter().filter(|w| w.verdict.is_correct()).count();
    ((correct as f64 / words.len() as f64) * 100.0).round() as u8
}

/// Mean of per-sentence scores, rounded to the nearest whole point.
/// No attempts yet means no credit, not a perfect run.
pub fn average_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    (sum as f64 / scores.len() as f64).round() as u8
}
