use std::collections::BTreeSet;

use crate::types::TargetWord;

pub trait Normalizer: Send + Sync {
    fn target_words(&self, sentence: &str) -> Vec<TargetWord>;

    fn spoken_tokens(&self, transcript: &str) -> Vec<String>;
}

pub trait TokenMatcher: Send + Sync {
    fn similar(&self, target: &str, spoken: &str) -> bool;
}

pub trait SequenceMatcher: Send + Sync {
    fn matched_indices(
        &self,
        target: &[String],
        spoken: &[String],
        matcher: &dyn TokenMatcher,
    ) -> BTreeSet<usize>;
}
