use std::collections::BTreeSet;

use crate::config::ScoringConfig;
use crate::matching::lcs::match_indices_by;
use crate::matching::normalize;
use crate::matching::similarity::tokens_similar;
use crate::pipeline::traits::{Normalizer, SequenceMatcher, TokenMatcher};
use crate::types::TargetWord;

pub struct PunctuationNormalizer {
    config: ScoringConfig,
}

impl PunctuationNormalizer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }
}

impl Normalizer for PunctuationNormalizer {
    fn target_words(&self, sentence: &str) -> Vec<TargetWord> {
        normalize::target_words(sentence, &self.config)
    }

    fn spoken_tokens(&self, transcript: &str) -> Vec<String> {
        normalize::tokens(transcript, &self.config)
    }
}

pub struct EditDistanceMatcher {
    config: ScoringConfig,
}

impl EditDistanceMatcher {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }
}

impl TokenMatcher for EditDistanceMatcher {
    fn similar(&self, target: &str, spoken: &str) -> bool {
        tokens_similar(target, spoken, &self.config)
    }
}

pub struct LcsSequenceMatcher;

impl SequenceMatcher for LcsSequenceMatcher {
    fn matched_indices(
        &self,
        target: &[String],
        spoken: &[String],
        matcher: &dyn TokenMatcher,
    ) -> BTreeSet<usize> {
        match_indices_by(target, spoken, |a, b| matcher.similar(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn punctuation_normalizer_matches_free_functions() {
        let config = ScoringConfig::default();
        let normalizer = PunctuationNormalizer::new(config.clone());
        let sentence = "That's a fair point, isn't it?";
        assert_eq!(
            normalizer.target_words(sentence),
            normalize::target_words(sentence, &config)
        );
        assert_eq!(
            normalizer.spoken_tokens(sentence),
            normalize::tokens(sentence, &config)
        );
    }

    #[test]
    fn edit_distance_matcher_matches_free_function() {
        let config = ScoringConfig::default();
        let matcher = EditDistanceMatcher::new(config.clone());
        for (a, b) in [("hello", "helo"), ("cat", "dog"), ("a", "i")] {
            assert_eq!(matcher.similar(a, b), tokens_similar(a, b, &config));
        }
    }

    #[test]
    fn lcs_sequence_matcher_matches_free_function() {
        let config = ScoringConfig::default();
        let token_matcher = EditDistanceMatcher::new(config.clone());
        let sequence_matcher = LcsSequenceMatcher;
        let target = toks(&["good", "morning", "everyone"]);
        let spoken = toks(&["good", "evening", "everyone"]);
        let via_trait = sequence_matcher.matched_indices(&target, &spoken, &token_matcher);
        let direct = match_indices_by(&target, &spoken, |a, b| tokens_similar(a, b, &config));
        assert_eq!(via_trait, direct);
    }
}
