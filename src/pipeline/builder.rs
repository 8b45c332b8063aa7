use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::pipeline::defaults::{EditDistanceMatcher, LcsSequenceMatcher, PunctuationNormalizer};
use crate::pipeline::runtime::{PronunciationScorer, PronunciationScorerParts};
use crate::pipeline::traits::{Normalizer, SequenceMatcher, TokenMatcher};

pub struct PronunciationScorerBuilder {
    config: ScoringConfig,
    normalizer: Option<Box<dyn Normalizer>>,
    token_matcher: Option<Box<dyn TokenMatcher>>,
    sequence_matcher: Option<Box<dyn SequenceMatcher>>,
}

impl PronunciationScorerBuilder {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            normalizer: None,
            token_matcher: None,
            sequence_matcher: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn with_token_matcher(mut self, token_matcher: Box<dyn TokenMatcher>) -> Self {
        self.token_matcher = Some(token_matcher);
        self
    }

    pub fn with_sequence_matcher(mut self, sequence_matcher: Box<dyn SequenceMatcher>) -> Self {
        self.sequence_matcher = Some(sequence_matcher);
        self
    }

    pub fn build(self) -> Result<PronunciationScorer, ScoringError> {
        self.config.validate()?;
        let config = self.config;

        Ok(PronunciationScorer::from_parts(PronunciationScorerParts {
            normalizer: self
                .normalizer
                .unwrap_or_else(|| Box::new(PunctuationNormalizer::new(config.clone()))),
            token_matcher: self
                .token_matcher
                .unwrap_or_else(|| Box::new(EditDistanceMatcher::new(config))),
            sequence_matcher: self
                .sequence_matcher
                .unwrap_or_else(|| Box::new(LcsSequenceMatcher)),
        }))
    }
}
