use std::collections::BTreeSet;

use crate::matching::score::sentence_score;
use crate::pipeline::traits::{Normalizer, SequenceMatcher, TokenMatcher};
use crate::types::{
    FinalTranscripts, SentenceAssessment, TargetWord, TranscriptSource, WordAssessment,
    WordVerdict,
};

pub struct PronunciationScorer {
    normalizer: Box<dyn Normalizer>,
    token_matcher: Box<dyn TokenMatcher>,
    sequence_matcher: Box<dyn SequenceMatcher>,
}

pub(crate) struct PronunciationScorerParts {
    pub normalizer: Box<dyn Normalizer>,
    pub token_matcher: Box<dyn TokenMatcher>,
    pub sequence_matcher: Box<dyn SequenceMatcher>,
}

impl PronunciationScorer {
    pub(crate) fn from_parts(parts: PronunciationScorerParts) -> Self {
        Self {
            normalizer: parts.normalizer,
            token_matcher: parts.token_matcher,
            sequence_matcher: parts.sequence_matcher,
        }
    }

    /// Matched target indices for an in-flight transcript snapshot.
    /// Drives word highlighting while the learner is still speaking.
    pub fn live_matches(&self, sentence: &str, transcript: &str) -> BTreeSet<usize> {
        let target = self.normalizer.target_words(sentence);
        if target.is_empty() {
            return BTreeSet::new();
        }
        let spoken = self.normalizer.spoken_tokens(transcript);
        if spoken.is_empty() {
            return BTreeSet::new();
        }
        self.matched(&target, &spoken)
    }

    /// Scores a finished attempt. Prefers the refined transcript, falls
    /// back to the live one, and with neither available marks every word
    /// correct instead of failing the learner over a capture problem.
    pub fn assess_final(
        &self,
        sentence: &str,
        transcripts: &FinalTranscripts,
    ) -> SentenceAssessment {
        let target = self.normalizer.target_words(sentence);

        if let Some(refined) = non_blank(transcripts.refined.as_deref()) {
            return self.assess_with(&target, refined, TranscriptSource::Refined);
        }
        if let Some(live) = non_blank(transcripts.live.as_deref()) {
            return self.assess_with(&target, live, TranscriptSource::Live);
        }

        tracing::warn!(
            target_words = target.len(),
            "no transcript captured; treating every word as correct"
        );
        assume_fully_correct(&target)
    }

    fn assess_with(
        &self,
        target: &[TargetWord],
        transcript: &str,
        source: TranscriptSource,
    ) -> SentenceAssessment {
        let spoken = self.normalizer.spoken_tokens(transcript);
        let matched = if target.is_empty() || spoken.is_empty() {
            BTreeSet::new()
        } else {
            self.matched(target, &spoken)
        };

        let words: Vec<WordAssessment> = target
            .iter()
            .enumerate()
            .map(|(index, word)| WordAssessment {
                word: word.display.clone(),
                verdict: if matched.contains(&index) {
                    WordVerdict::Correct
                } else {
                    WordVerdict::Wrong
                },
            })
            .collect();
        let score = sentence_score(&words);

        tracing::debug!(
            source = source.as_str(),
            score,
            matched = matched.len(),
            total = words.len(),
            "scored attempt"
        );

        SentenceAssessment {
            words,
            matched,
            score,
            source,
        }
    }

    fn matched(&self, target: &[TargetWord], spoken: &[String]) -> BTreeSet<usize> {
        let tokens: Vec<String> = target.iter().map(|word| word.token.clone()).collect();
        self.sequence_matcher
            .matched_indices(&tokens, spoken, self.token_matcher.as_ref())
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.and_then(|t| (!t.trim().is_empty()).then_some(t))
}

fn assume_fully_correct(target: &[TargetWord]) -> SentenceAssessment {
    let words: Vec<WordAssessment> = target
        .iter()
        .map(|word| WordAssessment {
            word: word.display.clone(),
            verdict: WordVerdict::Correct,
        })
        .collect();
    let matched: BTreeSet<usize> = (0..words.len()).collect();
    let score = sentence_score(&words);
    SentenceAssessment {
        words,
        matched,
        score,
        source: TranscriptSource::Missing,
    }
}
