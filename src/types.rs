use std::collections::BTreeSet;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordVerdict {
    Correct,
    Wrong,
}

impl WordVerdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Wrong => "wrong",
        }
    }
}

/// Target-side token paired with the word as written in the sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    /// Word exactly as it appears in the sentence (what the UI renders).
    pub display: String,
    /// Normalized comparison form. Never empty; sentence words that
    /// normalize to nothing produce no target word at all.
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordAssessment {
    pub word: String,
    pub verdict: WordVerdict,
}

/// Which transcript the final verdict was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptSource {
    /// Higher-accuracy asynchronous transcription of the captured audio.
    Refined,
    /// Text accumulated from the live recognizer during capture.
    Live,
    /// No transcript of any kind was available at finalization.
    Missing,
}

impl TranscriptSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Refined => "refined",
            Self::Live => "live",
            Self::Missing => "missing",
        }
    }
}

/// Transcripts available when an attempt is finalized. Blank strings count
/// as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalTranscripts {
    pub refined: Option<String>,
    pub live: Option<String>,
}

/// Authoritative result for one practice attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceAssessment {
    /// One entry per target word, in sentence order.
    pub words: Vec<WordAssessment>,
    /// Indices into the target word sequence considered spoken.
    pub matched: BTreeSet<usize>,
    /// Integer percent in [0, 100].
    pub score: u8,
    pub source: TranscriptSource,
}

/// Outcome of a single-word pronunciation check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCheck {
    pub verdict: WordVerdict,
    /// What the recognizer heard, normalized; empty when nothing was detected.
    pub heard: String,
    /// Retry guidance, present only when the verdict is wrong.
    pub tip: Option<String>,
}
