pub mod config;
pub mod error;
pub mod matching;
pub mod pipeline;
pub mod session;
pub mod types;

pub use config::{ScoringConfig, ScoringProfile};
pub use error::ScoringError;
pub use matching::report::{PracticeReport, SentenceOutcome};
pub use matching::word_check::check_word;
pub use pipeline::builder::PronunciationScorerBuilder;
pub use pipeline::runtime::PronunciationScorer;
pub use pipeline::traits::{Normalizer, SequenceMatcher, TokenMatcher};
pub use session::attempt::PracticeSession;
pub use session::events::{Directive, RecognizerEvent};
pub use session::policy::SessionPolicy;
pub use types::{
    FinalTranscripts, SentenceAssessment, TargetWord, TranscriptSource, WordAssessment,
    WordCheck, WordVerdict,
};
