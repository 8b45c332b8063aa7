use crate::pipeline::runtime::PronunciationScorer;
use crate::session::events::{classify_error, Directive, ErrorClass, RecognizerEvent};
use crate::session::policy::SessionPolicy;
use crate::session::transcript::TranscriptAccumulator;
use crate::types::{FinalTranscripts, SentenceAssessment};

/// State for one recording attempt: the transcript buffers, the restart
/// budget, and whether a fatal recognizer error has occurred.
///
/// The session owns no recognizer, timer, or thread. The orchestrator
/// feeds it [`RecognizerEvent`] values and acts on the returned
/// [`Directive`].
#[derive(Debug)]
pub struct PracticeSession {
    transcript: TranscriptAccumulator,
    policy: SessionPolicy,
    restarts_used: u32,
    fatal: bool,
}

impl PracticeSession {
    pub fn new(policy: SessionPolicy) -> Self {
        Self {
            transcript: TranscriptAccumulator::new(),
            policy,
            restarts_used: 0,
            fatal: false,
        }
    }

    pub fn policy(&self) -> &SessionPolicy {
        &self.policy
    }

    pub fn apply(&mut self, event: RecognizerEvent) -> Directive {
        match event {
            RecognizerEvent::Snapshot { text } => {
                if self.transcript.is_paused() {
                    return Directive::None;
                }
                self.transcript.record_snapshot(text);
                Directive::UpdateHighlight {
                    transcript: self.transcript.full_text(),
                    silence: self.policy.silence_after_result(),
                }
            }
            RecognizerEvent::SpeechEnded => {
                if self.transcript.is_paused() {
                    return Directive::None;
                }
                Directive::ArmSilence {
                    silence: self.policy.silence_after_speech(),
                }
            }
            RecognizerEvent::Error { code } => {
                match classify_error(&code) {
                    ErrorClass::Fatal => {
                        self.fatal = true;
                        tracing::warn!(
                            code = code.as_str(),
                            "fatal recognizer error; restarts stop"
                        );
                    }
                    ErrorClass::Recoverable => {
                        tracing::debug!(
                            code = code.as_str(),
                            "ignoring recoverable recognizer error"
                        );
                    }
                }
                Directive::None
            }
            RecognizerEvent::Ended => {
                self.transcript.commit_segment();
                if self.fatal {
                    return Directive::None;
                }
                if self.restarts_used >= self.policy.max_restarts {
                    tracing::warn!(
                        restarts = self.restarts_used,
                        "restart budget exhausted; waiting for finalization"
                    );
                    return Directive::None;
                }
                self.restarts_used += 1;
                Directive::Restart
            }
        }
    }

    /// Pausing keeps the recognizer's restart loop running; its results
    /// are simply discarded until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        self.transcript.pause();
    }

    pub fn resume(&mut self) {
        self.transcript.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.transcript.is_paused()
    }

    pub fn fatal_error(&self) -> bool {
        self.fatal
    }

    /// Everything heard so far, for live display.
    pub fn live_transcript(&self) -> String {
        self.transcript.full_text()
    }

    /// Ends the attempt, pairing the refined transcript (if any) with
    /// whatever the live recognizer heard. Consumes the session, so an
    /// attempt can only be finalized once.
    pub fn finalize(self, refined: Option<String>) -> FinalTranscripts {
        let live = self.transcript.full_text();
        FinalTranscripts {
            refined,
            live: (!live.is_empty()).then_some(live),
        }
    }

    /// Ends the attempt and scores it in one step.
    pub fn finalize_with(
        self,
        scorer: &PronunciationScorer,
        sentence: &str,
        refined: Option<String>,
    ) -> SentenceAssessment {
        let transcripts = self.finalize(refined);
        scorer.assess_final(sentence, &transcripts)
    }
}

impl Default for PracticeSession {
    fn default() -> Self {
        Self::new(SessionPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::ScoringConfig;
    use crate::pipeline::builder::PronunciationScorerBuilder;
    use crate::types::TranscriptSource;

    use super::*;

    fn snapshot(text: &str) -> RecognizerEvent {
        RecognizerEvent::Snapshot {
            text: text.to_string(),
        }
    }

    fn error(code: &str) -> RecognizerEvent {
        RecognizerEvent::Error {
            code: code.to_string(),
        }
    }

    #[test]
    fn snapshot_updates_highlight_and_rearms_silence() {
        let mut session = PracticeSession::default();
        let directive = session.apply(snapshot("good morning"));
        assert_eq!(
            directive,
            Directive::UpdateHighlight {
                transcript: "good morning".to_string(),
                silence: Duration::from_millis(2_500),
            }
        );
    }

    #[test]
    fn speech_end_rearms_the_shorter_deadline() {
        let mut session = PracticeSession::default();
        session.apply(snapshot("good"));
        let directive = session.apply(RecognizerEvent::SpeechEnded);
        assert_eq!(
            directive,
            Directive::ArmSilence {
                silence: Duration::from_millis(2_000),
            }
        );
    }

    #[test]
    fn paused_session_discards_speech_events() {
        let mut session = PracticeSession::default();
        session.apply(snapshot("good morning"));
        session.pause();
        assert_eq!(session.apply(snapshot("ignored")), Directive::None);
        assert_eq!(session.apply(RecognizerEvent::SpeechEnded), Directive::None);
        assert_eq!(session.live_transcript(), "good morning");
    }

    #[test]
    fn resume_extends_the_transcript() {
        let mut session = PracticeSession::default();
        session.apply(snapshot("good morning"));
        session.pause();
        session.resume();
        let directive = session.apply(snapshot("everyone"));
        assert_eq!(
            directive,
            Directive::UpdateHighlight {
                transcript: "good morning everyone".to_string(),
                silence: Duration::from_millis(2_500),
            }
        );
    }

    #[test]
    fn ended_restarts_and_keeps_the_segment_text() {
        let mut session = PracticeSession::default();
        session.apply(snapshot("good morning"));
        assert_eq!(session.apply(RecognizerEvent::Ended), Directive::Restart);
        // The restarted recognizer reports a fresh result list.
        session.apply(snapshot("everyone"));
        assert_eq!(session.live_transcript(), "good morning everyone");
    }

    #[test]
    fn ended_restarts_even_while_paused() {
        let mut session = PracticeSession::default();
        session.pause();
        assert_eq!(session.apply(RecognizerEvent::Ended), Directive::Restart);
    }

    #[test]
    fn recoverable_errors_do_not_stop_the_loop() {
        let mut session = PracticeSession::default();
        assert_eq!(session.apply(error("no-speech")), Directive::None);
        assert_eq!(session.apply(error("network")), Directive::None);
        assert!(!session.fatal_error());
        assert_eq!(session.apply(RecognizerEvent::Ended), Directive::Restart);
    }

    #[test]
    fn fatal_errors_stop_the_loop() {
        let mut session = PracticeSession::default();
        assert_eq!(session.apply(error("not-allowed")), Directive::None);
        assert!(session.fatal_error());
        assert_eq!(session.apply(RecognizerEvent::Ended), Directive::None);
    }

    #[test]
    fn restart_budget_is_enforced() {
        let policy = SessionPolicy {
            max_restarts: 2,
            ..SessionPolicy::default()
        };
        let mut session = PracticeSession::new(policy);
        assert_eq!(session.apply(RecognizerEvent::Ended), Directive::Restart);
        assert_eq!(session.apply(RecognizerEvent::Ended), Directive::Restart);
        assert_eq!(session.apply(RecognizerEvent::Ended), Directive::None);
    }

    #[test]
    fn finalize_pairs_refined_with_the_live_text() {
        let mut session = PracticeSession::default();
        session.apply(snapshot("good morning"));
        let transcripts = session.finalize(Some("good morning everyone".to_string()));
        assert_eq!(transcripts.refined.as_deref(), Some("good morning everyone"));
        assert_eq!(transcripts.live.as_deref(), Some("good morning"));
    }

    #[test]
    fn finalize_with_nothing_heard_leaves_live_empty() {
        let session = PracticeSession::default();
        let transcripts = session.finalize(None);
        assert_eq!(transcripts, FinalTranscripts::default());
    }

    #[test]
    fn finalize_with_scores_the_attempt() {
        let scorer = PronunciationScorerBuilder::new(ScoringConfig::default())
            .build()
            .expect("default config is valid");

        let mut session = PracticeSession::default();
        session.apply(snapshot("good morning"));
        let assessment = session.finalize_with(&scorer, "Good morning", None);
        assert_eq!(assessment.source, TranscriptSource::Live);
        assert_eq!(assessment.score, 100);

        let silent = PracticeSession::default();
        let assessment = silent.finalize_with(&scorer, "Good morning", None);
        assert_eq!(assessment.source, TranscriptSource::Missing);
        assert_eq!(assessment.score, 100);
    }
}
