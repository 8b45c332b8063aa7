/// Transcript buffers for one recording attempt.
///
/// A live recognizer replaces its segment text wholesale on every
/// result event, so the running segment is held apart from text
/// committed by segments that already ended (a pause or a recognizer
/// restart).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptAccumulator {
    accumulated: String,
    current: String,
    paused: bool,
}

impl TranscriptAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest full text of the running segment. Ignored while paused.
    pub fn record_snapshot(&mut self, text: impl Into<String>) {
        if self.paused {
            return;
        }
        self.current = text.into();
    }

    /// Folds the running segment into the committed text. A segment ends
    /// when the recognizer does, whatever the reason.
    pub fn commit_segment(&mut self) {
        self.accumulated = join_trimmed(&self.accumulated, &self.current);
        self.current.clear();
    }

    pub fn pause(&mut self) {
        self.commit_segment();
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.current.clear();
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Everything heard so far, committed and running segments joined.
    pub fn full_text(&self) -> String {
        join_trimmed(&self.accumulated, &self.current)
    }
}

fn join_trimmed(accumulated: &str, current: &str) -> String {
    format!("{accumulated} {current}").trim().to_string()
}
