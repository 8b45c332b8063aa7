use std::time::Duration;

/// Timer durations and the restart budget for one recording attempt.
/// The session never runs timers; directives carry these values and the
/// orchestrator arms them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct SessionPolicy {
    /// Silence after the latest result before the attempt finalizes.
    #[serde(default = "default_silence_after_result_ms")]
    pub silence_after_result_ms: u64,
    /// Silence after a speech-end event before the attempt finalizes.
    #[serde(default = "default_silence_after_speech_ms")]
    pub silence_after_speech_ms: u64,
    /// Hard cap on a single attempt.
    #[serde(default = "default_max_attempt_ms")]
    pub max_attempt_ms: u64,
    /// Blind recording window when no live recognizer is available.
    #[serde(default = "default_fallback_capture_ms")]
    pub fallback_capture_ms: u64,
    /// Recognizer restarts allowed within one attempt.
    #[serde(default = "default_max_restarts")]
    pub max_restarts: u32,
}

impl SessionPolicy {
    pub const DEFAULT_SILENCE_AFTER_RESULT_MS: u64 = 2_500;
    pub const DEFAULT_SILENCE_AFTER_SPEECH_MS: u64 = 2_000;
    pub const DEFAULT_MAX_ATTEMPT_MS: u64 = 30_000;
    pub const DEFAULT_FALLBACK_CAPTURE_MS: u64 = 5_000;
    pub const DEFAULT_MAX_RESTARTS: u32 = 8;

    pub fn silence_after_result(&self) -> Duration {
        Duration::from_millis(self.silence_after_result_ms)
    }

    pub fn silence_after_speech(&self) -> Duration {
        Duration::from_millis(self.silence_after_speech_ms)
    }

    pub fn max_attempt(&self) -> Duration {
        Duration::from_millis(self.max_attempt_ms)
    }

    pub fn fallback_capture(&self) -> Duration {
        Duration::from_millis(self.fallback_capture_ms)
    }
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            silence_after_result_ms: Self::DEFAULT_SILENCE_AFTER_RESULT_MS,
            silence_after_speech_ms: Self::DEFAULT_SILENCE_AFTER_SPEECH_MS,
            max_attempt_ms: Self::DEFAULT_MAX_ATTEMPT_MS,
            fallback_capture_ms: Self::DEFAULT_FALLBACK_CAPTURE_MS,
            max_restarts: Self::DEFAULT_MAX_RESTARTS,
        }
    }
}

fn default_silence_after_result_ms() -> u64 {
    SessionPolicy::DEFAULT_SILENCE_AFTER_RESULT_MS
}
fn default_silence_after_speech_ms() -> u64 {
    SessionPolicy::DEFAULT_SILENCE_AFTER_SPEECH_MS
}
fn default_max_attempt_ms() -> u64 {
    SessionPolicy::DEFAULT_MAX_ATTEMPT_MS
}
fn default_fallback_capture_ms() -> u64 {
    SessionPolicy::DEFAULT_FALLBACK_CAPTURE_MS
}
fn default_max_restarts() -> u32 {
    SessionPolicy::DEFAULT_MAX_RESTARTS
}
