use std::time::Duration;

/// What the live recognizer reported, stripped down to the values the
/// session cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerEvent {
    /// Full text recognized so far in the running segment. Each snapshot
    /// replaces the previous one.
    Snapshot { text: String },
    SpeechEnded,
    Error { code: String },
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Fatal,
    Recoverable,
}

/// Permission and device failures cannot be fixed by restarting; every
/// other code, known or not, keeps the restart loop alive.
pub fn classify_error(code: &str) -> ErrorClass {
    match code {
        "not-allowed" | "audio-capture" | "service-not-allowed" => ErrorClass::Fatal,
        _ => ErrorClass::Recoverable,
    }
}

/// What the orchestrator should do after feeding an event to the
/// session. Timer durations ride along so the session never has to run
/// a clock itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    None,
    /// Refresh the word highlight from `transcript` and re-arm the
    /// silence deadline.
    UpdateHighlight { transcript: String, silence: Duration },
    /// Re-arm the silence deadline without new text.
    ArmSilence { silence: Duration },
    /// Start the recognizer again.
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_and_device_codes_are_fatal() {
        for code in ["not-allowed", "audio-capture", "service-not-allowed"] {
            assert_eq!(classify_error(code), ErrorClass::Fatal);
        }
    }

    #[test]
    fn expected_noise_codes_are_recoverable() {
        for code in ["no-speech", "aborted"] {
            assert_eq!(classify_error(code), ErrorClass::Recoverable);
        }
    }

    #[test]
    fn unknown_codes_are_recoverable() {
        assert_eq!(classify_error("network"), ErrorClass::Recoverable);
        assert_eq!(classify_error(""), ErrorClass::Recoverable);
    }
}
