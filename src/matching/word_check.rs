use crate::config::ScoringConfig;
use crate::matching::normalize;
use crate::types::{WordCheck, WordVerdict};

/// Checks one practiced word against what the learner said.
///
/// Containment rather than alignment: recognizers hand back whole
/// phrases ("the concern" for "concern"), so either side containing the
/// other counts, as long as something was actually heard.
pub fn check_word(target: &str, spoken: &str, config: &ScoringConfig) -> WordCheck {
    let target_clean = normalize::phrase(target, config);
    let heard = normalize::phrase(spoken, config);

    let correct = !heard.is_empty()
        && (heard == target_clean
            || heard.contains(&target_clean)
            || target_clean.contains(&heard));

    if correct {
        return WordCheck {
            verdict: WordVerdict::Correct,
            heard,
            tip: None,
        };
    }

    let tip = if heard.is_empty() {
        "No speech detected. Please try again.".to_string()
    } else {
        format!("Try saying \"{target_clean}\" instead of \"{heard}\".")
    };
    WordCheck {
        verdict: WordVerdict::Wrong,
        heard,
        tip: Some(tip),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScoringConfig {
        ScoringConfig::word_check()
    }

    #[test]
    fn exact_word_is_correct() {
        let check = check_word("concern", "concern", &config());
        assert_eq!(check.verdict, WordVerdict::Correct);
        assert_eq!(check.heard, "concern");
        assert!(check.tip.is_none());
    }

    #[test]
    fn spoken_phrase_containing_the_target_is_correct() {
        let check = check_word("concern", "the concern", &config());
        assert_eq!(check.verdict, WordVerdict::Correct);
        assert_eq!(check.heard, "the concern");
    }

    #[test]
    fn spoken_fragment_of_the_target_is_correct() {
        let check = check_word("concerning", "concern", &config());
        assert_eq!(check.verdict, WordVerdict::Correct);
    }

    #[test]
    fn comparison_ignores_case_and_punctuation() {
        let check = check_word("Point;", "POINT.", &config());
        assert_eq!(check.verdict, WordVerdict::Correct);
        assert_eq!(check.heard, "point");
    }

    #[test]
    fn apostrophes_survive_the_word_check_preset() {
        // "that's" and "thats" differ under this preset; neither contains
        // the other, so the attempt is judged wrong.
        let check = check_word("that's", "thats", &config());
        assert_eq!(check.verdict, WordVerdict::Wrong);
    }

    #[test]
    fn wrong_word_gets_a_retry_tip() {
        let check = check_word("concern", "corn", &config());
        assert_eq!(check.verdict, WordVerdict::Wrong);
        assert_eq!(check.heard, "corn");
        assert_eq!(
            check.tip.as_deref(),
            Some("Try saying \"concern\" instead of \"corn\".")
        );
    }

    #[test]
    fn silence_gets_the_no_speech_tip() {
        let check = check_word("concern", "   ", &config());
        assert_eq!(check.verdict, WordVerdict::Wrong);
        assert!(check.heard.is_empty());
        assert_eq!(
            check.tip.as_deref(),
            Some("No speech detected. Please try again.")
        );
    }

    #[test]
    fn punctuation_only_speech_counts_as_silence() {
        let check = check_word("concern", "...", &config());
        assert_eq!(check.verdict, WordVerdict::Wrong);
        assert_eq!(
            check.tip.as_deref(),
            Some("No speech detected. Please try again.")
        );
    }
}
