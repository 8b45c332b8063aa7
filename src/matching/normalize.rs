use crate::config::ScoringConfig;
use crate::types::TargetWord;

/// Lowercase `text`, strip configured punctuation, split on whitespace runs.
/// Total: every input, including the empty string, yields a valid (possibly
/// empty) token list.
pub fn tokens(text: &str, config: &ScoringConfig) -> Vec<String> {
    let mut cleaned = text.to_lowercase();
    cleaned.retain(|c| !config.punctuation.contains(&c));
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Target-side tokenization. Keeps the display form of each sentence word
/// next to its normalized token; words that normalize to nothing (pure
/// punctuation) produce no target word.
pub fn target_words(sentence: &str, config: &ScoringConfig) -> Vec<TargetWord> {
    sentence
        .split_whitespace()
        .filter_map(|display| {
            let token = clean_word(display, config);
            if token.is_empty() {
                return None;
            }
            Some(TargetWord {
                display: display.to_string(),
                token,
            })
        })
        .collect()
}

/// Collapse `text` to one comparable string without splitting, so a
/// multi-word utterance can still contain a single target word.
pub fn phrase(text: &str, config: &ScoringConfig) -> String {
    let mut cleaned = text.to_lowercase();
    cleaned.retain(|c| !config.punctuation.contains(&c));
    cleaned.trim().to_string()
}

fn clean_word(word: &str, config: &ScoringConfig) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| !config.punctuation.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_config() -> ScoringConfig {
        ScoringConfig::sentence_practice()
    }

    #[test]
    fn strips_punctuation_and_lowercases() {
        let out = tokens("That's a fair point,", &sentence_config());
        assert_eq!(out, ["thats", "a", "fair", "point"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(tokens("", &sentence_config()).is_empty());
        assert!(tokens("   ", &sentence_config()).is_empty());
    }

    #[test]
    fn whitespace_runs_collapse() {
        let out = tokens("hello   world\tagain", &sentence_config());
        assert_eq!(out, ["hello", "world", "again"]);
    }

    #[test]
    fn punctuation_only_words_disappear() {
        let out = tokens("well — yes", &sentence_config());
        assert_eq!(out, ["well", "yes"]);
    }

    #[test]
    fn em_dash_inside_word_is_removed() {
        let out = tokens("well—yes", &sentence_config());
        assert_eq!(out, ["wellyes"]);
    }

    #[test]
    fn word_check_preset_keeps_apostrophes() {
        let out = tokens("Don't stop;", &ScoringConfig::word_check());
        assert_eq!(out, ["don't", "stop"]);
    }

    #[test]
    fn target_words_keep_display_forms() {
        let out = target_words("That's a fair point,", &sentence_config());
        let displays: Vec<&str> = out.iter().map(|w| w.display.as_str()).collect();
        let tokens: Vec<&str> = out.iter().map(|w| w.token.as_str()).collect();
        assert_eq!(displays, ["That's", "a", "fair", "point,"]);
        assert_eq!(tokens, ["thats", "a", "fair", "point"]);
    }

    #[test]
    fn target_words_drop_punctuation_only_entries() {
        let out = target_words("wait — listen", &sentence_config());
        let tokens: Vec<&str> = out.iter().map(|w| w.token.as_str()).collect();
        assert_eq!(tokens, ["wait", "listen"]);
    }

    #[test]
    fn target_tokens_agree_with_sentence_tokens() {
        let sentence = "Could you — maybe — say that again?";
        let config = sentence_config();
        let from_targets: Vec<String> = target_words(sentence, &config)
            .into_iter()
            .map(|w| w.token)
            .collect();
        assert_eq!(from_targets, tokens(sentence, &config));
    }

    #[test]
    fn phrase_trims_without_splitting() {
        let out = phrase("  The Word!  ", &ScoringConfig::word_check());
        assert_eq!(out, "the word");
    }

    #[test]
    fn phrase_of_nothing_is_empty() {
        assert_eq!(phrase(" ... ", &sentence_config()), "");
    }
}
