use std::path::Path;

use crate::error::ScoringError;

/// Tunables shared by normalization and fuzzy token matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Characters removed before text is tokenized or compared.
    pub punctuation: Vec<char>,
    /// Tokens at or under this length must match exactly.
    pub exact_only_max_len: usize,
    /// Longest token length still limited to `near_distance` edits.
    pub near_max_len: usize,
    /// Edit distance allowed for tokens up to `near_max_len`.
    pub near_distance: usize,
    /// Edit distance allowed for longer tokens.
    pub far_distance: usize,
}

impl ScoringConfig {
    /// Strip set used when scoring whole sentences.
    pub const SENTENCE_PUNCTUATION: &'static [char] = &['.', ',', '!', '?', '—', '\'', '"'];
    /// Strip set used when checking a single word. Keeps apostrophes so
    /// contractions survive for display.
    pub const WORD_CHECK_PUNCTUATION: &'static [char] = &['.', ',', '!', '?', ';', ':'];

    pub const DEFAULT_EXACT_ONLY_MAX_LEN: usize = 2;
    pub const DEFAULT_NEAR_MAX_LEN: usize = 6;
    pub const DEFAULT_NEAR_DISTANCE: usize = 1;
    pub const DEFAULT_FAR_DISTANCE: usize = 2;

    pub fn sentence_practice() -> Self {
        Self::default()
    }

    pub fn word_check() -> Self {
        Self {
            punctuation: Self::WORD_CHECK_PUNCTUATION.to_vec(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.near_distance > self.far_distance {
            return Err(ScoringError::invalid_config(format!(
                "near_distance ({}) exceeds far_distance ({})",
                self.near_distance, self.far_distance
            )));
        }
        if self.exact_only_max_len > self.near_max_len {
            return Err(ScoringError::invalid_config(format!(
                "exact_only_max_len ({}) exceeds near_max_len ({})",
                self.exact_only_max_len, self.near_max_len
            )));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            punctuation: Self::SENTENCE_PUNCTUATION.to_vec(),
            exact_only_max_len: Self::DEFAULT_EXACT_ONLY_MAX_LEN,
            near_max_len: Self::DEFAULT_NEAR_MAX_LEN,
            near_distance: Self::DEFAULT_NEAR_DISTANCE,
            far_distance: Self::DEFAULT_FAR_DISTANCE,
        }
    }
}

/// File-loadable form of [`ScoringConfig`]. Every field is optional; absent
/// fields fall back to the sentence-practice defaults.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ScoringProfile {
    #[serde(default = "default_punctuation")]
    pub punctuation: String,
    #[serde(default = "default_exact_only_max_len")]
    pub exact_only_max_len: usize,
    #[serde(default = "default_near_max_len")]
    pub near_max_len: usize,
    #[serde(default = "default_near_distance")]
    pub near_distance: usize,
    #[serde(default = "default_far_distance")]
    pub far_distance: usize,
}

fn default_punctuation() -> String {
    ScoringConfig::SENTENCE_PUNCTUATION.iter().collect()
}
fn default_exact_only_max_len() -> usize {
    ScoringConfig::DEFAULT_EXACT_ONLY_MAX_LEN
}
fn default_near_max_len() -> usize {
    ScoringConfig::DEFAULT_NEAR_MAX_LEN
}
fn default_near_distance() -> usize {
    ScoringConfig::DEFAULT_NEAR_DISTANCE
}
fn default_far_distance() -> usize {
    ScoringConfig::DEFAULT_FAR_DISTANCE
}

impl ScoringProfile {
    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ScoringError::io("read scoring profile", e))?;
        let profile: Self = serde_json::from_str(&data)
            .map_err(|e| ScoringError::json("parse scoring profile", e))?;
        profile.clone().into_config().validate()?;
        Ok(profile)
    }

    pub fn into_config(self) -> ScoringConfig {
        ScoringConfig {
            punctuation: self.punctuation.chars().collect(),
            exact_only_max_len: self.exact_only_max_len,
            near_max_len: self.near_max_len,
            near_distance: self.near_distance,
            far_distance: self.far_distance,
        }
    }
}
