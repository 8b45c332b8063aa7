use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::error::ScoringError;
use crate::matching::score::average_score;
use crate::types::{SentenceAssessment, TranscriptSource};

const MISSED_WORD_TOP_N: usize = 10;

pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct PracticeReport {
    pub schema_version: u32,
    pub meta: ReportMeta,
    pub sentences: Vec<SentenceOutcome>,
    pub aggregates: AggregateOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub generated_at: String,
    pub profile: String,
    pub case_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentenceOutcome {
    pub id: String,
    pub sentence: String,
    pub source: TranscriptSource,
    pub score: u8,
    pub wrong_words: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateOutcome {
    pub counts: SourceCounts,
    pub average_score: u8,
    pub median_score: u8,
    pub perfect_count: u32,
    pub most_missed: Vec<MissedWord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceCounts {
    pub total: u32,
    pub refined: u32,
    pub live: u32,
    pub missing: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MissedWord {
    pub word: String,
    pub miss_count: u32,
}

pub fn sentence_outcome(
    id: &str,
    sentence: &str,
    assessment: &SentenceAssessment,
) -> SentenceOutcome {
    let wrong_words = assessment
        .words
        .iter()
        .filter(|word| !word.verdict.is_correct())
        .map(|word| word.word.clone())
        .collect();

    SentenceOutcome {
        id: id.to_string(),
        sentence: sentence.to_string(),
        source: assessment.source,
        score: assessment.score,
        wrong_words,
    }
}

pub fn aggregate_outcomes(sentences: &[SentenceOutcome]) -> AggregateOutcome {
    let mut refined = 0usize;
    let mut live = 0usize;
    let mut missing = 0usize;
    for sentence in sentences {
        match sentence.source {
            TranscriptSource::Refined => refined += 1,
            TranscriptSource::Live => live += 1,
            TranscriptSource::Missing => missing += 1,
        }
    }

    let scores: Vec<u8> = sentences.iter().map(|sentence| sentence.score).collect();
    let perfect_count = scores.iter().filter(|&&score| score == 100).count();

    AggregateOutcome {
        counts: SourceCounts {
            total: to_u32(sentences.len()),
            refined: to_u32(refined),
            live: to_u32(live),
            missing: to_u32(missing),
        },
        average_score: average_score(&scores),
        median_score: median_score(&scores),
        perfect_count: to_u32(perfect_count),
        most_missed: most_missed_words(sentences, MISSED_WORD_TOP_N),
    }
}

pub fn build_report(
    profile: &str,
    generated_at: String,
    sentences: Vec<SentenceOutcome>,
) -> PracticeReport {
    let aggregates = aggregate_outcomes(&sentences);
    PracticeReport {
        schema_version: REPORT_SCHEMA_VERSION,
        meta: ReportMeta {
            generated_at,
            profile: profile.to_string(),
            case_count: sentences.len(),
        },
        sentences,
        aggregates,
    }
}

pub fn write_report(path: &Path, report: &PracticeReport) -> Result<(), ScoringError> {
    let mut rendered = serde_json::to_string_pretty(report)
        .map_err(|e| ScoringError::json("serialize practice report", e))?;
    rendered.push('\n');

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| ScoringError::io("create report output directory", e))?;
    }
    std::fs::write(path, rendered).map_err(|e| ScoringError::io("write practice report", e))
}

fn most_missed_words(sentences: &[SentenceOutcome], top_n: usize) -> Vec<MissedWord> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for sentence in sentences {
        for word in &sentence.wrong_words {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<MissedWord> = counts
        .into_iter()
        .map(|(word, miss_count)| MissedWord {
            word: word.to_string(),
            miss_count,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.miss_count
            .cmp(&a.miss_count)
            .then_with(|| a.word.cmp(&b.word))
    });
    entries.truncate(top_n);
    entries
}

fn median_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let mut sorted = scores.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        ((u32::from(sorted[mid - 1]) + u32::from(sorted[mid])) as f64 / 2.0).round() as u8
    } else {
        sorted[mid]
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
