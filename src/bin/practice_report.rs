use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use speakscore::matching::report::{self, PracticeReport};
use speakscore::{FinalTranscripts, PronunciationScorerBuilder, ScoringConfig, ScoringProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "practice_report")]
#[command(about = "Score recorded practice attempts and emit a deterministic report")]
struct Args {
    #[arg(
        long,
        env = "SPEAKSCORE_REPORT_CASES",
        default_value = "test-data/scoring/attempts.json"
    )]
    cases: PathBuf,
    #[arg(long, env = "SPEAKSCORE_REPORT_PROFILE")]
    profile: Option<PathBuf>,
    #[arg(long, env = "SPEAKSCORE_REPORT_OUT")]
    out: Option<PathBuf>,
    #[arg(long, env = "SPEAKSCORE_REPORT_LIMIT")]
    limit: Option<usize>,
    #[arg(
        long,
        env = "SPEAKSCORE_REPORT_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Json
    )]
    output_format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
struct AttemptCase {
    id: String,
    sentence: String,
    #[serde(default)]
    refined: Option<String>,
    #[serde(default)]
    live: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let repo_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let cases_path = resolve_input(&repo_root, &args.cases, "Attempts file")?;

    let (profile_label, config) = match args.profile.as_ref() {
        Some(path) => {
            let profile_path = resolve_input(&repo_root, path, "Scoring profile")?;
            let profile = ScoringProfile::load(&profile_path)
                .map_err(|err| format!("Failed to load scoring profile: {err}"))?;
            (profile_path.display().to_string(), profile.into_config())
        }
        None => ("default".to_string(), ScoringConfig::default()),
    };

    let scorer = PronunciationScorerBuilder::new(config)
        .build()
        .map_err(|err| format!("Failed to build PronunciationScorer: {err}"))?;

    let mut cases = load_cases(&cases_path)?;
    if let Some(limit) = args.limit {
        cases.truncate(limit);
    }
    if cases.is_empty() {
        return Err("No attempts selected after applying --limit.".to_string());
    }

    let progress = ProgressBar::new(cases.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );
    progress.set_message("starting...");

    let mut sentences = Vec::with_capacity(cases.len());
    for case in &cases {
        progress.set_message(case.id.clone());
        let transcripts = FinalTranscripts {
            refined: case.refined.clone(),
            live: case.live.clone(),
        };
        let assessment = scorer.assess_final(&case.sentence, &transcripts);
        sentences.push(report::sentence_outcome(
            &case.id,
            &case.sentence,
            &assessment,
        ));
        progress.inc(1);
    }
    progress.finish_with_message("scoring pass complete");

    let practice_report = report::build_report(&profile_label, Utc::now().to_rfc3339(), sentences);

    match args.output_format {
        OutputFormat::Json => {
            let out_path = resolve_out_path(&repo_root, args.out.as_ref());
            report::write_report(&out_path, &practice_report).map_err(|err| {
                format!("Failed to write report to '{}': {err}", out_path.display())
            })?;
            println!("{}", out_path.display());
        }
        OutputFormat::Text => print_text_summary(&practice_report),
    }

    Ok(())
}

fn load_cases(path: &Path) -> Result<Vec<AttemptCase>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read attempts file '{}': {err}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|err| format!("Failed to parse attempts file '{}': {err}", path.display()))
}

fn print_text_summary(practice_report: &PracticeReport) {
    for sentence in &practice_report.sentences {
        println!(
            "attempt id={} source={} score={}",
            sentence.id,
            sentence.source.as_str(),
            sentence.score
        );
        if !sentence.wrong_words.is_empty() {
            println!("  missed: {}", sentence.wrong_words.join(", "));
        }
    }

    let aggregates = &practice_report.aggregates;
    println!(
        "attempts: {} (refined {}, live {}, missing {})",
        aggregates.counts.total,
        aggregates.counts.refined,
        aggregates.counts.live,
        aggregates.counts.missing
    );
    println!(
        "average score: {} median score: {} perfect: {}",
        aggregates.average_score, aggregates.median_score, aggregates.perfect_count
    );
    for missed in &aggregates.most_missed {
        println!("  most missed: {} ({}x)", missed.word, missed.miss_count);
    }
}

fn resolve_out_path(repo_root: &Path, out: Option<&PathBuf>) -> PathBuf {
    match out {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => repo_root.join(path),
        None => {
            let run_id = Utc::now().format("%Y%m%dT%H%M%SZ");
            repo_root
                .join("target")
                .join("practice_reports")
                .join(format!("practice-report-{run_id}.json"))
        }
    }
}

fn resolve_input(repo_root: &Path, path: &Path, what: &str) -> Result<PathBuf, String> {
    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo_root.join(path)
    };
    if !resolved.exists() {
        return Err(format!("{what} not found at '{}'.", resolved.display()));
    }
    Ok(resolved)
}
