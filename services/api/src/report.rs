use altscore::advisor::ConfiguredAdvisor;
use altscore::config::AppConfig;
use altscore::error::AppError;
use altscore::import::ProfileImporter;
use altscore::service::ScoreReport;
use altscore::{compute_score, RawProfile, ScoreResult, ScoringService};
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON profile to score; pass `-` to read from stdin
    #[arg(long)]
    pub(crate) profile: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with one applicant per row and profile field names as headers
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = load_profile(&args.profile)?;
    let service = ScoringService::new(Arc::new(ConfiguredAdvisor::from_kind(config.advisor)));

    render_score_report(&service.score(&raw));
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let profiles = ProfileImporter::csv_from_path(&args.input)?;
    let results: Vec<ScoreResult> = profiles.iter().map(compute_score).collect();

    println!("Batch scoring: {}", args.input.display());
    println!(
        "{:>4}  {:>5}  {:<9}  {:>3} {:>3} {:>3} {:>3}",
        "row", "score", "rating", "PH", "FS", "CU", "DR"
    );
    for (index, result) in results.iter().enumerate() {
        let [ph, fs, cu, dr] = result.breakdown.entries().map(|entry| entry.score);
        println!(
            "{:>4}  {:>5}  {:<9}  {:>3} {:>3} {:>3} {:>3}",
            index + 1,
            result.total_score,
            result.rating.label(),
            ph,
            fs,
            cu,
            dr
        );
    }

    let summary = BatchSummary::from_results(&results);
    println!(
        "\n{} profiles scored, {} unscoreable, average {:.1}",
        summary.scored, summary.unscoreable, summary.average_score
    );
    Ok(())
}

fn load_profile(path: &Path) -> Result<RawProfile, AppError> {
    let raw = if path.as_os_str() == "-" {
        ProfileImporter::json_from_reader(std::io::stdin().lock())?
    } else {
        ProfileImporter::json_from_path(path)?
    };
    Ok(raw)
}

pub(crate) fn render_score_report(report: &ScoreReport) {
    let score = &report.score;
    println!("Alternative credit score");
    println!("Total: {} ({})", score.total_score, score.rating);

    println!("\nBreakdown");
    for entry in score.breakdown.entries() {
        println!(
            "- {}: {}/100 (+{:.2} points)",
            entry.label,
            entry.score,
            entry.contribution()
        );
    }

    println!("\nInsights");
    for insight in &report.ai_analysis.insights {
        println!("- {insight}");
    }

    println!("\nRecommendations");
    for recommendation in &report.ai_analysis.recommendations {
        println!(
            "- [{:?}] {} (impact {:?}, difficulty {:?})",
            recommendation.priority,
            recommendation.title,
            recommendation.impact,
            recommendation.difficulty
        );
    }
}

/// Totals printed under the batch table. Fallback results are counted separately and
/// left out of the average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BatchSummary {
    pub(crate) scored: usize,
    pub(crate) unscoreable: usize,
    pub(crate) average_score: f64,
}

impl BatchSummary {
    pub(crate) fn from_results(results: &[ScoreResult]) -> Self {
        let (valid, fallback): (Vec<&ScoreResult>, Vec<&ScoreResult>) =
            results.iter().partition(|result| !result.is_fallback());
        let average_score = if valid.is_empty() {
            0.0
        } else {
            let total: f64 = valid
                .iter()
                .map(|result| f64::from(result.total_score))
                .sum();
            total / valid.len() as f64
        };

        Self {
            scored: valid.len(),
            unscoreable: fallback.len(),
            average_score,
        }
    }
}
