use crate::infra::{load_service, parse_score_arg, resolve_catalog};
use admission_advisor::catalog::CatalogSummary;
use admission_advisor::config::AppConfig;
use admission_advisor::error::AppError;
use admission_advisor::recommend::{RecommendationsView, RequiredExamsView};
use admission_advisor::telemetry;
use admission_advisor::{RecommendationRequest, RecommendationService, RequiredExamsRequest};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct FilterArgs {
    /// Only programs in this city
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// `public` / `private` (or the Georgian labels)
    #[arg(long)]
    pub(crate) institution_type: Option<String>,
    /// Category key such as `law` or its Georgian label
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Substring of the teaching language
    #[arg(long)]
    pub(crate) teaching_language: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Program catalog CSV (defaults to APP_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Exam result as `<exam>=<percentage>`; repeat once per exam
    #[arg(long = "score", value_parser = parse_score_arg)]
    pub(crate) scores: Vec<(String, f64)>,
    /// Exam key holding the foreign-language result, e.g. `ინგლისური ენა`
    #[arg(long)]
    pub(crate) foreign_language: Option<String>,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
    /// Number of programs to print (defaults to APP_TOP_N)
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct RequiredExamsArgs {
    /// Program catalog CSV (defaults to APP_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Program catalog CSV (defaults to APP_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

/// Config, telemetry and catalog for a one-shot command.
fn cli_service(catalog: Option<PathBuf>) -> Result<RecommendationService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    load_service(
        &resolve_catalog(catalog, &config),
        config.catalog.default_top_n,
    )
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        catalog,
        scores,
        foreign_language,
        filters,
        top,
    } = args;

    let service = cli_service(catalog)?;

    let request = RecommendationRequest {
        city: filters.city,
        institution_type: filters.institution_type,
        category: filters.category,
        teaching_language: filters.teaching_language,
        foreign_language,
        exam_scores: scores.into_iter().collect(),
        top_n: top,
    };
    let view = service.recommend(&request)?;

    for line in recommendation_lines(&view) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_required_exams(args: RequiredExamsArgs) -> Result<(), AppError> {
    let service = cli_service(args.catalog)?;

    let request = RequiredExamsRequest {
        city: args.filters.city,
        institution_type: args.filters.institution_type,
        category: args.filters.category,
        teaching_language: args.filters.teaching_language,
    };
    let view = service.required_exams(&request)?;

    for line in required_exam_lines(&view) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_catalog_summary(args: CatalogArgs) -> Result<(), AppError> {
    let service = cli_service(args.catalog)?;

    for line in summary_lines(&service.catalog().summary()) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn recommendation_lines(view: &RecommendationsView) -> Vec<String> {
    if view.recommendations.is_empty() {
        return vec!["No programs match the selected filters.".to_string()];
    }

    let mut lines = vec![format!("Top {} programs", view.total_found)];
    for (rank, entry) in view.recommendations.iter().enumerate() {
        let program = &entry.program;
        lines.push(format!(
            "{:>3}. [{}] {} ({}, {}) {:.1}% {}",
            rank + 1,
            program.program_code,
            program.program_name,
            program.city,
            program.institution_type.label(),
            entry.score.compatibility_percent,
            entry.admission_chance_label,
        ));
        if !entry.score.meets_requirements() {
            lines.push(format!("     - {}", entry.message));
        }
    }
    lines
}

pub(crate) fn required_exam_lines(view: &RequiredExamsView) -> Vec<String> {
    let mut lines = vec![format!("Programs matched: {}", view.programs_found)];
    lines.push("Mandatory exams:".to_string());
    lines.extend(view.mandatory_exams.iter().map(|exam| format!("  - {exam}")));
    lines.push("Elective exams:".to_string());
    if view.elective_exams.is_empty() {
        lines.push("  (none)".to_string());
    } else {
        lines.extend(view.elective_exams.iter().map(|exam| format!("  - {exam}")));
    }
    lines
}

pub(crate) fn summary_lines(summary: &CatalogSummary) -> Vec<String> {
    vec![
        format!("Programs: {}", summary.total_programs),
        format!("Universities: {}", summary.universities),
        format!("Public programs: {}", summary.public_programs),
        format!("Private programs: {}", summary.private_programs),
        format!("Loaded at: {}", summary.loaded_at.to_rfc3339()),
    ]
}
