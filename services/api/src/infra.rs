use admission_advisor::config::AppConfig;
use admission_advisor::error::AppError;
use admission_advisor::scoring::ScoringEngine;
use admission_advisor::{CatalogLoader, RecommendationService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the catalog once and wraps it in a shareable service.
pub(crate) fn load_service(
    path: &Path,
    default_top_n: usize,
) -> Result<RecommendationService, AppError> {
    let catalog = CatalogLoader::from_path(path)?;
    Ok(RecommendationService::new(
        Arc::new(catalog),
        ScoringEngine::default(),
        default_top_n,
    ))
}

/// Catalog path from the flag when given, otherwise from configuration.
pub(crate) fn resolve_catalog(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.unwrap_or_else(|| config.catalog.path.clone())
}

/// Parses `<exam>=<percentage>`; the split happens at the last `=`.
pub(crate) fn parse_score_arg(raw: &str) -> Result<(String, f64), String> {
    let (exam, score) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected '<exam>=<percentage>', got '{raw}'"))?;

    let exam = exam.trim();
    if exam.is_empty() {
        return Err(format!("missing exam name in '{raw}'"));
    }

    let score = score
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|err| format!("failed to parse score in '{raw}' ({err})"))?;

    Ok((exam.to_string(), score))
}
