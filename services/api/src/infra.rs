use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;
use transition_compass::assessment::{AnswerMap, AssessmentService, ContentCatalog, Locale};
use transition_compass::config::AssessmentSettings;
use transition_compass::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the configured content, or the embedded standard catalog, and validate it against
/// every variant.
pub(crate) fn load_assessment_service(
    settings: &AssessmentSettings,
) -> Result<AssessmentService, AppError> {
    let catalog = match &settings.content_dir {
        Some(dir) => ContentCatalog::from_dir(dir)?,
        None => ContentCatalog::standard()?,
    };
    debug!(
        content_dir = ?settings.content_dir,
        actions = catalog.actions.len(),
        techniques = catalog.techniques.len(),
        "assessment content loaded"
    );

    let service = AssessmentService::new(Arc::new(catalog), settings.default_variant)?;
    Ok(service)
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    Ok(Locale::from_code(raw))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn read_answers(path: &Path) -> Result<AnswerMap, AppError> {
    let raw = fs::read_to_string(path)?;
    let answers = serde_json::from_str(&raw)?;
    Ok(answers)
}
