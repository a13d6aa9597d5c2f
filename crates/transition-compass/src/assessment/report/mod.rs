pub mod views;

use std::collections::BTreeMap;

use serde::Serialize;

use super::config::VariantId;
use super::domain::{Domain, Locale, RoleId};
use super::insights::Insights;
use views::{ArchetypeView, DomainScoreView, FailureFactorView, QuestionView, RecommendationView};

/// Serialized outcome of one submission. Field order is fixed, and every collection inside
/// is ordered, so identical input serializes to identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub variant: VariantId,
    pub locale: Locale,
    pub role: RoleId,
    pub question_count: usize,
    pub answered_count: usize,
    pub domain_scores: BTreeMap<Domain, DomainScoreView>,
    pub overall_score: u8,
    pub top_strength: Domain,
    pub top_growth_area: Domain,
    pub insights: Insights,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<ArchetypeView>,
    pub failure_factors: Vec<FailureFactorView>,
    pub recommended_actions: Vec<RecommendationView>,
    pub techniques: Vec<RecommendationView>,
}

/// Localized question set served before a session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    pub variant: VariantId,
    pub locale: Locale,
    pub role: RoleId,
    pub questions: Vec<QuestionView>,
}
