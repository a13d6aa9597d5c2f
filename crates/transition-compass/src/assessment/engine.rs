use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::classify::{detect_failure_patterns, infer_archetype, selected_tags};
use super::config::AssessmentVariant;
use super::content::ContentCatalog;
use super::domain::{AnswerMap, Locale, Question, RoleId};
use super::insights::compose_insights;
use super::questions::compose_questions;
use super::recommend::{select_actions, select_techniques};
use super::report::views::{
    ArchetypeView, DomainScoreView, FailureFactorView, QuestionView, RecommendationView,
};
use super::report::{AssessmentResult, QuestionSet};
use super::scoring::{aggregate, resolve_ranking};
use super::validation::CatalogValidationError;

/// Answers collected for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    #[serde(
        default = "RoleId::general",
        alias = "role",
        deserialize_with = "role_or_general"
    )]
    pub role_id: RoleId,
    #[serde(default, alias = "sessionAnswers")]
    pub answers: AnswerMap,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

fn role_or_general<'de, D>(deserializer: D) -> Result<RoleId, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(RoleId::or_general)
}

/// Scorer for one variant over a shared, validated content catalog.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalog: Arc<ContentCatalog>,
    variant: AssessmentVariant,
}

impl AssessmentEngine {
    pub fn new(
        catalog: Arc<ContentCatalog>,
        variant: AssessmentVariant,
    ) -> Result<Self, CatalogValidationError> {
        catalog.validate(&variant)?;
        Ok(Self { catalog, variant })
    }

    pub fn variant(&self) -> &AssessmentVariant {
        &self.variant
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn questions(&self, role: &RoleId) -> Vec<&Question> {
        compose_questions(&self.catalog.questions, role, &self.variant.scoring)
    }

    pub fn question_set(&self, role: &RoleId, locale: Locale) -> QuestionSet {
        QuestionSet {
            variant: self.variant.id,
            locale,
            role: role.clone(),
            questions: self
                .questions(role)
                .into_iter()
                .map(|question| QuestionView::localize(question, locale))
                .collect(),
        }
    }

    pub fn assess(&self, role: &RoleId, answers: &AnswerMap, locale: Locale) -> AssessmentResult {
        let scoring = &self.variant.scoring;
        let catalog = &*self.catalog;

        let questions = self.questions(role);
        let scores = aggregate(answers, &questions, scoring);
        let ranking = resolve_ranking(&scores, &scoring.domains);

        let tags = selected_tags(answers, &questions);
        let answered_count = tags.len();
        let all_tags: Vec<&str> = tags.iter().map(|selected| selected.tag).collect();

        let archetype = scoring.archetype_domain.map(|domain| {
            let domain_tags: Vec<&str> = tags
                .iter()
                .filter(|selected| selected.domain == domain)
                .map(|selected| selected.tag)
                .collect();
            let inference = infer_archetype(&domain_tags, &catalog.archetypes);
            ArchetypeView::localize(&inference, &catalog.archetypes, locale)
        });

        let failure_factors: Vec<FailureFactorView> =
            detect_failure_patterns(&all_tags, &catalog.failure_patterns)
                .iter()
                .map(|detected| FailureFactorView::localize(detected, locale))
                .collect();

        let insights = compose_insights(
            &scores,
            &ranking,
            &scoring.domains,
            &catalog.insights,
            &self.variant.insights,
            locale,
        );

        let limits = self.variant.recommendations;
        let recommended_actions =
            select_actions(&scores, &scoring.domains, &catalog.actions, limits.actions)
                .into_iter()
                .map(|entry| RecommendationView::localize(entry, locale))
                .collect();
        let techniques = select_techniques(
            &scores,
            &scoring.domains,
            &catalog.techniques,
            limits.techniques,
        )
        .into_iter()
        .map(|entry| RecommendationView::localize(entry, locale))
        .collect();

        debug!(
            variant = %self.variant.id,
            role = %role,
            answered = answered_count,
            top_strength = %ranking.top_strength,
            top_growth_area = %ranking.top_growth_area,
            failure_factors = failure_factors.len(),
            "assessment scored"
        );

        AssessmentResult {
            variant: self.variant.id,
            locale,
            role: role.clone(),
            question_count: questions.len(),
            answered_count,
            domain_scores: scores
                .iter()
                .map(|(domain, score)| (domain, DomainScoreView::localize(domain, score, locale)))
                .collect(),
            overall_score: scores.overall_percentage(),
            top_strength: ranking.top_strength,
            top_growth_area: ranking.top_growth_area,
            insights,
            archetype,
            failure_factors,
            recommended_actions,
            techniques,
        }
    }
}
