use std::collections::BTreeMap;

use serde::Serialize;

use super::super::classify::{ArchetypeInference, ArchetypeTable, DetectedPattern};
use super::super::domain::{Archetype, Domain, Level, Locale, OptionId, Question, QuestionId};
use super::super::recommend::CatalogEntry;
use super::super::scoring::DomainScore;

/// Localized option as shown to the subject. Scores and tags stay server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub id: OptionId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: QuestionId,
    pub domain: Domain,
    pub domain_label: &'static str,
    pub prompt: String,
    pub options: Vec<OptionView>,
}

impl QuestionView {
    pub fn localize(question: &Question, locale: Locale) -> Self {
        Self {
            id: question.id.clone(),
            domain: question.domain,
            domain_label: question.domain.label(locale),
            prompt: question.prompt.get(locale).to_string(),
            options: question
                .options
                .iter()
                .map(|option| OptionView {
                    id: option.id.clone(),
                    label: option.label.get(locale).to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScoreView {
    pub label: &'static str,
    pub score: u32,
    pub max: u32,
    pub percentage: u8,
    pub level: Level,
    pub level_label: &'static str,
}

impl DomainScoreView {
    pub fn localize(domain: Domain, score: &DomainScore, locale: Locale) -> Self {
        Self {
            label: domain.label(locale),
            score: score.score,
            max: score.max,
            percentage: score.percentage,
            level: score.level,
            level_label: score.level.label(locale),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchetypeView {
    pub id: Archetype,
    pub name: String,
    pub description: String,
    pub votes: u32,
    pub tallies: BTreeMap<Archetype, u32>,
}

impl ArchetypeView {
    /// Falls back to the archetype key when the table carries no profile for it.
    pub fn localize(inference: &ArchetypeInference, table: &ArchetypeTable, locale: Locale) -> Self {
        let (name, description) = match table.profile(inference.archetype) {
            Some(profile) => (
                profile.name.get(locale).to_string(),
                profile.description.get(locale).to_string(),
            ),
            None => (inference.archetype.key().to_string(), String::new()),
        };

        Self {
            id: inference.archetype,
            name,
            description,
            votes: inference.votes(),
            tallies: inference.tallies.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureFactorView {
    pub id: String,
    pub name: String,
    pub message: String,
    pub icon: String,
    pub matched: u32,
}

impl FailureFactorView {
    pub fn localize(detected: &DetectedPattern<'_>, locale: Locale) -> Self {
        let pattern = detected.pattern;
        Self {
            id: pattern.id.clone(),
            name: pattern.name.get(locale).to_string(),
            message: pattern.message.get(locale).to_string(),
            icon: pattern.icon.clone(),
            matched: detected.matched,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationView {
    pub id: String,
    pub title: String,
    pub detail: String,
    pub domains: Vec<Domain>,
}

impl RecommendationView {
    pub fn localize(entry: &CatalogEntry, locale: Locale) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.get(locale).to_string(),
            detail: entry.detail.get(locale).to_string(),
            domains: entry.domains.clone(),
        }
    }
}
