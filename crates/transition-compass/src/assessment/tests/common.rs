use std::collections::BTreeMap;
use std::sync::Arc;

use crate::assessment::config::{
    DenominatorMode, DomainOrder, InsightPolicy, LevelThresholds, ScoringConfig, VariantId,
};
use crate::assessment::content::ContentCatalog;
use crate::assessment::domain::{
    AnswerOption, BilingualText, Domain, Level, OptionId, Question, QuestionId, RoleId,
};
use crate::assessment::insights::{DomainMessages, InsightCatalog};
use crate::assessment::questions::{QuestionBank, RoleQuestion};
use crate::assessment::recommend::{CatalogEntry, RecommendationCatalog};
use crate::assessment::scoring::{DomainScore, DomainScores};
use crate::assessment::AssessmentService;

pub(super) const OPTION_LETTERS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Question whose options are `{id}_a`, `{id}_b`, ... in the order given.
pub(super) fn question(id: &str, domain: Domain, options: &[(u8, &str)]) -> Question {
    Question {
        id: QuestionId::from(id),
        domain,
        prompt: BilingualText::new(format!("{id}?"), format!("¿{id}?")),
        options: options
            .iter()
            .zip(OPTION_LETTERS)
            .map(|((score, tag), letter)| AnswerOption {
                id: OptionId(format!("{id}_{letter}")),
                score: *score,
                tag: (*tag).to_string(),
                label: BilingualText::new(format!("{id} {letter}"), format!("{id} {letter} es")),
            })
            .collect(),
    }
}

/// Four options scored 1 through 4 and tagged `{domain}_low` .. `{domain}_high`.
pub(super) fn graded_question(id: &str, domain: Domain) -> Question {
    let key = domain.key();
    question(
        id,
        domain,
        &[
            (1, &format!("{key}_low")),
            (2, &format!("{key}_mid_low")),
            (3, &format!("{key}_mid_high")),
            (4, &format!("{key}_high")),
        ],
    )
}

/// Three universal questions per domain, plus tailored `executive` questions for people and
/// transition.
pub(super) fn bank() -> QuestionBank {
    let universal: BTreeMap<Domain, Vec<Question>> = Domain::ordered()
        .into_iter()
        .map(|domain| {
            let pool = (1..=3)
                .map(|n| graded_question(&format!("{}_{n}", domain.key()), domain))
                .collect();
            (domain, pool)
        })
        .collect();

    let role_specific = vec![
        RoleQuestion {
            role: RoleId::from("executive"),
            question: graded_question("people_executive", Domain::People),
        },
        RoleQuestion {
            role: RoleId::from("executive"),
            question: graded_question("transition_executive", Domain::Transition),
        },
    ];

    QuestionBank::new(universal, role_specific)
}

pub(super) fn order(domains: &[Domain]) -> DomainOrder {
    DomainOrder::new(domains.to_vec()).expect("valid domain order")
}

pub(super) fn scoring_config(
    domains: &[Domain],
    thresholds: LevelThresholds,
    denominator: DenominatorMode,
) -> ScoringConfig {
    ScoringConfig {
        domains: order(domains),
        questions_per_domain: 3,
        max_option_score: 4,
        thresholds,
        denominator,
        archetype_domain: None,
    }
}

pub(super) fn percentage_thresholds() -> LevelThresholds {
    LevelThresholds::Percentage {
        strength: 75,
        developing: 50,
    }
}

/// Scores built directly from `(domain, raw, percentage, level)` rows; `max` is 12.
pub(super) fn scores(rows: &[(Domain, u32, u8, Level)]) -> DomainScores {
    rows.iter()
        .map(|(domain, score, percentage, level)| {
            (
                *domain,
                DomainScore {
                    score: *score,
                    max: 12,
                    percentage: *percentage,
                    level: *level,
                },
            )
        })
        .collect()
}

pub(super) fn entry(id: &str, domains: &[Domain]) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        domains: domains.to_vec(),
        title: BilingualText::new(format!("{id} title"), format!("{id} título")),
        detail: BilingualText::new(format!("{id} detail"), format!("{id} detalle")),
    }
}

pub(super) fn recommendations(entries: Vec<CatalogEntry>) -> RecommendationCatalog {
    RecommendationCatalog::new(entries)
}

fn text(domain: Domain, slot: &str) -> BilingualText {
    BilingualText::new(
        format!("{} {slot}", domain.key()),
        format!("{} {slot} es", domain.key()),
    )
}

/// Messages read `<domain> <slot>` in English and `<domain> <slot> es` in Spanish.
pub(super) fn insight_catalog() -> InsightCatalog {
    let domains = Domain::ordered()
        .into_iter()
        .map(|domain| {
            (
                domain,
                DomainMessages {
                    strengths: vec![text(domain, "strength lead"), text(domain, "strength more")],
                    growth_areas: vec![text(domain, "growth lead"), text(domain, "growth more")],
                    next_steps: vec![text(domain, "step one"), text(domain, "step two")],
                },
            )
        })
        .collect();

    InsightCatalog {
        domains,
        call_to_action: Some(BilingualText::new("Book a debrief", "Agenda una sesión")),
    }
}

pub(super) fn open_policy() -> InsightPolicy {
    InsightPolicy {
        max_strengths: None,
        max_growth_areas: None,
        secondary_next_step: true,
        call_to_action: true,
    }
}

pub(super) fn standard_catalog() -> Arc<ContentCatalog> {
    Arc::new(ContentCatalog::standard().expect("standard catalog loads"))
}

pub(super) fn standard_service() -> AssessmentService {
    AssessmentService::new(standard_catalog(), VariantId::Transition)
        .expect("standard catalog validates")
}
