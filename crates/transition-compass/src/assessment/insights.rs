use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::config::{DomainOrder, InsightPolicy};
use super::domain::{BilingualText, Domain, Level, Locale};
use super::scoring::{DomainScores, Ranking};

/// Narrative text for one domain. Index 0 of `strengths` and `growth_areas` is the lead
/// message used when the domain ranks first; index 1 is the secondary message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainMessages {
    #[serde(default)]
    pub strengths: Vec<BilingualText>,
    #[serde(default)]
    pub growth_areas: Vec<BilingualText>,
    #[serde(default)]
    pub next_steps: Vec<BilingualText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightCatalog {
    #[serde(default)]
    pub domains: BTreeMap<Domain, DomainMessages>,
    #[serde(default)]
    pub call_to_action: Option<BilingualText>,
}

impl InsightCatalog {
    fn messages(&self, domain: Domain) -> Option<&DomainMessages> {
        self.domains.get(&domain)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Localized strengths, growth areas, and next steps for a scored profile.
///
/// Lookups that miss a message are skipped rather than treated as errors.
pub fn compose_insights(
    scores: &DomainScores,
    ranking: &Ranking,
    order: &DomainOrder,
    catalog: &InsightCatalog,
    policy: &InsightPolicy,
    locale: Locale,
) -> Insights {
    let strengths = ranked_messages(
        scores,
        order,
        catalog,
        locale,
        ranking.top_strength,
        Level::Strength,
        |messages| &messages.strengths,
        policy.max_strengths,
    );

    let growth_areas = ranked_messages(
        scores,
        order,
        catalog,
        locale,
        ranking.top_growth_area,
        Level::GrowthArea,
        |messages| &messages.growth_areas,
        policy.max_growth_areas,
    );

    let mut next_steps: Vec<String> = catalog
        .messages(ranking.top_growth_area)
        .map(|messages| {
            messages
                .next_steps
                .iter()
                .map(|step| step.get(locale).to_string())
                .collect()
        })
        .unwrap_or_default();

    if policy.secondary_next_step {
        let runner_up = domains_by_raw_score(scores, order)
            .into_iter()
            .find(|domain| *domain != ranking.top_growth_area);
        let step = runner_up
            .and_then(|domain| catalog.messages(domain))
            .and_then(|messages| messages.next_steps.first());
        if let Some(step) = step {
            next_steps.push(step.get(locale).to_string());
        }
    }

    if policy.call_to_action {
        if let Some(text) = &catalog.call_to_action {
            next_steps.push(text.get(locale).to_string());
        }
    }

    Insights {
        strengths,
        growth_areas,
        next_steps,
    }
}

/// Lead message of the ranked domain, then the secondary message of every other domain at
/// `level`. With no domain at `level` at all, the ranked domain's own secondary message
/// keeps the list from being empty.
#[allow(clippy::too_many_arguments)]
fn ranked_messages<F>(
    scores: &DomainScores,
    order: &DomainOrder,
    catalog: &InsightCatalog,
    locale: Locale,
    ranked: Domain,
    level: Level,
    slot: F,
    cap: Option<usize>,
) -> Vec<String>
where
    F: Fn(&DomainMessages) -> &Vec<BilingualText>,
{
    let message = |domain: Domain, index: usize| {
        catalog
            .messages(domain)
            .and_then(|messages| slot(messages).get(index))
            .map(|text| text.get(locale).to_string())
    };

    let mut lines = Vec::new();
    lines.extend(message(ranked, 0));

    let mut any_at_level = scores.level(ranked) == Some(level);
    for domain in order.iter().filter(|domain| *domain != ranked) {
        if scores.level(domain) == Some(level) {
            any_at_level = true;
            lines.extend(message(domain, 1));
        }
    }

    if !any_at_level {
        lines.extend(message(ranked, 1));
    }

    if let Some(cap) = cap {
        lines.truncate(cap);
    }
    lines
}

/// Domains ascending by raw score; equal scores keep canonical order.
fn domains_by_raw_score(scores: &DomainScores, order: &DomainOrder) -> Vec<Domain> {
    let mut domains: Vec<Domain> = order.iter().collect();
    domains.sort_by_key(|domain| scores.raw(*domain));
    domains
}
