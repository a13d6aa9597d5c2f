use std::collections::HashSet;

use serde::Serialize;

use super::config::DomainOrder;
use super::domain::{BilingualText, Domain};
use super::scoring::DomainScores;
use super::validation::CatalogValidationError;

/// Action or facilitation technique eligible for one or more domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub domains: Vec<Domain>,
    pub title: BilingualText,
    pub detail: BilingualText,
}

impl CatalogEntry {
    pub fn applies_to(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationCatalog {
    entries: Vec<CatalogEntry>,
}

impl RecommendationCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn validate(&self, catalog: &'static str) -> Result<(), CatalogValidationError> {
        let mut ids = HashSet::new();
        for entry in &self.entries {
            if !ids.insert(entry.id.as_str()) {
                return Err(CatalogValidationError::DuplicateCatalogEntry {
                    catalog,
                    id: entry.id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Domains ascending by percentage. The sort is stable, so equal percentages keep
/// canonical order.
pub fn domains_by_percentage(scores: &DomainScores, order: &DomainOrder) -> Vec<Domain> {
    let mut domains: Vec<Domain> = order.iter().collect();
    domains.sort_by_key(|domain| scores.percentage(*domain));
    domains
}

/// Ordered-walk selection used for actions.
///
/// Walks domains weakest first and takes each domain's entries in catalog order, skipping ids
/// already taken, until `limit` entries are collected.
pub fn select_actions<'a>(
    scores: &DomainScores,
    order: &DomainOrder,
    catalog: &'a RecommendationCatalog,
    limit: usize,
) -> Vec<&'a CatalogEntry> {
    let mut selected = Vec::with_capacity(limit);
    let mut seen = HashSet::new();

    if limit == 0 {
        return selected;
    }

    for domain in domains_by_percentage(scores, order) {
        for entry in catalog.entries.iter().filter(|entry| entry.applies_to(domain)) {
            if !seen.insert(entry.id.as_str()) {
                continue;
            }
            selected.push(entry);
            if selected.len() == limit {
                return selected;
            }
        }
    }

    selected
}

/// Overlap-ranked selection used for techniques.
///
/// Relevance is the number of the two weakest domains an entry is tagged with. Entries are
/// stably sorted by relevance, highest first, so ties stay in catalog order.
pub fn select_techniques<'a>(
    scores: &DomainScores,
    order: &DomainOrder,
    catalog: &'a RecommendationCatalog,
    limit: usize,
) -> Vec<&'a CatalogEntry> {
    let focus: Vec<Domain> = domains_by_percentage(scores, order)
        .into_iter()
        .take(2)
        .collect();

    let mut ranked: Vec<(usize, &CatalogEntry)> = catalog
        .entries
        .iter()
        .map(|entry| {
            let relevance = focus
                .iter()
                .filter(|domain| entry.applies_to(**domain))
                .count();
            (relevance, entry)
        })
        .collect();

    ranked.sort_by(|left, right| right.0.cmp(&left.0));

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, entry)| entry)
        .collect()
}
