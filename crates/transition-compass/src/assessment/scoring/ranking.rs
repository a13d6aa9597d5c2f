use serde::Serialize;

use super::super::config::DomainOrder;
use super::super::domain::Domain;
use super::DomainScores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ranking {
    pub top_strength: Domain,
    pub top_growth_area: Domain,
}

/// Pick the best and worst domains by raw score.
///
/// Domains are walked in canonical order and a later domain only displaces the current pick
/// on a strict improvement, so ties keep the earlier domain. When every raw score is equal
/// both picks are the lead domain. Levels play no part.
pub fn resolve_ranking(scores: &DomainScores, order: &DomainOrder) -> Ranking {
    let lead = order.lead();
    let mut top_strength = lead;
    let mut top_growth_area = lead;
    let mut best = scores.raw(lead);
    let mut worst = best;

    for domain in order.iter().skip(1) {
        let score = scores.raw(domain);
        if score > best {
            best = score;
            top_strength = domain;
        }
        if score < worst {
            worst = score;
            top_growth_area = domain;
        }
    }

    Ranking {
        top_strength,
        top_growth_area,
    }
}
